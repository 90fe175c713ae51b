//! Credential resolution for the GoCD provider
//!
//! Every provider field resolves to a concrete value: the explicit
//! configuration wins, the field's environment variable fills in otherwise,
//! and an absent value becomes an empty string or `false`. Nothing here fails;
//! a missing base URL or bad password only surfaces on the first API call.
//!
//! # Example
//!
//! ```
//! use gocd_core::config::ProviderInput;
//! use gocd_core::credential::{ConfigResolver, MapEnv};
//!
//! let env = MapEnv::new().with_var("GOCD_USERNAME", "admin");
//! let input = ProviderInput::new().with_baseurl("https://ci.example.com/go/");
//!
//! let resolved = ConfigResolver::new(&env).resolve(&input);
//! assert_eq!(resolved.base_url(), "https://ci.example.com/go/");
//! assert_eq!(resolved.username(), "admin");
//! assert!(!resolved.skip_ssl_check());
//! ```

mod env;
mod resolved;
mod resolver;
mod source;

pub use env::{EnvSource, MapEnv, ProcessEnv};
pub use resolved::{ResolvedConfig, ResolvedField, mask_secret};
pub use resolver::ConfigResolver;
pub use source::ValueSource;
