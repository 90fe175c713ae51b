//! Core library for the GoCD provider
//!
//! Resolves the provider's connection settings and bootstraps the client
//! handle that every resource and data source uses to reach a GoCD server.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`config`] | Field table, typed provider input, file loading, CLI overrides |
//! | [`credential`] | Explicit/environment/default resolution of each field |
//! | [`transport`] | Plain or TLS transport wrapped in a logging interceptor |
//! | [`client`] | The shared client handle and its request helpers |
//! | [`provider`] | The provider descriptor and its configuration entry point |
//! | [`error`] | Error type for everything that can fail around the core |
//!
//! # Example
//!
//! ```no_run
//! use gocd_core::client::HostTool;
//! use gocd_core::config::{FIELD_DESCRIPTIONS, ProviderInput};
//! use gocd_core::credential::ProcessEnv;
//! use gocd_core::provider::ProviderDescriptor;
//!
//! # async fn example() -> gocd_core::error::GocdResult<()> {
//! let descriptor = ProviderDescriptor::new(FIELD_DESCRIPTIONS)?;
//! let input = ProviderInput::new().with_baseurl("https://ci.example.com/go/");
//! let client = descriptor.configure(&input, &ProcessEnv, &HostTool::new("Terraform", "1.5.7"))?;
//!
//! let version = client.server_version().await?;
//! println!("GoCD {}", version.full_version);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod credential;
pub mod error;
pub mod provider;
pub mod transport;

pub use client::{GocdClient, HostTool, ServerConfig};
pub use credential::{ConfigResolver, ResolvedConfig};
pub use error::{GocdError, GocdResult};
pub use provider::ProviderDescriptor;
