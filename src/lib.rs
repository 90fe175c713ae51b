//! GoCD provider
//!
//! Entry points a host uses to discover and configure the provider. The
//! building blocks live in [`gocd_core`] and are re-exported here.
//!
//! # Example
//!
//! ```no_run
//! use gocd_provider::{HostTool, ProviderInput};
//!
//! # fn example() -> gocd_provider::GocdResult<()> {
//! let schema = gocd_provider::provider()?.to_json()?;
//! println!("{}", schema);
//!
//! let input = ProviderInput::new().with_baseurl("https://ci.example.com/go/");
//! let client = gocd_provider::configure(&input, &HostTool::new("Terraform", "1.5.7"))?;
//! println!("{}", client.user_agent());
//! # Ok(())
//! # }
//! ```

pub use gocd_core::{client, config, credential, error, provider, transport};

pub use gocd_core::client::{GocdClient, HostTool, ServerConfig};
pub use gocd_core::config::{FIELD_DESCRIPTIONS, ProviderInput};
pub use gocd_core::credential::{ConfigResolver, EnvSource, MapEnv, ProcessEnv, ResolvedConfig};
pub use gocd_core::error::{GocdError, GocdResult};
pub use gocd_core::provider::ProviderDescriptor;

/// The provider declaration with the default field descriptions
pub fn provider() -> GocdResult<ProviderDescriptor> {
    ProviderDescriptor::new(FIELD_DESCRIPTIONS)
}

/// Configure one provider instance against the process environment
pub fn configure(input: &ProviderInput, host: &HostTool) -> GocdResult<GocdClient> {
    provider()?.configure(input, &ProcessEnv, host)
}
