//! GoCD client handle
//!
//! [`GocdClient`] is what every resource and data source receives: the
//! server settings, a logged transport and a user agent, frozen at bootstrap
//! and shared read-only afterwards. Cloning is cheap.

mod constructor;
mod request;
mod types;
mod user_agent;

pub use request::{ACCEPT_V1, ServerVersion};
pub use types::{GocdClient, ServerConfig};
pub use user_agent::{HostTool, user_agent};

#[cfg(test)]
mod tests;
