//! Error types for the GoCD provider
//!
//! Credential resolution and client bootstrap never fail (missing values
//! resolve to empty strings or `false`). The errors here cover the edges
//! around them: reading config files, registering schemas, building the
//! HTTP client and performing requests against the server.

mod constructors;
mod conversions;
mod types;

pub use types::{GocdError, GocdResult};
