//! HTTP transport for talking to a GoCD server
//!
//! [`build_transport`] picks a TLS-capable client for `https` base URLs (with
//! certificate verification controlled by `skip_ssl_check`) and a plain client
//! otherwise, then wraps it in a [`LoggingTransport`] so every round trip
//! shows up in the debug log under the `GoCD` tag.
//!
//! No retries or timeouts are added here.

mod builder;
mod http;
mod logging;
#[cfg(test)]
pub(crate) mod testing;

pub use builder::{COMPONENT, ReqwestTransport, build_transport};
pub use http::{HttpResponse, HttpTransport, TransportKind};
pub use logging::LoggingTransport;
