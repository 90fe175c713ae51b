//! Client bootstrap

use super::types::{ClientInner, GocdClient, ServerConfig};
use super::user_agent::{HostTool, user_agent};
use crate::credential::ResolvedConfig;
use crate::error::GocdResult;
use crate::transport::{HttpTransport, build_transport};
use std::sync::Arc;
use tracing::debug;

impl GocdClient {
    /// Bind resolved settings to an already built transport.
    ///
    /// Performs no I/O and cannot fail: an unreachable server or wrong
    /// credentials surface on the first request.
    pub fn new(config: &ResolvedConfig, transport: Arc<dyn HttpTransport>, host: &HostTool) -> Self {
        let server = ServerConfig {
            server: config.base_url().to_string(),
            username: config.username().to_string(),
            password: config.password().to_string(),
            skip_ssl_check: config.skip_ssl_check(),
        };
        let user_agent = user_agent(host);

        debug!(
            "Created GoCD client for '{}' ({:?}, user agent: {})",
            server.server,
            transport.kind(),
            user_agent
        );

        Self {
            inner: Arc::new(ClientInner {
                config: server,
                user_agent,
                transport,
            }),
        }
    }

    /// Build the transport for `config` and bootstrap a client on it.
    ///
    /// Fails only if the HTTP client itself cannot be constructed.
    pub fn from_resolved(config: &ResolvedConfig, host: &HostTool) -> GocdResult<Self> {
        let transport = build_transport(config.base_url(), config.skip_ssl_check())?;
        Ok(Self::new(config, transport, host))
    }
}
