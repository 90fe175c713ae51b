//! Client handle type definitions

use crate::transport::{HttpTransport, TransportKind};
use std::fmt;
use std::sync::Arc;

/// Server settings carried by the client, copied from the resolved config
#[derive(Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub server: String,
    pub username: String,
    pub password: String,
    pub skip_ssl_check: bool,
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("server", &self.server)
            .field("username", &self.username)
            .field("password", &crate::credential::mask_secret(&self.password))
            .field("skip_ssl_check", &self.skip_ssl_check)
            .finish()
    }
}

/// Shared, immutable handle to a GoCD server
#[derive(Clone)]
pub struct GocdClient {
    pub(super) inner: Arc<ClientInner>,
}

pub(super) struct ClientInner {
    pub(super) config: ServerConfig,
    pub(super) user_agent: String,
    pub(super) transport: Arc<dyn HttpTransport>,
}

impl GocdClient {
    pub fn server_config(&self) -> &ServerConfig {
        &self.inner.config
    }

    pub fn base_url(&self) -> &str {
        &self.inner.config.server
    }

    pub fn user_agent(&self) -> &str {
        &self.inner.user_agent
    }

    pub fn transport_kind(&self) -> TransportKind {
        self.inner.transport.kind()
    }
}

impl fmt::Debug for GocdClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GocdClient")
            .field("config", &self.inner.config)
            .field("user_agent", &self.inner.user_agent)
            .field("transport", &self.inner.transport.kind())
            .finish()
    }
}
