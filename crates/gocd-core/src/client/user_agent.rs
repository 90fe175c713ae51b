//! User agent construction

use std::env;
use std::fmt;

/// The tool hosting the provider, stamped into the user agent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostTool {
    pub name: String,
    pub version: String,
}

impl HostTool {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// This provider acting as its own host
    pub fn current() -> Self {
        Self::new("gocd-provider", env!("CARGO_PKG_VERSION"))
    }

    /// Parse `name/version`; a missing version stays empty
    pub fn parse(s: &str) -> Self {
        match s.split_once('/') {
            Some((name, version)) => Self::new(name.trim(), version.trim()),
            None => Self::new(s.trim(), ""),
        }
    }
}

impl Default for HostTool {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for HostTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.version)
    }
}

/// `(<os> <arch>) <host>/<version>` for the running platform.
///
/// Blank host names or versions fall back to this crate's own so the
/// version token is never empty.
pub fn user_agent(host: &HostTool) -> String {
    let fallback = HostTool::current();
    let name = if host.name.trim().is_empty() {
        fallback.name.as_str()
    } else {
        host.name.as_str()
    };
    let version = if host.version.trim().is_empty() {
        fallback.version.as_str()
    } else {
        host.version.as_str()
    };

    format!("({} {}) {}/{}", env::consts::OS, env::consts::ARCH, name, version)
}
