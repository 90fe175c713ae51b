//! Where a resolved value came from

use serde::Serialize;
use std::fmt;

/// The origin of a resolved provider field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ValueSource {
    /// Set in the provider configuration block
    Explicit,
    /// Read from an environment variable
    Environment {
        /// The environment variable name
        var_name: String,
    },
    /// Neither configured nor in the environment: empty string or `false`
    Default,
}

impl ValueSource {
    /// Create an environment variable source
    pub fn env(var_name: impl Into<String>) -> Self {
        ValueSource::Environment {
            var_name: var_name.into(),
        }
    }

    /// Get a description of where this value came from
    pub fn description(&self) -> String {
        match self {
            ValueSource::Explicit => "configuration".to_string(),
            ValueSource::Environment { var_name } => format!("environment: ${}", var_name),
            ValueSource::Default => "default".to_string(),
        }
    }

    /// Whether a user supplied this value one way or another
    pub fn is_user_configured(&self) -> bool {
        !matches!(self, ValueSource::Default)
    }
}

impl fmt::Display for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_description() {
        assert_eq!(ValueSource::Explicit.to_string(), "configuration");
        assert_eq!(ValueSource::env("GOCD_URL").to_string(), "environment: $GOCD_URL");
        assert_eq!(ValueSource::Default.to_string(), "default");
    }

    #[test]
    fn test_source_is_user_configured() {
        assert!(ValueSource::Explicit.is_user_configured());
        assert!(ValueSource::env("GOCD_PASSWORD").is_user_configured());
        assert!(!ValueSource::Default.is_user_configured());
    }
}
