//! From trait implementations for GocdError conversions

use super::types::GocdError;

impl From<std::io::Error> for GocdError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
            path: None,
        }
    }
}

impl From<serde_json::Error> for GocdError {
    fn from(error: serde_json::Error) -> Self {
        Self::json(error.to_string())
    }
}

impl From<toml::de::Error> for GocdError {
    fn from(error: toml::de::Error) -> Self {
        Self::config_with_context(error.to_string(), "Parsing TOML configuration")
    }
}

impl From<reqwest::Error> for GocdError {
    fn from(error: reqwest::Error) -> Self {
        let url = error.url().map(|u| u.to_string());
        match error.status() {
            Some(status) => Self::Http {
                message: error.to_string(),
                url,
                status_code: Some(status.as_u16()),
            },
            None => Self::Transport {
                message: error.to_string(),
                url,
            },
        }
    }
}
