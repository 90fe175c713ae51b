//! Core error type for the GoCD provider

use thiserror::Error;

/// Result type alias for GoCD provider operations
pub type GocdResult<T> = Result<T, GocdError>;

/// Main error type for the GoCD provider
#[derive(Error, Debug, Clone)]
pub enum GocdError {
    /// Configuration file or input errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// Schema registration errors (duplicate resource names and similar)
    #[error("Schema error: {message}")]
    Schema {
        message: String,
        name: Option<String>,
    },

    /// HTTP client construction or transport failures
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        url: Option<String>,
    },

    /// Non-success responses from the GoCD server
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        url: Option<String>,
        status_code: Option<u16>,
    },

    /// Invalid request input (bad URL, bad header value)
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        field: Option<String>,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json { message: String },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },
}

impl GocdError {
    /// Get the error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "GOCD_CONFIG",
            Self::Schema { .. } => "GOCD_SCHEMA",
            Self::Transport { .. } => "GOCD_TRANSPORT",
            Self::Http { .. } => "GOCD_HTTP",
            Self::InvalidInput { .. } => "GOCD_INVALID_INPUT",
            Self::Json { .. } => "GOCD_JSON",
            Self::Io { .. } => "GOCD_IO",
        }
    }

    /// Get the human-readable error message
    pub fn message(&self) -> &str {
        match self {
            Self::Config { message, .. }
            | Self::Schema { message, .. }
            | Self::Transport { message, .. }
            | Self::Http { message, .. }
            | Self::InvalidInput { message, .. }
            | Self::Json { message }
            | Self::Io { message, .. } => message,
        }
    }

    /// HTTP status code, for errors produced by a server response
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status_code, .. } => *status_code,
            _ => None,
        }
    }
}
