//! Transport trait and response type

use crate::error::{GocdError, GocdResult};
use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use std::borrow::Cow;

/// Which kind of connection a transport makes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// Unencrypted HTTP, the platform default client
    Plain,
    /// TLS, with or without certificate chain verification
    Tls { verify_certificates: bool },
}

impl TransportKind {
    pub fn verifies_certificates(&self) -> bool {
        matches!(
            self,
            TransportKind::Tls {
                verify_certificates: true
            }
        )
    }
}

/// A fully buffered HTTP response
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub url: String,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Body as text, replacing invalid UTF-8
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> GocdResult<T> {
        serde_json::from_slice(&self.body).map_err(|e| {
            GocdError::json(format!("Failed to decode response from {}: {}", self.url, e))
        })
    }
}

/// Executes one request against the server.
///
/// Implementations may decorate another transport (see
/// [`super::LoggingTransport`]) but must not alter the request or response.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// The kind of connection this transport makes
    fn kind(&self) -> TransportKind;

    /// Send `request` and buffer the response
    async fn round_trip(&self, request: reqwest::Request) -> GocdResult<HttpResponse>;
}
