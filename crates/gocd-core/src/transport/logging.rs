//! Request/response logging interceptor

use super::http::{HttpResponse, HttpTransport, TransportKind};
use crate::error::GocdResult;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap};
use std::time::Instant;
use tracing::{debug, warn};

const LOG_TARGET: &str = "gocd::http";

/// Decorates a transport with debug logging of every round trip.
///
/// Requests and responses pass through untouched; only the log output
/// redacts the `Authorization` header.
#[derive(Debug, Clone)]
pub struct LoggingTransport<T> {
    component: &'static str,
    inner: T,
}

impl<T: HttpTransport> LoggingTransport<T> {
    pub fn new(component: &'static str, inner: T) -> Self {
        Self { component, inner }
    }

    pub fn component(&self) -> &'static str {
        self.component
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }
}

#[async_trait]
impl<T: HttpTransport> HttpTransport for LoggingTransport<T> {
    fn kind(&self) -> TransportKind {
        self.inner.kind()
    }

    async fn round_trip(&self, request: reqwest::Request) -> GocdResult<HttpResponse> {
        let method = request.method().clone();
        let url = request.url().to_string();
        let body = request
            .body()
            .and_then(|b| b.as_bytes())
            .map(|b| String::from_utf8_lossy(b).into_owned())
            .unwrap_or_default();

        debug!(
            target: LOG_TARGET,
            component = self.component,
            headers = %format_headers(request.headers()),
            body = %body,
            "{} API Request: {} {}",
            self.component,
            method,
            url
        );

        let started = Instant::now();
        let result = self.inner.round_trip(request).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(response) => debug!(
                target: LOG_TARGET,
                component = self.component,
                elapsed_ms,
                headers = %format_headers(&response.headers),
                body = %response.text(),
                "{} API Response: {} {} -> {}",
                self.component,
                method,
                url,
                response.status
            ),
            Err(e) => warn!(
                target: LOG_TARGET,
                component = self.component,
                elapsed_ms,
                "{} API Request failed: {} {}: {}",
                self.component,
                method,
                url,
                e
            ),
        }

        result
    }
}

fn format_headers(headers: &HeaderMap) -> String {
    headers
        .iter()
        .map(|(name, value)| {
            if name == AUTHORIZATION {
                format!("{}: <redacted>", name)
            } else {
                format!("{}: {}", name, value.to_str().unwrap_or("<binary>"))
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
