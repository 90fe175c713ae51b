//! Test doubles for the transport layer

use super::http::{HttpResponse, HttpTransport, TransportKind};
use crate::error::GocdResult;
use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use std::future::Future;
use std::io::Write;
use std::sync::Arc;

/// What a [`RecordingTransport`] saw
#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<String>,
}

/// Transport that records requests and answers with a canned response
#[derive(Debug, Clone)]
pub(crate) struct RecordingTransport {
    kind: TransportKind,
    status: StatusCode,
    body: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl RecordingTransport {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            kind: TransportKind::Plain,
            status,
            body: body.into(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_kind(mut self, kind: TransportKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    fn kind(&self) -> TransportKind {
        self.kind
    }

    async fn round_trip(&self, request: reqwest::Request) -> GocdResult<HttpResponse> {
        let url = request.url().to_string();
        self.requests.lock().push(RecordedRequest {
            method: request.method().clone(),
            url: url.clone(),
            headers: request.headers().clone(),
            body: request
                .body()
                .and_then(|b| b.as_bytes())
                .map(|b| String::from_utf8_lossy(b).into_owned()),
        });

        Ok(HttpResponse {
            status: self.status,
            headers: HeaderMap::new(),
            url,
            body: self.body.clone().into_bytes(),
        })
    }
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Run `future` with a debug-level subscriber and return everything it logged
pub(crate) async fn capture_logs<F: Future>(future: F) -> String {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let _guard = tracing::subscriber::set_default(subscriber);
    let _ = future.await;

    let bytes = buffer.0.lock().clone();
    String::from_utf8_lossy(&bytes).into_owned()
}
