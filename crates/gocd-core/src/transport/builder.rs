//! Transport construction

use super::http::{HttpResponse, HttpTransport, TransportKind};
use super::logging::LoggingTransport;
use crate::error::{GocdError, GocdResult};
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use tracing::{debug, warn};

/// Component tag used by the logging interceptor
pub const COMPONENT: &str = "GoCD";

/// Transport backed by a reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    kind: TransportKind,
}

impl ReqwestTransport {
    /// Choose and build the client for `base_url`.
    ///
    /// Any URL starting with `https` gets a rustls client whose certificate
    /// verification is disabled only when `skip_ssl_check` is set. Everything
    /// else gets the default client and ignores `skip_ssl_check`.
    pub fn for_base_url(base_url: &str, skip_ssl_check: bool) -> GocdResult<Self> {
        if base_url.starts_with("https") {
            debug!("GoCD is using https.");
            let verify_certificates = !skip_ssl_check;
            if !verify_certificates {
                warn!("TLS certificate verification is disabled for {}", base_url);
            }

            let client = Client::builder()
                .use_rustls_tls()
                .danger_accept_invalid_certs(!verify_certificates)
                .build()
                .map_err(|e| GocdError::transport(format!("Failed to create HTTP client: {}", e)))?;

            Ok(Self {
                client,
                kind: TransportKind::Tls { verify_certificates },
            })
        } else {
            let client = Client::builder()
                .build()
                .map_err(|e| GocdError::transport(format!("Failed to create HTTP client: {}", e)))?;

            Ok(Self {
                client,
                kind: TransportKind::Plain,
            })
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    fn kind(&self) -> TransportKind {
        self.kind
    }

    async fn round_trip(&self, request: reqwest::Request) -> GocdResult<HttpResponse> {
        let response = self.client.execute(request).await?;

        let status = response.status();
        let headers = response.headers().clone();
        let url = response.url().to_string();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse {
            status,
            headers,
            url,
            body,
        })
    }
}

/// Build the logged transport for a resolved base URL and skip flag
pub fn build_transport(base_url: &str, skip_ssl_check: bool) -> GocdResult<Arc<dyn HttpTransport>> {
    let inner = ReqwestTransport::for_base_url(base_url, skip_ssl_check)?;
    Ok(Arc::new(LoggingTransport::new(COMPONENT, inner)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::testing::capture_logs;

    #[test]
    fn test_https_verifies_certificates_by_default() {
        let transport = build_transport("https://ci.example.com/go/", false).unwrap();
        assert_eq!(
            transport.kind(),
            TransportKind::Tls {
                verify_certificates: true
            }
        );
        assert!(transport.kind().verifies_certificates());
    }

    #[test]
    fn test_https_with_skip_disables_verification() {
        let transport = build_transport("https://ci.example.com/go/", true).unwrap();
        assert_eq!(
            transport.kind(),
            TransportKind::Tls {
                verify_certificates: false
            }
        );
    }

    #[test]
    fn test_plain_http_ignores_skip_flag() {
        for skip in [false, true] {
            let transport = build_transport("http://gocd.local", skip).unwrap();
            assert_eq!(transport.kind(), TransportKind::Plain);
        }
    }

    #[test]
    fn test_prefix_match_is_literal() {
        // Only the literal prefix decides; an empty or odd URL is plain.
        assert_eq!(build_transport("", true).unwrap().kind(), TransportKind::Plain);
        assert_eq!(
            build_transport("HTTPS://ci.example.com", false).unwrap().kind(),
            TransportKind::Plain
        );
    }

    #[tokio::test]
    async fn test_skip_flag_drives_verification_and_warning() {
        let logs = capture_logs(async {
            let transport = build_transport("https://ci.example.com/go/", true).unwrap();
            assert!(!transport.kind().verifies_certificates());
        })
        .await;
        assert!(logs.contains("TLS certificate verification is disabled"));

        let logs = capture_logs(async {
            let transport = build_transport("https://ci.example.com/go/", false).unwrap();
            assert!(transport.kind().verifies_certificates());
        })
        .await;
        assert!(logs.contains("GoCD is using https."));
        assert!(!logs.contains("verification is disabled"));
    }
}
