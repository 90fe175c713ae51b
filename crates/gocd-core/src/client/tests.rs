//! Tests for client bootstrap and the request helpers

use super::*;
use crate::credential::ResolvedConfig;
use crate::transport::TransportKind;
use crate::transport::testing::RecordingTransport;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, StatusCode};
use std::sync::Arc;

fn client_with(config: &ResolvedConfig, transport: RecordingTransport) -> GocdClient {
    GocdClient::new(config, Arc::new(transport), &HostTool::new("Terraform", "1.5.7"))
}

#[test]
fn test_user_agent_embeds_platform_and_host() {
    let agent = user_agent(&HostTool::new("Terraform", "1.5.7"));
    assert_eq!(
        agent,
        format!("({} {}) Terraform/1.5.7", std::env::consts::OS, std::env::consts::ARCH)
    );
}

#[test]
fn test_user_agent_never_has_empty_version() {
    let agent = user_agent(&HostTool::new("Terraform", ""));
    assert!(agent.ends_with(&format!("Terraform/{}", env!("CARGO_PKG_VERSION"))));

    let agent = user_agent(&HostTool::new("", ""));
    assert!(agent.contains("gocd-provider/"));
    assert!(!agent.ends_with('/'));
}

#[test]
fn test_host_tool_parse() {
    assert_eq!(HostTool::parse("Terraform/1.5.7"), HostTool::new("Terraform", "1.5.7"));
    assert_eq!(HostTool::parse("Terraform"), HostTool::new("Terraform", ""));
    assert_eq!(HostTool::current().to_string(), format!("gocd-provider/{}", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_bootstrap_copies_resolved_values() {
    let config = ResolvedConfig::new("https://ci.example.com/go/", "admin", "s3cret", true);
    let client = client_with(
        &config,
        RecordingTransport::new(StatusCode::OK, "").with_kind(TransportKind::Tls {
            verify_certificates: false,
        }),
    );

    let server = client.server_config();
    assert_eq!(server.server, "https://ci.example.com/go/");
    assert_eq!(server.username, "admin");
    assert_eq!(server.password, "s3cret");
    assert!(server.skip_ssl_check);
    assert_eq!(client.base_url(), "https://ci.example.com/go/");
    assert!(!client.transport_kind().verifies_certificates());
    assert!(client.user_agent().ends_with("Terraform/1.5.7"));
}

#[test]
fn test_debug_output_masks_password() {
    let config = ResolvedConfig::new("http://gocd.local", "admin", "s3cret", false);
    let client = client_with(&config, RecordingTransport::new(StatusCode::OK, ""));
    let rendered = format!("{:?}", client);
    assert!(!rendered.contains("s3cret"));
    assert!(rendered.contains("admin"));
}

#[test]
fn test_from_resolved_picks_transport() {
    let host = HostTool::current();

    let plain = GocdClient::from_resolved(&ResolvedConfig::new("http://gocd.local", "", "", true), &host)
        .unwrap();
    assert_eq!(plain.transport_kind(), TransportKind::Plain);

    let tls = GocdClient::from_resolved(
        &ResolvedConfig::new("https://ci.example.com", "", "", false),
        &host,
    )
    .unwrap();
    assert!(tls.transport_kind().verifies_certificates());
}

#[test]
fn test_bootstrap_accepts_empty_base_url() {
    let config = ResolvedConfig::new("", "", "", false);
    let client = GocdClient::from_resolved(&config, &HostTool::current()).unwrap();
    assert_eq!(client.base_url(), "");
    assert!(client.url_for("api/version").is_err());
}

#[test]
fn test_url_for_joins_paths() {
    let config = ResolvedConfig::new("https://ci.example.com/go/", "", "", false);
    let client = client_with(&config, RecordingTransport::new(StatusCode::OK, ""));

    assert_eq!(
        client.url_for("api/version").unwrap().as_str(),
        "https://ci.example.com/go/api/version"
    );
    assert_eq!(
        client.url_for("/api/admin/environments").unwrap().as_str(),
        "https://ci.example.com/go/api/admin/environments"
    );
}

#[test]
fn test_request_sets_headers_and_basic_auth() {
    let config = ResolvedConfig::new("http://gocd.local/go", "admin", "secret", false);
    let client = client_with(&config, RecordingTransport::new(StatusCode::OK, ""));

    let request = client.request(Method::GET, "api/version", ACCEPT_V1).unwrap();
    let headers = request.headers();

    assert_eq!(headers.get(ACCEPT).unwrap(), ACCEPT_V1);
    assert_eq!(headers.get(USER_AGENT).unwrap(), client.user_agent());
    // admin:secret
    assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Basic YWRtaW46c2VjcmV0");
    assert!(headers.get(AUTHORIZATION).unwrap().is_sensitive());
}

#[test]
fn test_request_without_username_has_no_auth() {
    let config = ResolvedConfig::new("http://gocd.local/go", "", "orphan-password", false);
    let client = client_with(&config, RecordingTransport::new(StatusCode::OK, ""));

    let request = client.request(Method::GET, "api/version", ACCEPT_V1).unwrap();
    assert!(request.headers().get(AUTHORIZATION).is_none());
}

#[tokio::test]
async fn test_server_version_round_trip() {
    let transport = RecordingTransport::new(
        StatusCode::OK,
        r#"{"version":"19.1.0","build_number":"8469","git_sha":"abc123","full_version":"19.1.0 (8469-abc123)","commit_url":"https://github.com/gocd/gocd/commits/abc123"}"#,
    );
    let config = ResolvedConfig::new("http://gocd.local/go/", "admin", "secret", false);
    let client = client_with(&config, transport.clone());

    let version = client.server_version().await.unwrap();
    assert_eq!(version.version, "19.1.0");
    assert_eq!(version.build_number, "8469");

    let seen = transport.requests();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].method, Method::GET);
    assert_eq!(seen[0].url, "http://gocd.local/go/api/version");
}

#[tokio::test]
async fn test_send_json_body() {
    let transport = RecordingTransport::new(StatusCode::OK, "{}");
    let config = ResolvedConfig::new("http://gocd.local/go/", "", "", false);
    let client = client_with(&config, transport.clone());

    let body = serde_json::json!({ "name": "staging" });
    client
        .send(Method::POST, "api/admin/environments", ACCEPT_V1, Some(&body))
        .await
        .unwrap();

    let seen = transport.requests();
    assert_eq!(seen[0].headers.get(CONTENT_TYPE).unwrap(), "application/json");
    assert_eq!(seen[0].body.as_deref(), Some(r#"{"name":"staging"}"#));
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let transport = RecordingTransport::new(StatusCode::UNAUTHORIZED, "Unauthorized");
    let config = ResolvedConfig::new("http://gocd.local/go/", "admin", "wrong", false);
    let client = client_with(&config, transport);

    let err = client.server_version().await.unwrap_err();
    assert_eq!(err.status_code(), Some(401));
    assert_eq!(err.error_code(), "GOCD_HTTP");
}

#[tokio::test]
async fn test_undecodable_body_is_a_json_error() {
    let transport = RecordingTransport::new(StatusCode::OK, "<html>login</html>");
    let config = ResolvedConfig::new("http://gocd.local/go/", "", "", false);
    let client = client_with(&config, transport);

    let err = client.server_version().await.unwrap_err();
    assert_eq!(err.error_code(), "GOCD_JSON");
}

#[test]
fn test_client_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync + Clone>() {}
    assert_send_sync::<GocdClient>();
}
