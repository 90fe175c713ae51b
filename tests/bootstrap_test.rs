//! End-to-end configuration tests
//!
//! Drives the provider the way a host does: build the descriptor, hand it a
//! configuration block and an environment, and inspect the client it returns.

use gocd_provider::config::{GOCD_PASSWORD, GOCD_SKIP_SSL_CHECK, GOCD_URL, GOCD_USERNAME};
use gocd_provider::transport::TransportKind;
use gocd_provider::{ConfigResolver, HostTool, MapEnv, ProviderInput};
use serde_json::json;
use serial_test::serial;

fn host() -> HostTool {
    HostTool::new("Terraform", "1.5.7")
}

#[test]
fn test_https_skip_scenario_with_empty_environment() {
    let input = ProviderInput::from_value(&json!({
        "baseurl": "https://ci.example.com",
        "skip_ssl_check": true
    }))
    .unwrap();
    let env = MapEnv::new();

    let resolved = ConfigResolver::new(&env).resolve(&input);
    assert_eq!(resolved.username(), "");
    assert_eq!(resolved.password(), "");
    assert!(resolved.skip_ssl_check());

    let client = gocd_provider::provider()
        .unwrap()
        .configure(&input, &env, &host())
        .unwrap();
    assert_eq!(
        client.transport_kind(),
        TransportKind::Tls {
            verify_certificates: false
        }
    );
}

#[test]
fn test_explicit_values_ignore_environment() {
    let env = MapEnv::new()
        .with_var(GOCD_URL, "http://env.local")
        .with_var(GOCD_USERNAME, "env-user")
        .with_var(GOCD_PASSWORD, "env-pass")
        .with_var(GOCD_SKIP_SSL_CHECK, "true");
    let input = ProviderInput::from_value(&json!({
        "baseurl": "https://ci.example.com/go/",
        "username": "admin",
        "password": "s3cret",
        "skip_ssl_check": false
    }))
    .unwrap();

    let client = gocd_provider::provider()
        .unwrap()
        .configure(&input, &env, &host())
        .unwrap();

    let server = client.server_config();
    assert_eq!(server.server, "https://ci.example.com/go/");
    assert_eq!(server.username, "admin");
    assert_eq!(server.password, "s3cret");
    assert!(!server.skip_ssl_check);
    assert!(client.transport_kind().verifies_certificates());
}

#[test]
fn test_environment_supplies_missing_block() {
    let env = MapEnv::new()
        .with_var(GOCD_URL, "http://gocd.local:8153/go/")
        .with_var(GOCD_USERNAME, "env-user")
        .with_var(GOCD_PASSWORD, "env-pass")
        .with_var(GOCD_SKIP_SSL_CHECK, "true");

    let client = gocd_provider::provider()
        .unwrap()
        .configure(&ProviderInput::new(), &env, &host())
        .unwrap();

    let server = client.server_config();
    assert_eq!(server.server, "http://gocd.local:8153/go/");
    assert_eq!(server.username, "env-user");
    assert_eq!(server.password, "env-pass");
    assert!(server.skip_ssl_check);
    // Plain http ignores the skip flag.
    assert_eq!(client.transport_kind(), TransportKind::Plain);
}

#[test]
fn test_non_boolean_skip_value_is_false_despite_environment() {
    let env = MapEnv::new().with_var(GOCD_SKIP_SSL_CHECK, "true");
    let input = ProviderInput::from_value(&json!({
        "baseurl": "https://ci.example.com",
        "skip_ssl_check": "sometimes"
    }))
    .unwrap();

    let client = gocd_provider::provider()
        .unwrap()
        .configure(&input, &env, &host())
        .unwrap();

    assert!(!client.server_config().skip_ssl_check);
    assert!(client.transport_kind().verifies_certificates());
}

#[test]
fn test_user_agent_names_platform_and_host() {
    let client = gocd_provider::provider()
        .unwrap()
        .configure(&ProviderInput::new(), &MapEnv::new(), &host())
        .unwrap();

    let agent = client.user_agent();
    assert!(agent.contains(std::env::consts::OS));
    assert!(agent.contains(std::env::consts::ARCH));
    assert!(agent.ends_with("Terraform/1.5.7"));
}

#[test]
#[serial]
fn test_configure_reads_process_environment() {
    // Use unsafe block for Rust 2024
    unsafe {
        std::env::set_var(GOCD_URL, "https://process.example.com/go/");
        std::env::set_var(GOCD_SKIP_SSL_CHECK, "1");
    }

    let client = gocd_provider::configure(&ProviderInput::new(), &host()).unwrap();
    assert_eq!(client.base_url(), "https://process.example.com/go/");
    assert!(!client.transport_kind().verifies_certificates());

    // Clean up
    unsafe {
        std::env::remove_var(GOCD_URL);
        std::env::remove_var(GOCD_SKIP_SSL_CHECK);
    }
}
