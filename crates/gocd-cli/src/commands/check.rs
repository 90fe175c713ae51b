//! Check command implementation

use anyhow::Context;
use colored::*;
use gocd_core::client::HostTool;
use gocd_core::config::{FIELD_DESCRIPTIONS, ProviderInput};
use gocd_core::credential::ProcessEnv;
use gocd_core::provider::ProviderDescriptor;
use gocd_core::transport::TransportKind;

/// Configure a client exactly as a host would, then make one API call
pub async fn run(input: &ProviderInput, host: &HostTool) -> anyhow::Result<()> {
    let descriptor = ProviderDescriptor::new(FIELD_DESCRIPTIONS)?;
    let client = descriptor.configure(input, &ProcessEnv, host)?;

    let transport = match client.transport_kind() {
        TransportKind::Plain => "plain http".normal(),
        TransportKind::Tls {
            verify_certificates: true,
        } => "tls".green(),
        TransportKind::Tls {
            verify_certificates: false,
        } => "tls (certificate verification disabled)".red(),
    };

    println!();
    println!("{}", "GoCD Server Check".bold().underline());
    println!("  Server: {}", client.base_url().cyan());
    println!("  Transport: {}", transport);
    println!("  User Agent: {}", client.user_agent());

    let version = client
        .server_version()
        .await
        .with_context(|| format!("querying GoCD server at '{}'", client.base_url()))?;

    let shown = if version.full_version.is_empty() {
        version.version
    } else {
        version.full_version
    };
    println!("  Version: {}", shown.green());
    println!();
    Ok(())
}
