//! Command routing logic for CLI

use crate::args::{Cli, Commands};
use crate::commands;
use anyhow::Context;
use gocd_core::client::HostTool;
use gocd_core::config::{ProviderInput, load_input_file};
use tracing::debug;

/// Route CLI commands to their respective handlers
pub async fn route(cli: Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Schema { pretty } => commands::schema::show(*pretty),
        Commands::Resolve { strict, json } => {
            let input = load_input(&cli)?;
            commands::resolve::show(&input, *strict, *json)
        }
        Commands::Check => {
            let input = load_input(&cli)?;
            let host = cli
                .host_tool
                .as_deref()
                .map(HostTool::parse)
                .unwrap_or_default();
            commands::check::run(&input, &host).await
        }
    }
}

/// File input with command-line overrides layered on top
fn load_input(cli: &Cli) -> anyhow::Result<ProviderInput> {
    let file_input = match &cli.config {
        Some(path) => {
            debug!("Loading provider configuration from {}", path.display());
            load_input_file(path).with_context(|| {
                format!("loading provider configuration from {}", path.display())
            })?
        }
        None => ProviderInput::new(),
    };
    Ok(cli.fields.overrides().apply(file_input))
}
