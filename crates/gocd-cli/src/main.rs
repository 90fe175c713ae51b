//! GoCD provider CLI
//!
//! Operator tooling around the provider core:
//!
//! - `gocd-provider schema` prints the provider declaration as JSON
//! - `gocd-provider resolve` shows which value each field resolves to and why
//! - `gocd-provider check` bootstraps a client and asks the server for its version
//!
//! Field values come from `--config <file>`, the `--baseurl`/`--username`/
//! `--password`/`--skip-ssl-check` flags, and the `GOCD_*` environment
//! variables, in that order of increasing fallback.

mod args;
mod commands;
mod router;

use args::{Cli, LogFormat};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_format);
    router::route(cli).await
}

/// Logging goes to stderr so command output on stdout stays machine readable.
/// `RUST_LOG` overrides the level chosen by `--verbose`.
fn init_logging(verbose: bool, format: LogFormat) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
