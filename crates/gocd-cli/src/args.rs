//! CLI argument definitions using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use gocd_core::config::CliOverrides;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gocd-provider")]
#[command(about = "Resolve GoCD provider configuration and bootstrap API clients")]
#[command(version)]
pub struct Cli {
    /// Provider configuration file (JSON, or TOML by extension)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub fields: FieldArgs,

    /// Hosting tool stamped into the user agent, as name/version
    #[arg(long, global = true)]
    pub host_tool: Option<String>,

    /// Enable debug logging (including every API round trip)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Provider fields settable on the command line
#[derive(Args, Debug, Clone, Default)]
pub struct FieldArgs {
    /// URL for the GoCD server (falls back to GOCD_URL)
    #[arg(long, global = true)]
    pub baseurl: Option<String>,

    /// API user (falls back to GOCD_USERNAME)
    #[arg(long, global = true)]
    pub username: Option<String>,

    /// API password (falls back to GOCD_PASSWORD)
    #[arg(long, global = true)]
    pub password: Option<String>,

    /// Skip TLS certificate verification (falls back to GOCD_SKIP_SSL_CHECK)
    #[arg(long, global = true)]
    pub skip_ssl_check: Option<bool>,
}

impl FieldArgs {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            baseurl: self.baseurl.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            skip_ssl_check: self.skip_ssl_check,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the provider schema: fields, resources and data sources
    Schema {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Show the resolved configuration and where each value came from
    Resolve {
        /// Fail if the base URL is missing or malformed
        #[arg(long)]
        strict: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Bootstrap a client and query the server version
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}
