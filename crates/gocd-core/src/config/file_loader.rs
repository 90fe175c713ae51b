//! File-based provider input loading

use super::input::ProviderInput;
use crate::error::{GocdError, GocdResult};
use std::fs;
use std::path::Path;

/// Load a provider configuration block from a file.
///
/// TOML is used for `.toml` files, JSON for everything else. Unlike the
/// environment fallbacks, an explicitly named file must exist.
pub fn load_input_file(path: &Path) -> GocdResult<ProviderInput> {
    let content = fs::read_to_string(path).map_err(|e| {
        GocdError::io_with_path(
            format!("Failed to read config file: {}", e),
            path.display().to_string(),
        )
    })?;

    let value: serde_json::Value = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => {
            let table: toml::Table = toml::from_str(&content).map_err(|e| {
                GocdError::config_with_context(
                    format!("Failed to parse TOML config: {}", e),
                    format!("Deserializing TOML configuration from '{}'", path.display()),
                )
            })?;
            serde_json::to_value(table)?
        }
        _ => serde_json::from_str(&content).map_err(|e| {
            GocdError::config_with_context(
                format!("Failed to parse JSON config: {}", e),
                format!("Deserializing JSON configuration from '{}'", path.display()),
            )
        })?,
    };

    ProviderInput::from_value(&value)
}
