//! Resolve command implementation

use colored::*;
use gocd_core::config::ProviderInput;
use gocd_core::credential::{ConfigResolver, ProcessEnv, ResolvedConfig, ValueSource};
use serde_json::json;

/// Resolve the configuration against the process environment and print it.
/// The password is always masked.
pub fn show(input: &ProviderInput, strict: bool, as_json: bool) -> anyhow::Result<()> {
    let resolved = ConfigResolver::new(&ProcessEnv).resolve(input);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&to_json(&resolved))?);
    } else {
        print_table(&resolved);
    }

    if strict {
        resolved.validate()?;
    }
    Ok(())
}

fn rows(resolved: &ResolvedConfig) -> Vec<(&'static str, String, &ValueSource)> {
    vec![
        (
            resolved.base_url_field().name,
            resolved.base_url().to_string(),
            &resolved.base_url_field().source,
        ),
        (
            resolved.username_field().name,
            resolved.username().to_string(),
            &resolved.username_field().source,
        ),
        (
            resolved.password_field().name,
            resolved.masked_password(),
            &resolved.password_field().source,
        ),
        (
            resolved.skip_ssl_check_field().name,
            resolved.skip_ssl_check().to_string(),
            &resolved.skip_ssl_check_field().source,
        ),
    ]
}

fn to_json(resolved: &ResolvedConfig) -> serde_json::Value {
    let fields: serde_json::Map<String, serde_json::Value> = rows(resolved)
        .into_iter()
        .map(|(name, value, source)| {
            (
                name.to_string(),
                json!({ "value": value, "source": source }),
            )
        })
        .collect();
    serde_json::Value::Object(fields)
}

fn print_table(resolved: &ResolvedConfig) {
    println!();
    println!("{}", "GoCD Provider Configuration".bold().underline());
    println!("{}", "=".repeat(50).dimmed());
    for (name, value, source) in rows(resolved) {
        let source_text = if source.is_user_configured() {
            source.to_string().green()
        } else {
            source.to_string().yellow()
        };
        println!("  {:<16} {:<32} {}", name.cyan(), value, source_text);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_output_masks_password() {
        let resolved = ResolvedConfig::new("https://ci.example.com", "admin", "s3cret", false);
        let json = to_json(&resolved);

        assert_eq!(json["baseurl"]["value"], "https://ci.example.com");
        assert_eq!(json["username"]["source"]["type"], "explicit");
        assert_eq!(json["password"]["value"], "******");
        assert_eq!(json["skip_ssl_check"]["value"], "false");
        assert!(!json.to_string().contains("s3cret"));
    }
}
