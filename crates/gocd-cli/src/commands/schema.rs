//! Schema command implementation

use gocd_core::config::FIELD_DESCRIPTIONS;
use gocd_core::provider::ProviderDescriptor;

/// Print the provider declaration as JSON
pub fn show(pretty: bool) -> anyhow::Result<()> {
    let descriptor = ProviderDescriptor::new(FIELD_DESCRIPTIONS)?;
    let json = descriptor.to_json()?;

    if pretty {
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        println!("{}", json);
    }
    Ok(())
}
