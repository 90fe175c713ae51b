//! Static provider field declarations

use serde::Serialize;

/// Field name for the GoCD server URL
pub const BASEURL: &str = "baseurl";
/// Field name for the API user
pub const USERNAME: &str = "username";
/// Field name for the API password
pub const PASSWORD: &str = "password";
/// Field name for the certificate verification bypass
pub const SKIP_SSL_CHECK: &str = "skip_ssl_check";

pub const GOCD_URL: &str = "GOCD_URL";
pub const GOCD_USERNAME: &str = "GOCD_USERNAME";
pub const GOCD_PASSWORD: &str = "GOCD_PASSWORD";
pub const GOCD_SKIP_SSL_CHECK: &str = "GOCD_SKIP_SSL_CHECK";

/// Human-readable descriptions for every provider field.
///
/// Passed explicitly into [`crate::provider::ProviderDescriptor::new`]; hosts
/// that want different wording can supply their own table.
pub const FIELD_DESCRIPTIONS: &[(&str, &str)] = &[
    (BASEURL, "URL for the GoCD Server"),
    (USERNAME, "User to interact with the GoCD API with."),
    (PASSWORD, "Password for User for GoCD API interaction."),
    (
        SKIP_SSL_CHECK,
        "Skip TLS certificate verification when talking to the GoCD Server.",
    ),
];

/// Look up a field description, returning an empty string when absent
pub fn describe<'a>(descriptions: &'a [(&'a str, &'a str)], name: &str) -> &'a str {
    descriptions
        .iter()
        .find(|(field, _)| *field == name)
        .map(|(_, text)| *text)
        .unwrap_or_default()
}

/// Value type of a provider field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    String,
    Bool,
}

/// Static descriptor of one provider configuration field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
    /// Environment variable consulted when the field is not set explicitly
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_var: Option<&'static str>,
    pub description: String,
}

impl FieldSpec {
    fn new(
        name: &'static str,
        field_type: FieldType,
        required: bool,
        env_var: &'static str,
        descriptions: &[(&str, &str)],
    ) -> Self {
        Self {
            name,
            field_type,
            required,
            env_var: Some(env_var),
            description: describe(descriptions, name).to_string(),
        }
    }
}

/// The four fields of the GoCD provider block, in declaration order
pub fn provider_fields(descriptions: &[(&str, &str)]) -> Vec<FieldSpec> {
    vec![
        FieldSpec::new(BASEURL, FieldType::String, true, GOCD_URL, descriptions),
        FieldSpec::new(USERNAME, FieldType::String, false, GOCD_USERNAME, descriptions),
        FieldSpec::new(PASSWORD, FieldType::String, false, GOCD_PASSWORD, descriptions),
        FieldSpec::new(
            SKIP_SSL_CHECK,
            FieldType::Bool,
            false,
            GOCD_SKIP_SSL_CHECK,
            descriptions,
        ),
    ]
}
