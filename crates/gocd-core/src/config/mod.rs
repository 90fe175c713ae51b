//! Provider configuration input
//!
//! This module holds the static field table the provider declares, the
//! strongly typed input the host hands to the resolver, and helpers for
//! loading that input from files and command-line overrides.

mod field;
mod file_loader;
mod input;
mod overrides;

pub use field::{
    BASEURL, FIELD_DESCRIPTIONS, FieldSpec, FieldType, GOCD_PASSWORD, GOCD_SKIP_SSL_CHECK,
    GOCD_URL, GOCD_USERNAME, PASSWORD, SKIP_SSL_CHECK, USERNAME, describe, provider_fields,
};
pub use file_loader::load_input_file;
pub use input::{FieldInput, ProviderInput, parse_bool};
pub use overrides::CliOverrides;
