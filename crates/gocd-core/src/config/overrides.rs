//! Command-line overrides for provider fields

use super::input::{FieldInput, ProviderInput};

/// Field values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub baseurl: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub skip_ssl_check: Option<bool>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_baseurl(mut self, baseurl: impl Into<String>) -> Self {
        self.baseurl = Some(baseurl.into());
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn with_skip_ssl_check(mut self, skip: bool) -> Self {
        self.skip_ssl_check = Some(skip);
        self
    }

    /// Check if any overrides are set
    pub fn has_overrides(&self) -> bool {
        self.baseurl.is_some()
            || self.username.is_some()
            || self.password.is_some()
            || self.skip_ssl_check.is_some()
    }

    /// Layer these overrides over `input`; overridden fields win
    pub fn apply(&self, input: ProviderInput) -> ProviderInput {
        ProviderInput {
            baseurl: to_input(&self.baseurl).or(input.baseurl),
            username: to_input(&self.username).or(input.username),
            password: to_input(&self.password).or(input.password),
            skip_ssl_check: to_input(&self.skip_ssl_check).or(input.skip_ssl_check),
        }
    }
}

fn to_input<T: Clone>(value: &Option<T>) -> FieldInput<T> {
    match value {
        Some(v) => FieldInput::Value(v.clone()),
        None => FieldInput::Unset,
    }
}
