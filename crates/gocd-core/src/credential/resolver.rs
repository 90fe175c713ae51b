//! Resolver turning provider input into a [`ResolvedConfig`]
//!
//! Precedence for string fields is explicit value, then environment, then
//! empty string. The boolean field follows the host's own rules: an explicit
//! value that could not be read as a boolean counts as `false` and does not
//! fall through to the environment.

use super::env::EnvSource;
use super::resolved::{ResolvedConfig, ResolvedField, mask_secret};
use super::source::ValueSource;
use crate::config::{
    BASEURL, FieldInput, GOCD_PASSWORD, GOCD_SKIP_SSL_CHECK, GOCD_URL, GOCD_USERNAME, PASSWORD,
    ProviderInput, SKIP_SSL_CHECK, USERNAME, parse_bool,
};
use tracing::debug;

const LOG_TARGET: &str = "gocd::config";

/// Resolves provider fields against an environment
pub struct ConfigResolver<'a> {
    env: &'a dyn EnvSource,
}

impl<'a> ConfigResolver<'a> {
    pub fn new(env: &'a dyn EnvSource) -> Self {
        Self { env }
    }

    /// Resolve all four provider fields
    pub fn resolve(&self, input: &ProviderInput) -> ResolvedConfig {
        let base_url = self.resolve_string(BASEURL, &input.baseurl, GOCD_URL);
        let username = self.resolve_string(USERNAME, &input.username, GOCD_USERNAME);
        let password = self.resolve_string(PASSWORD, &input.password, GOCD_PASSWORD);
        let skip_ssl_check =
            self.resolve_bool(SKIP_SSL_CHECK, &input.skip_ssl_check, GOCD_SKIP_SSL_CHECK);

        ResolvedConfig::from_fields(base_url, username, password, skip_ssl_check)
    }

    /// Resolve a string field.
    ///
    /// A non-empty explicit value wins. An empty, mistyped or missing value
    /// falls back to `env_var`, and to an empty string after that.
    pub fn resolve_string(
        &self,
        name: &'static str,
        input: &FieldInput<String>,
        env_var: &str,
    ) -> ResolvedField<String> {
        let field = match input {
            FieldInput::Value(value) if !value.is_empty() => {
                ResolvedField::new(name, value.clone(), ValueSource::Explicit)
            }
            _ => match self.env_value(env_var) {
                Some(value) => ResolvedField::new(name, value, ValueSource::env(env_var)),
                None => ResolvedField::new(name, String::new(), ValueSource::Default),
            },
        };

        let shown = if name == PASSWORD {
            mask_secret(&field.value)
        } else {
            field.value.clone()
        };
        debug!(target: LOG_TARGET, source = %field.source, "Using GoCD config '{}': {}", name, shown);

        field
    }

    /// Resolve a boolean field.
    ///
    /// An explicit boolean wins. A value that failed boolean coercion yields
    /// `false` without consulting the environment. When the field is unset,
    /// `env_var` is parsed with the host's boolean grammar; anything
    /// unparseable is `false`.
    pub fn resolve_bool(
        &self,
        name: &'static str,
        input: &FieldInput<bool>,
        env_var: &str,
    ) -> ResolvedField<bool> {
        let field = match input {
            FieldInput::Value(value) => ResolvedField::new(name, *value, ValueSource::Explicit),
            FieldInput::Invalid(raw) => {
                debug!(target: LOG_TARGET, "GoCD config '{}' is not a boolean: {}", name, raw);
                ResolvedField::new(name, false, ValueSource::Default)
            }
            FieldInput::Unset => match self.env_value(env_var).as_deref().and_then(parse_bool) {
                Some(value) => ResolvedField::new(name, value, ValueSource::env(env_var)),
                None => ResolvedField::new(name, false, ValueSource::Default),
            },
        };

        debug!(target: LOG_TARGET, source = %field.source, "Using GoCD config '{}': {}", name, field.value);

        field
    }

    /// An environment variable set to the empty string counts as unset
    fn env_value(&self, env_var: &str) -> Option<String> {
        self.env.var(env_var).filter(|value| !value.is_empty())
    }
}
