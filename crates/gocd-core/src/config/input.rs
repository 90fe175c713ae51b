//! Strongly typed provider input
//!
//! The host's schema layer turns its loosely typed configuration block into a
//! [`ProviderInput`] before the resolver ever sees it. Each field records
//! whether it was left unset, set to a value of the declared type, or set to
//! something that could not be coerced to that type.

use super::field::{BASEURL, PASSWORD, SKIP_SSL_CHECK, USERNAME};
use crate::error::{GocdError, GocdResult};
use serde_json::Value;

/// The state of one field in the configuration block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput<T> {
    /// Not present in the configuration block
    Unset,
    /// Present and coerced to the declared type
    Value(T),
    /// Present but not coercible to the declared type; holds the raw text
    Invalid(String),
}

impl<T> Default for FieldInput<T> {
    fn default() -> Self {
        FieldInput::Unset
    }
}

impl<T> FieldInput<T> {
    /// Whether the configuration block mentions this field at all
    pub fn is_set(&self) -> bool {
        !matches!(self, FieldInput::Unset)
    }

    /// The coerced value, if there is one
    pub fn value(&self) -> Option<&T> {
        match self {
            FieldInput::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Layer `self` over `lower`: a set field wins, an unset one defers
    pub fn or(self, lower: FieldInput<T>) -> FieldInput<T> {
        if self.is_set() { self } else { lower }
    }
}

impl FieldInput<String> {
    fn from_json(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => FieldInput::Unset,
            Some(Value::String(s)) => FieldInput::Value(s.clone()),
            Some(other) => FieldInput::Invalid(other.to_string()),
        }
    }
}

impl FieldInput<bool> {
    fn from_json(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => FieldInput::Unset,
            Some(Value::Bool(b)) => FieldInput::Value(*b),
            Some(Value::String(s)) => match parse_bool(s) {
                Some(b) => FieldInput::Value(b),
                None => FieldInput::Invalid(s.clone()),
            },
            Some(other) => FieldInput::Invalid(other.to_string()),
        }
    }
}

/// Parse a boolean the way the host's configuration language does.
///
/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Configuration block of a GoCD provider instance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderInput {
    pub baseurl: FieldInput<String>,
    pub username: FieldInput<String>,
    pub password: FieldInput<String>,
    pub skip_ssl_check: FieldInput<bool>,
}

impl ProviderInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build input from a loosely typed configuration block.
    ///
    /// `null` is treated as an empty block. Keys outside the provider schema
    /// are rejected, mirroring how the host validates configuration blocks.
    pub fn from_value(value: &Value) -> GocdResult<Self> {
        let object = match value {
            Value::Null => return Ok(Self::default()),
            Value::Object(map) => map,
            other => {
                return Err(GocdError::config_with_context(
                    format!("expected a configuration object, found {}", json_kind(other)),
                    "Reading provider configuration block",
                ));
            }
        };

        if let Some(unknown) = object
            .keys()
            .find(|k| ![BASEURL, USERNAME, PASSWORD, SKIP_SSL_CHECK].contains(&k.as_str()))
        {
            return Err(GocdError::config_with_context(
                format!("unsupported argument '{}'", unknown),
                "Reading provider configuration block",
            ));
        }

        Ok(Self {
            baseurl: FieldInput::<String>::from_json(object.get(BASEURL)),
            username: FieldInput::<String>::from_json(object.get(USERNAME)),
            password: FieldInput::<String>::from_json(object.get(PASSWORD)),
            skip_ssl_check: FieldInput::<bool>::from_json(object.get(SKIP_SSL_CHECK)),
        })
    }

    pub fn with_baseurl(mut self, baseurl: impl Into<String>) -> Self {
        self.baseurl = FieldInput::Value(baseurl.into());
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = FieldInput::Value(username.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = FieldInput::Value(password.into());
        self
    }

    pub fn with_skip_ssl_check(mut self, skip: bool) -> Self {
        self.skip_ssl_check = FieldInput::Value(skip);
        self
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
