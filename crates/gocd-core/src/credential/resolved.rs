//! Resolved provider configuration

use super::source::ValueSource;
use crate::config::{BASEURL, PASSWORD, SKIP_SSL_CHECK, USERNAME};
use crate::error::{GocdError, GocdResult};
use reqwest::Url;
use serde::Serialize;

/// One resolved field with its origin
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedField<T> {
    pub name: &'static str,
    pub value: T,
    pub source: ValueSource,
}

impl<T> ResolvedField<T> {
    pub fn new(name: &'static str, value: T, source: ValueSource) -> Self {
        Self {
            name,
            value,
            source,
        }
    }
}

/// Final connection settings for one provider instance.
///
/// Every field holds a concrete value once resolution finishes; nothing is
/// left pending. The struct is immutable: values are read through accessors
/// and copied into the client handle at bootstrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    base_url: ResolvedField<String>,
    username: ResolvedField<String>,
    password: ResolvedField<String>,
    skip_ssl_check: ResolvedField<bool>,
}

impl ResolvedConfig {
    /// Assemble a config from already-resolved fields
    pub fn from_fields(
        base_url: ResolvedField<String>,
        username: ResolvedField<String>,
        password: ResolvedField<String>,
        skip_ssl_check: ResolvedField<bool>,
    ) -> Self {
        Self {
            base_url,
            username,
            password,
            skip_ssl_check,
        }
    }

    /// Build a config from explicit values, bypassing resolution
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        skip_ssl_check: bool,
    ) -> Self {
        Self::from_fields(
            ResolvedField::new(BASEURL, base_url.into(), ValueSource::Explicit),
            ResolvedField::new(USERNAME, username.into(), ValueSource::Explicit),
            ResolvedField::new(PASSWORD, password.into(), ValueSource::Explicit),
            ResolvedField::new(SKIP_SSL_CHECK, skip_ssl_check, ValueSource::Explicit),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url.value
    }

    pub fn username(&self) -> &str {
        &self.username.value
    }

    pub fn password(&self) -> &str {
        &self.password.value
    }

    pub fn skip_ssl_check(&self) -> bool {
        self.skip_ssl_check.value
    }

    pub fn base_url_field(&self) -> &ResolvedField<String> {
        &self.base_url
    }

    pub fn username_field(&self) -> &ResolvedField<String> {
        &self.username
    }

    pub fn password_field(&self) -> &ResolvedField<String> {
        &self.password
    }

    pub fn skip_ssl_check_field(&self) -> &ResolvedField<bool> {
        &self.skip_ssl_check
    }

    /// Password replaced by a fixed-width mask, for logs and display
    pub fn masked_password(&self) -> String {
        mask_secret(&self.password.value)
    }

    /// Eagerly check that the base URL is usable.
    ///
    /// Bootstrap never calls this: an empty or malformed URL is normally left
    /// for the first API call to report. Callers that prefer to fail fast can
    /// opt in.
    pub fn validate(&self) -> GocdResult<()> {
        let raw = self.base_url();
        if raw.is_empty() {
            return Err(GocdError::invalid_field(
                format!("{} is not set (configure it or export {})", BASEURL, crate::config::GOCD_URL),
                BASEURL,
            ));
        }

        let url = Url::parse(raw).map_err(|e| {
            GocdError::invalid_field(format!("{} '{}' is not a valid URL: {}", BASEURL, raw, e), BASEURL)
        })?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(GocdError::invalid_field(
                format!("{} uses unsupported scheme '{}'", BASEURL, scheme),
                BASEURL,
            )),
        }
    }
}

/// Mask a secret for display; empty secrets stay visibly empty
pub fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        "(empty)".to_string()
    } else {
        "*".repeat(secret.chars().count().min(8))
    }
}
