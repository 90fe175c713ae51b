//! Request helpers used by resources and data sources

use super::types::GocdClient;
use crate::config::BASEURL;
use crate::error::{GocdError, GocdResult};
use crate::transport::HttpResponse;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderValue, USER_AGENT};
use reqwest::{Method, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Accept header for version 1 of the GoCD API
pub const ACCEPT_V1: &str = "application/vnd.go.cd.v1+json";

/// Response of `GET api/version`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerVersion {
    pub version: String,
    #[serde(default)]
    pub build_number: String,
    #[serde(default)]
    pub git_sha: String,
    #[serde(default)]
    pub full_version: String,
    #[serde(default)]
    pub commit_url: String,
}

impl GocdClient {
    /// Absolute URL for an API path relative to the base URL
    pub fn url_for(&self, path: &str) -> GocdResult<Url> {
        let joined = format!(
            "{}/{}",
            self.base_url().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined).map_err(|e| {
            GocdError::invalid_field(format!("invalid GoCD server URL '{}': {}", joined, e), BASEURL)
        })
    }

    /// Build a request carrying the user agent, `Accept` and, when a username
    /// is configured, basic auth
    pub fn request(&self, method: Method, path: &str, accept: &str) -> GocdResult<reqwest::Request> {
        let mut request = reqwest::Request::new(method, self.url_for(path)?);
        let headers = request.headers_mut();

        headers.insert(USER_AGENT, header_value(self.user_agent(), "User-Agent")?);
        headers.insert(ACCEPT, header_value(accept, "Accept")?);

        let config = self.server_config();
        if !config.username.is_empty() {
            let credentials = STANDARD.encode(format!("{}:{}", config.username, config.password));
            let mut value = header_value(&format!("Basic {}", credentials), "Authorization")?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Ok(request)
    }

    /// Send a request, treating any non-2xx status as an error
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        accept: &str,
        body: Option<&serde_json::Value>,
    ) -> GocdResult<HttpResponse> {
        let mut request = self.request(method.clone(), path, accept)?;
        if let Some(body) = body {
            request
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            *request.body_mut() = Some(serde_json::to_vec(body)?.into());
        }

        let response = self.inner.transport.round_trip(request).await?;
        if !response.is_success() {
            return Err(GocdError::http(
                format!("{} {} returned {}: {}", method, response.url, response.status, response.text()),
                response.url.clone(),
                response.status.as_u16(),
            ));
        }

        Ok(response)
    }

    /// GET `path` and decode the JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, accept: &str) -> GocdResult<T> {
        self.send(Method::GET, path, accept, None).await?.json()
    }

    /// Ask the server for its version
    pub async fn server_version(&self) -> GocdResult<ServerVersion> {
        self.get_json("api/version", ACCEPT_V1).await
    }
}

fn header_value(value: &str, name: &str) -> GocdResult<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| GocdError::invalid_input(format!("invalid {} header value: {}", name, e)))
}
