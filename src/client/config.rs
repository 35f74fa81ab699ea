use std::fmt;
use url::Url;

use crate::{Error, ErrorContext, Result};

pub const DEFAULT_ENDPOINT: &str = "https://api.telegram.org";

/// Endpoint and token. Immutable once built.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    endpoint: String,
    token: String,
}

impl ClientConfig {
    /// Fails when the token is empty or the endpoint is not an absolute URL.
    pub fn new(token: impl Into<String>, endpoint: Option<&str>) -> Result<Self> {
        let token = token.into();
        if token.is_empty() {
            return Err(Error::configuration_with_context(
                "\"token\" must be specified",
                ErrorContext::new()
                    .with_field_path("token")
                    .with_source("client_config"),
            ));
        }

        let endpoint = endpoint.unwrap_or(DEFAULT_ENDPOINT).trim_end_matches('/');
        Url::parse(endpoint).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid endpoint URL: {}", e),
                ErrorContext::new()
                    .with_field_path("endpoint")
                    .with_details(endpoint.to_string())
                    .with_source("client_config"),
            )
        })?;

        Ok(Self {
            endpoint: endpoint.to_string(),
            token,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// `{endpoint}/bot{token}/{method}`
    pub fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.endpoint, self.token, method)
    }

    /// `{endpoint}/file/bot{token}/{file_path}`
    pub fn file_url(&self, file_path: &str) -> String {
        format!("{}/file/bot{}/{}", self.endpoint, self.token, file_path)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .field("token", &"<redacted>")
            .finish()
    }
}
