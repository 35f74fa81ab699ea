use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::client::config::ClientConfig;
use crate::client::core::BotApi;
use crate::transport::{HttpTransport, Transport, DEFAULT_TIMEOUT};
use crate::{Error, ErrorContext, Result};

const KEYRING_SERVICE: &str = "telegram-bot-api";
const KEYRING_USER: &str = "token";

/// Builder for [`BotApi`].
///
/// Explicit setters always win over values picked up by [`from_env`](Self::from_env).
#[derive(Default)]
pub struct BotApiBuilder {
    token: Option<String>,
    endpoint: Option<String>,
    timeout: Option<Duration>,
    proxy_url: Option<String>,
    transport: Option<Arc<dyn Transport>>,
}

impl BotApiBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the environment:
    /// - `TELEGRAM_BOT_TOKEN` (falls back to the OS keyring entry `telegram-bot-api`/`token`)
    /// - `TELEGRAM_API_ENDPOINT`
    /// - `TELEGRAM_HTTP_TIMEOUT_SECS` (default 30)
    /// - `TELEGRAM_PROXY_URL`
    pub fn from_env() -> Self {
        let token = std::env::var("TELEGRAM_BOT_TOKEN")
            .ok()
            .filter(|t| !t.is_empty())
            .or_else(Self::token_from_keyring);
        let timeout = std::env::var("TELEGRAM_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs);

        Self {
            token,
            endpoint: std::env::var("TELEGRAM_API_ENDPOINT").ok(),
            timeout,
            proxy_url: std::env::var("TELEGRAM_PROXY_URL").ok(),
            transport: None,
        }
    }

    fn token_from_keyring() -> Option<String> {
        let entry = keyring::Entry::new(KEYRING_SERVICE, KEYRING_USER).ok()?;
        match entry.get_password() {
            Ok(token) => Some(token),
            Err(e) => {
                debug!(error = %e, "No bot token in keyring");
                None
            }
        }
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Override the API base URL (a local Bot API server, or a mock in tests).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Whole-request timeout of the default HTTP transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn proxy(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy_url = Some(proxy_url.into());
        self
    }

    /// Use a custom transport instead of reqwest. Timeout and proxy are ignored.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client. Fails eagerly when no token was given.
    pub fn build(self) -> Result<BotApi> {
        let token = self.token.ok_or_else(|| {
            Error::configuration_with_context(
                "\"token\" must be specified",
                ErrorContext::new()
                    .with_field_path("token")
                    .with_source("client_builder"),
            )
        })?;
        let config = ClientConfig::new(token, self.endpoint.as_deref())?;

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new(
                self.timeout.unwrap_or(DEFAULT_TIMEOUT),
                self.proxy_url.as_deref(),
            )?),
        };

        Ok(BotApi::from_parts(config, transport))
    }
}
