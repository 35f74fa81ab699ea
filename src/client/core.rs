use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use crate::client::builder::BotApiBuilder;
use crate::client::config::ClientConfig;
use crate::client::endpoints::{self, Endpoint, PostProcess};
use crate::pipeline::{decode_response, prepare};
use crate::transport::Transport;
use crate::types::{ApiEnvelope, CallOptions, Parameters};
use crate::Result;

/// Telegram Bot API client.
///
/// Cheap to clone; clones share the configuration and transport. Calls are
/// independent and may run concurrently.
#[derive(Clone)]
pub struct BotApi {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
}

impl BotApi {
    /// Client for the public endpoint using the default HTTP transport.
    /// Fails when `token` is empty.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        BotApiBuilder::new().token(token).build()
    }

    pub fn builder() -> BotApiBuilder {
        BotApiBuilder::new()
    }

    pub(crate) fn from_parts(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Run one call through the pipeline: prepare the body, send it to
    /// `{endpoint}/bot{token}/{method}`, then validate the response.
    ///
    /// No parameter validation happens here.
    pub async fn request(&self, method: &str, options: CallOptions) -> Result<ApiEnvelope> {
        let started = Instant::now();
        let prepared = prepare(options)?;
        debug!(
            method,
            http_method = %prepared.method,
            body = prepared.body.kind(),
            "Sending Bot API request"
        );

        let response = self
            .transport
            .send(&self.config.method_url(method), prepared)
            .await?;
        let envelope = decode_response(response)?;

        info!(
            method,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Bot API call completed"
        );
        Ok(envelope)
    }

    /// Call a method by name.
    ///
    /// Known methods get their validation and encoding rules from the
    /// endpoint table; unknown ones are sent as a plain field body.
    pub async fn call(
        &self,
        method: &str,
        parameters: Option<Parameters>,
        options: Option<CallOptions>,
    ) -> Result<ApiEnvelope> {
        match endpoints::lookup(method) {
            Some(endpoint) => self.call_endpoint(endpoint, parameters, options).await,
            None => {
                debug!(method, "Method not in endpoint table, passing through");
                let mut options = options.unwrap_or_default();
                if let Some(parameters) = parameters {
                    options = options.fields(parameters);
                }
                self.request(method, options).await
            }
        }
    }

    pub(crate) async fn call_endpoint(
        &self,
        endpoint: &Endpoint,
        parameters: Option<Parameters>,
        options: Option<CallOptions>,
    ) -> Result<ApiEnvelope> {
        let options = endpoint.build_options(parameters, options)?;
        let envelope = self.request(endpoint.name, options).await?;
        Ok(match endpoint.post_process {
            PostProcess::None => envelope,
            PostProcess::FileUrl => self.attach_file_url(envelope),
        })
    }

    fn attach_file_url(&self, mut envelope: ApiEnvelope) -> ApiEnvelope {
        if let Some(Value::Object(result)) = envelope.result.as_mut() {
            let file_path = result
                .get("file_path")
                .and_then(Value::as_str)
                .map(str::to_owned);
            if let Some(file_path) = file_path {
                let url = self.config.file_url(&file_path);
                result.insert("file_url".to_string(), Value::String(url));
            }
        }
        envelope
    }
}

impl fmt::Debug for BotApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotApi")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
