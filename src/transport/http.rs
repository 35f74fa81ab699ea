use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::Proxy;
use std::time::Duration;
use tokio_util::io::ReaderStream;
use tracing::debug;

use super::{Transport, TransportError, TransportResponse};
use crate::pipeline::{PreparedBody, PreparedRequest};
use crate::types::{FileSource, HttpMethod, InputFile, MultipartForm, PartValue};
use crate::{Error, ErrorContext, Result};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// reqwest-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration, proxy_url: Option<&str>) -> Result<Self> {
        let mut builder = reqwest::Client::builder().timeout(timeout);

        if let Some(proxy_url) = proxy_url {
            let proxy = Proxy::all(proxy_url).map_err(|e| {
                Error::configuration_with_context(
                    format!("Invalid proxy URL: {}", e),
                    ErrorContext::new()
                        .with_field_path("proxy_url")
                        .with_source("http_transport"),
                )
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(|e| {
            Error::configuration_with_context(
                format!("Failed to create HTTP client: {}", e),
                ErrorContext::new().with_source("http_transport"),
            )
        })?;

        Ok(Self { client })
    }

    /// Wrap an existing reqwest client.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn build_form(form: MultipartForm) -> Result<Form> {
        let mut out = Form::new();
        for part in form.into_parts() {
            out = match part.value {
                PartValue::Text(text) => out.text(part.name, text),
                PartValue::File(file) => {
                    let file_part = Self::file_part(&part.name, file).await?;
                    out.part(part.name, file_part)
                }
            };
        }
        Ok(out)
    }

    async fn file_part(field: &str, file: InputFile) -> Result<Part> {
        let (file_name, mime, source) = file.into_parts();
        let part = match source {
            FileSource::Bytes(bytes) => Part::bytes(bytes.to_vec()),
            FileSource::Path(path) => {
                let file = tokio::fs::File::open(&path).await?;
                let len = file.metadata().await?.len();
                Part::stream_with_length(reqwest::Body::wrap_stream(ReaderStream::new(file)), len)
            }
            FileSource::Stream(stream) => Part::stream(reqwest::Body::wrap_stream(stream)),
        }
        .file_name(file_name);

        match mime {
            Some(mime) => part.mime_str(&mime).map_err(|e| {
                Error::validation_with_context(
                    format!("Invalid mime: {}", e),
                    ErrorContext::new()
                        .with_field_path(field)
                        .with_source("http_transport"),
                )
            }),
            None => Ok(part),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, url: &str, request: PreparedRequest) -> Result<TransportResponse> {
        let PreparedRequest {
            method,
            headers,
            body,
        } = request;

        let mut req = match method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
        };

        let is_multipart = matches!(body, PreparedBody::Multipart(_));
        for (name, value) in &headers {
            // The form's boundary content type replaces any caller value.
            if is_multipart && name == "content-type" {
                continue;
            }
            req = req.header(name.as_str(), value.as_str());
        }

        req = match body {
            PreparedBody::Empty => req,
            PreparedBody::Text(text) => req.body(text),
            PreparedBody::Multipart(form) => req.multipart(Self::build_form(form).await?),
        };

        let response = req.send().await.map_err(TransportError::Http)?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await.map_err(TransportError::Http)?;
        debug!(status, bytes = body.len(), "Received Bot API response");

        Ok(TransportResponse {
            status,
            content_type,
            body,
        })
    }
}
