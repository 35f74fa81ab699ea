//! Transport seam between the request pipeline and the network.
//!
//! The pipeline only needs "send this prepared request to this URL and give
//! me the content type and body back". [`HttpTransport`] does that with
//! reqwest; tests plug in their own implementations.

mod http;

pub use http::{HttpTransport, DEFAULT_TIMEOUT};

use async_trait::async_trait;
use bytes::Bytes;

use crate::pipeline::PreparedRequest;
use crate::Result;

/// Raw response handed back to the pipeline.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    /// Value of the `content-type` header, if any.
    pub content_type: Option<String>,
    pub body: Bytes,
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request. Implementations must not retry.
    async fn send(&self, url: &str, request: PreparedRequest) -> Result<TransportResponse>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
