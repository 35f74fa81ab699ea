//! Shared fixtures: an in-process counting transport and a mockito server.

#![allow(dead_code)]

use async_trait::async_trait;
use mockito::{Mock, Server, ServerGuard};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use telegram_bot_api::pipeline::{PreparedBody, PreparedRequest};
use telegram_bot_api::transport::{Transport, TransportResponse};
use telegram_bot_api::types::PartValue;
use telegram_bot_api::{BotApi, HttpMethod};

pub const TOKEN: &str = "123456:ABC-DEF1234ghIkl-zyx57W2v1u123ew11";

/// What the stub saw of one request.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub url: String,
    pub method: HttpMethod,
    pub headers: BTreeMap<String, String>,
    pub json: Option<Value>,
    pub text: Option<String>,
    /// Text parts of a multipart body.
    pub form_text: BTreeMap<String, String>,
    /// Names of file parts of a multipart body.
    pub form_files: Vec<String>,
    pub multipart: bool,
}

/// Transport that answers every request with the same canned response and
/// records what it was asked to send.
pub struct StubTransport {
    response: TransportResponse,
    calls: AtomicUsize,
    recorded: Mutex<Vec<Recorded>>,
}

impl StubTransport {
    pub fn new(content_type: &str, body: &str) -> Arc<Self> {
        Arc::new(Self {
            response: TransportResponse {
                status: 200,
                content_type: Some(content_type.to_string()),
                body: body.to_string().into(),
            },
            calls: AtomicUsize::new(0),
            recorded: Mutex::new(Vec::new()),
        })
    }

    pub fn json(body: Value) -> Arc<Self> {
        Self::new("application/json", &body.to_string())
    }

    pub fn ok(result: Value) -> Arc<Self> {
        Self::json(serde_json::json!({"ok": true, "result": result}))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last(&self) -> Recorded {
        self.recorded
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request recorded")
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn send(
        &self,
        url: &str,
        request: PreparedRequest,
    ) -> telegram_bot_api::Result<TransportResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let mut recorded = Recorded {
            url: url.to_string(),
            method: request.method,
            headers: request.headers,
            json: None,
            text: None,
            form_text: BTreeMap::new(),
            form_files: Vec::new(),
            multipart: false,
        };
        match request.body {
            PreparedBody::Empty => {}
            PreparedBody::Text(text) => {
                recorded.json = serde_json::from_str(&text).ok();
                recorded.text = Some(text);
            }
            PreparedBody::Multipart(form) => {
                recorded.multipart = true;
                for part in form.into_parts() {
                    match part.value {
                        PartValue::Text(text) => {
                            recorded.form_text.insert(part.name, text);
                        }
                        PartValue::File(_) => recorded.form_files.push(part.name),
                    }
                }
            }
        }
        self.recorded.lock().unwrap().push(recorded);

        Ok(self.response.clone())
    }
}

pub fn api_with(transport: Arc<StubTransport>) -> BotApi {
    BotApi::builder()
        .token(TOKEN)
        .transport(transport)
        .build()
        .expect("client builds")
}

/// Mockito server plus a client pointed at it.
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    pub fn client(&self) -> BotApi {
        BotApi::builder()
            .token(TOKEN)
            .endpoint(&self.base_url)
            .build()
            .expect("client builds")
    }

    pub fn path(method: &str) -> String {
        format!("/bot{}/{}", TOKEN, method)
    }

    /// Mock a JSON envelope for `method`.
    pub async fn mock_json(&mut self, http_method: &str, method: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock(http_method, Self::path(method).as_str())
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }
}
