//! Per-call options and request bodies.

use std::collections::BTreeMap;
use std::fmt;

use super::params::{InputFile, Parameters};

/// HTTP method used for a Bot API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    Get,
    #[default]
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single part of a multipart form.
#[derive(Debug)]
pub enum PartValue {
    Text(String),
    File(InputFile),
}

#[derive(Debug)]
pub struct FormPart {
    pub name: String,
    pub value: PartValue,
}

/// Multipart container. The boundary is generated by the transport when the
/// form is sent.
#[derive(Debug, Default)]
pub struct MultipartForm {
    parts: Vec<FormPart>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, PartValue::Text(value.into()));
        self
    }

    pub fn file(mut self, name: impl Into<String>, file: InputFile) -> Self {
        self.push(name, PartValue::File(file));
        self
    }

    pub fn push(&mut self, name: impl Into<String>, value: PartValue) {
        self.parts.push(FormPart {
            name: name.into(),
            value,
        });
    }

    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<FormPart> {
        self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Value of the first text part with this name.
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|p| match &p.value {
            PartValue::Text(s) if p.name == name => Some(s.as_str()),
            _ => None,
        })
    }

    /// The first file part with this name.
    pub fn file_part(&self, name: &str) -> Option<&InputFile> {
        self.parts.iter().find_map(|p| match &p.value {
            PartValue::File(f) if p.name == name => Some(f),
            _ => None,
        })
    }
}

/// Request body supplied by the caller.
#[derive(Debug)]
pub enum Body {
    /// Named fields, encoded as JSON or multipart by the pipeline.
    Fields(Parameters),
    /// Already-encoded body, sent as is.
    Text(String),
    /// Already-built multipart form, sent as is.
    Form(MultipartForm),
}

/// Options for a single call. Consumed by the request pipeline.
///
/// `method` and `multipart` are `None` when the caller has no preference;
/// endpoint methods fill them in, and the pipeline falls back to `POST` and
/// no multipart.
#[derive(Debug, Default)]
pub struct CallOptions {
    pub method: Option<HttpMethod>,
    /// Lowercase names; only [`CallOptions::header`] inserts.
    pub(crate) headers: BTreeMap<String, String>,
    pub body: Option<Body>,
    pub multipart: Option<bool>,
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: HttpMethod) -> Self {
        self.method = Some(method);
        self
    }

    pub fn header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.as_ref().to_ascii_lowercase(), value.into());
        self
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    pub fn body(mut self, body: Body) -> Self {
        self.body = Some(body);
        self
    }

    pub fn fields(self, parameters: Parameters) -> Self {
        self.body(Body::Fields(parameters))
    }

    /// Force (or forbid) multipart encoding.
    pub fn multipart(mut self, multipart: bool) -> Self {
        self.multipart = Some(multipart);
        self
    }
}
