//! Body preparation: turn caller options into a transport-ready request.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

use crate::types::{Body, CallOptions, FieldValue, HttpMethod, MultipartForm, Parameters, PartValue};
use crate::{Error, ErrorContext, Result};

/// Field that carries keyboards and other reply markup. Structured values are
/// sent as a JSON string in both JSON and multipart bodies.
pub const MARKUP_FIELD: &str = "reply_markup";

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Body as handed to the transport.
#[derive(Debug)]
pub enum PreparedBody {
    Empty,
    /// Encoded body (JSON or caller-supplied text).
    Text(String),
    /// Form whose boundary header is added by the transport.
    Multipart(MultipartForm),
}

impl PreparedBody {
    pub fn kind(&self) -> &'static str {
        match self {
            PreparedBody::Empty => "empty",
            PreparedBody::Text(_) => "text",
            PreparedBody::Multipart(_) => "multipart",
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PreparedBody::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_multipart(&self) -> Option<&MultipartForm> {
        match self {
            PreparedBody::Multipart(f) => Some(f),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct PreparedRequest {
    pub method: HttpMethod,
    /// Lowercase header names.
    pub headers: BTreeMap<String, String>,
    pub body: PreparedBody,
}

/// Prepare a request from call options.
///
/// Defaults the method to `POST`, JSON-encodes a structured `reply_markup`,
/// then encodes field bodies as multipart (when requested) or JSON. Text and
/// form bodies pass through untouched. The multipart flag itself is not
/// forwarded.
pub fn prepare(options: CallOptions) -> Result<PreparedRequest> {
    let CallOptions {
        method,
        mut headers,
        body,
        multipart,
    } = options;
    let method = method.unwrap_or_default();
    let multipart = multipart.unwrap_or(false);

    let body = match body {
        None => PreparedBody::Empty,
        Some(Body::Text(text)) => PreparedBody::Text(text),
        Some(Body::Form(form)) => PreparedBody::Multipart(form),
        Some(Body::Fields(params)) => {
            let params = stringify_fields(params, &[MARKUP_FIELD])?;
            if multipart {
                debug!(fields = params.len(), "Encoding request body as multipart");
                PreparedBody::Multipart(to_form(params)?)
            } else {
                debug!(fields = params.len(), "Encoding request body as JSON");
                let encoded = to_json(params)?;
                headers.insert("content-type".to_string(), JSON_CONTENT_TYPE.to_string());
                PreparedBody::Text(encoded)
            }
        }
    };

    Ok(PreparedRequest {
        method,
        headers,
        body,
    })
}

/// Replace each named field holding a non-string JSON value with its JSON text.
pub fn stringify_fields(mut params: Parameters, fields: &[&str]) -> Result<Parameters> {
    for field in fields {
        let encoded = match params.get(field) {
            Some(FieldValue::Json(value)) if !value.is_string() => serde_json::to_string(value)?,
            _ => continue,
        };
        params.insert(*field, Value::String(encoded));
    }
    Ok(params)
}

fn to_form(params: Parameters) -> Result<MultipartForm> {
    let mut form = MultipartForm::new();
    for (name, value) in params {
        let part = match value {
            FieldValue::File(file) => PartValue::File(file),
            FieldValue::Json(Value::Null) => continue,
            FieldValue::Json(Value::String(s)) => PartValue::Text(s),
            FieldValue::Json(other) => PartValue::Text(serde_json::to_string(&other)?),
        };
        form.push(name, part);
    }
    Ok(form)
}

fn to_json(params: Parameters) -> Result<String> {
    let mut object = Map::new();
    for (name, value) in params {
        match value {
            FieldValue::Json(v) => {
                object.insert(name, v);
            }
            FieldValue::File(_) => {
                return Err(Error::validation_with_context(
                    format!("'{}' is a file upload and needs a multipart body", name),
                    ErrorContext::new()
                        .with_field_path(name)
                        .with_source("body_preparation"),
                ));
            }
        }
    }
    Ok(serde_json::to_string(&Value::Object(object))?)
}
