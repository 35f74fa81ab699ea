//! Response validation: content type, JSON decoding and envelope check.

use serde_json::Value;
use tracing::warn;

use super::prepare::JSON_CONTENT_TYPE;
use crate::transport::TransportResponse;
use crate::types::ApiEnvelope;
use crate::{Error, Result};

/// The response must be exactly `application/json`. Anything else (an HTML
/// error page from a proxy, for instance) is rejected without decoding.
pub fn check_content_type(content_type: Option<&str>) -> Result<()> {
    match content_type {
        Some(JSON_CONTENT_TYPE) => Ok(()),
        other => Err(Error::UnexpectedContentType {
            content_type: other.unwrap_or("<none>").to_string(),
        }),
    }
}

/// Check the `ok` flag of a decoded body.
///
/// A failed call with a string `description` and an integer `error_code`
/// becomes [`Error::Api`]; any other non-ok body becomes
/// [`Error::MalformedEnvelope`] carrying the raw JSON.
pub fn check_envelope(body: Value) -> Result<ApiEnvelope> {
    if body.get("ok") != Some(&Value::Bool(true)) {
        let description = body.get("description").and_then(Value::as_str);
        let error_code = body.get("error_code").and_then(Value::as_i64);
        let err = match (description, error_code) {
            (Some(description), Some(error_code)) => Error::Api {
                description: description.to_string(),
                error_code,
            },
            _ => Error::MalformedEnvelope {
                payload: body.to_string(),
            },
        };
        warn!(error = %err, "Telegram API reported a failed call");
        return Err(err);
    }
    Ok(serde_json::from_value(body)?)
}

pub fn decode_response(response: TransportResponse) -> Result<ApiEnvelope> {
    check_content_type(response.content_type.as_deref())?;
    let body: Value = serde_json::from_slice(&response.body)?;
    check_envelope(body)
}
