//! Bot API response envelope.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Result;

/// Top-level decoded response: `{ ok, result?, description?, error_code? }`.
///
/// The shape of `result` depends on the method and is left untyped here;
/// use [`ApiEnvelope::into_result`] to decode it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i64>,
}

impl ApiEnvelope {
    pub fn result(&self) -> Option<&Value> {
        self.result.as_ref()
    }

    /// Decode `result` into a concrete type. A missing result decodes as `null`.
    pub fn into_result<T: DeserializeOwned>(self) -> Result<T> {
        let value = self.result.unwrap_or(Value::Null);
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::telegram::User;
    use serde_json::json;

    #[test]
    fn into_result_decodes_typed_payload() {
        let env: ApiEnvelope = serde_json::from_value(json!({
            "ok": true,
            "result": {"id": 7, "is_bot": true, "first_name": "Echo", "username": "echo_bot"}
        }))
        .unwrap();
        let user: User = env.into_result().unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.username.as_deref(), Some("echo_bot"));
    }

    #[test]
    fn missing_result_decodes_as_null() {
        let env = ApiEnvelope {
            ok: true,
            result: None,
            description: None,
            error_code: None,
        };
        let value: Option<User> = env.into_result().unwrap();
        assert!(value.is_none());
    }
}
