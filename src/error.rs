use crate::transport::TransportError;
use thiserror::Error;

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path or configuration key that caused the error (e.g., "chat_id", "config.endpoint")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., the API method being called)
    pub details: Option<String>,
    /// Source of the error (e.g., "parameter_validator", "client_builder")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for the Bot API client.
///
/// Every call either succeeds with a decoded envelope or fails with exactly
/// one of these.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Validation error: {message}{}", format_context(.context))]
    Validation {
        message: String,
        context: ErrorContext,
    },

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    /// The server answered with something other than `application/json`.
    #[error("Telegram API wrong type of response: '{content_type}'")]
    UnexpectedContentType { content_type: String },

    /// `ok` was false and the server explained why.
    #[error("Telegram API: '{description}' (code {error_code})")]
    Api {
        description: String,
        error_code: i64,
    },

    /// `ok` was not true and there was no usable description/error_code pair.
    #[error("Telegram API error: '{payload}'")]
    MalformedEnvelope { payload: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Create a new validation error with structured context
    pub fn validation_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Validation {
            message: msg.into(),
            context,
        }
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } | Error::Validation { context, .. } => {
                Some(context)
            }
            _ => None,
        }
    }

    /// Numeric error code reported by Telegram, if this is an API error.
    pub fn error_code(&self) -> Option<i64> {
        match self {
            Error::Api { error_code, .. } => Some(*error_code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_display_includes_field() {
        let err = Error::validation_with_context(
            "'chat_id' parameter is required.",
            ErrorContext::new()
                .with_field_path("chat_id")
                .with_source("parameter_validator"),
        );
        let msg = err.to_string();
        assert!(msg.contains("'chat_id' parameter is required."));
        assert!(msg.contains("field: chat_id"));
        assert_eq!(
            err.context().and_then(|c| c.field_path.as_deref()),
            Some("chat_id")
        );
    }

    #[test]
    fn api_error_exposes_code() {
        let err = Error::Api {
            description: "Bad Request: chat not found".into(),
            error_code: 400,
        };
        assert_eq!(err.error_code(), Some(400));
        assert_eq!(
            err.to_string(),
            "Telegram API: 'Bad Request: chat not found' (code 400)"
        );
        assert!(err.context().is_none());
    }
}
