//! Required-parameter validation, run before any network activity.

use crate::types::Parameters;
use crate::{Error, ErrorContext, Result};

/// Check that `parameters` is present and that each `required` field is set
/// to a truthy value.
///
/// Truthiness is deliberately loose: `null`, `false`, `0` and `""` count as
/// missing (see [`FieldValue::is_truthy`]). A required numeric field whose
/// legitimate value is zero is therefore rejected. Telegram ids and
/// coordinates are never exactly zero in practice; callers that need to send
/// a zero can skip validation with [`BotApi::request`].
///
/// [`FieldValue::is_truthy`]: crate::types::FieldValue::is_truthy
/// [`BotApi::request`]: crate::BotApi::request
pub fn require(parameters: Option<&Parameters>, required: &[&str]) -> Result<()> {
    let parameters = parameters.ok_or_else(|| {
        Error::validation_with_context(
            "'parameters' object is required.",
            ErrorContext::new().with_source("parameter_validator"),
        )
    })?;

    for field in required {
        let present = parameters.get(field).map_or(false, |v| v.is_truthy());
        if !present {
            return Err(Error::validation_with_context(
                format!("'{}' parameter is required.", field),
                ErrorContext::new()
                    .with_field_path(*field)
                    .with_source("parameter_validator"),
            ));
        }
    }

    Ok(())
}
