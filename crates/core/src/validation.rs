//! Input validation helpers built on the `validator` crate.
//!
//! DTOs derive [`Validate`]; services call [`validate_input`] so every
//! field-rule failure surfaces as a single [`CoreError::Validation`] whose
//! message lists each offending field.

use std::borrow::Cow;

use validator::{Validate, ValidateEmail, ValidateUrl, ValidationError, ValidationErrors};

use crate::error::CoreError;

/// Run the derived field rules on `input`.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(validation_message(&errors)))
}

/// Flatten field errors into one message, sorted by field name so the
/// output is stable.
///
/// Each error contributes its custom message when present, otherwise
/// `"<field> failed <code>"`. Messages are joined with `"; "`.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<(String, Vec<String>)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let field = field.to_string();
            let messages = errs
                .iter()
                .map(|e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{field} failed {}", e.code),
                })
                .collect();
            (field, messages)
        })
        .collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(_, messages)| messages)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Accepts the empty string (meaning "keep the current value") or a
/// well-formed URL.
pub fn blank_or_url(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.validate_url() {
        Ok(())
    } else {
        Err(with_message("url", "photo_url must be a valid URL"))
    }
}

/// Accepts the empty string or a well-formed email address.
pub fn blank_or_email(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.validate_email() {
        Ok(())
    } else {
        Err(with_message("email", "email must be a valid email address"))
    }
}

fn with_message(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}
