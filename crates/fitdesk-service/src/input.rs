//! Shared input normalization.
//!
//! Incoming text is trimmed everywhere; for partial updates a blank value
//! means "keep what is stored".

use crate::error::{Result, ServiceError};

/// Trim a required field, rejecting blank input.
pub(crate) fn required_trimmed(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::EmptyField { field });
    }
    Ok(trimmed.to_string())
}

/// Trim an optional update field; absent and blank both mean "unchanged".
pub(crate) fn nonblank(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
