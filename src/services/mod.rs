pub mod category_service;
pub mod listing_service;
pub mod purchase_service;
pub mod question_service;
pub mod user_service;

use crate::error::{AppError, AppResult};

/// Presence check for a required form field. Input is trimmed first, so
/// whitespace-only counts as missing.
pub(crate) fn required(value: &str, field: &'static str) -> AppResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::MissingField(field));
    }
    Ok(value.to_string())
}

/// Optional free-text field: blank is stored as NULL.
pub(crate) fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Parse a reference id coming from a selection input. A value that is not
/// an id at all cannot resolve to a row, so it reports the same
/// dangling-reference error as an id missing from the table.
pub(crate) fn parse_reference(value: &str, entity: &'static str) -> AppResult<i32> {
    let raw = value.trim();
    if raw.is_empty() {
        return Err(AppError::MissingField(entity));
    }
    raw.parse::<i32>()
        .map_err(|_| AppError::ReferenceNotFound(entity))
}
