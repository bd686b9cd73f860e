//! Request validation: field presence, type and length checks. Never touches the database.

use crate::error::AppError;

/// Longest accepted name, specialty or date.
pub const SHORT_TEXT_MAX: usize = 99;
/// Longest accepted medical record details.
pub const LONG_TEXT_MAX: usize = 254;

pub struct RequestValidator;

impl RequestValidator {
    /// Required string: present, not blank, at most `max_chars` characters.
    pub fn text(field: &str, value: Option<String>, max_chars: usize) -> Result<String, AppError> {
        let value = value.ok_or_else(|| AppError::Validation(format!("{} is required", field)))?;
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{} must not be empty", field)));
        }
        if value.chars().count() > max_chars {
            return Err(AppError::Validation(format!(
                "{} must be at most {} characters",
                field, max_chars
            )));
        }
        Ok(value)
    }

    /// Required id or relation id: present and strictly positive.
    pub fn positive_id(field: &str, value: Option<i64>) -> Result<i64, AppError> {
        match value {
            None => Err(AppError::Validation(format!("{} is required", field))),
            Some(n) if n <= 0 => Err(AppError::Validation(format!("{} must be a positive integer", field))),
            Some(n) => Ok(n),
        }
    }

    /// Id for a full replace. The path id wins when given; a body id that disagrees is rejected.
    pub fn update_id(path_id: Option<i64>, body_id: Option<i64>) -> Result<i64, AppError> {
        match (path_id, body_id) {
            (Some(p), Some(b)) if p != b => Err(AppError::Validation(format!(
                "id in body ({}) does not match id in path ({})",
                b, p
            ))),
            (Some(p), _) => Self::positive_id("id", Some(p)),
            (None, b) => Self::positive_id("id", b),
        }
    }
}
