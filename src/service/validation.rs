//! Required-field validation for blog payloads.

use crate::error::AppError;
use crate::model::BlogPayload;

pub struct RequestValidator;

impl RequestValidator {
    /// Checks title, content, category and tags in that order; reports the first failure only.
    pub fn validate(payload: &BlogPayload) -> Result<(), AppError> {
        for (field, value) in [
            ("title", &payload.title),
            ("content", &payload.content),
            ("category", &payload.category),
        ] {
            if is_blank(value) {
                return Err(AppError::Validation(format!("{} is required", field)));
            }
        }
        if payload.tags.is_empty() {
            return Err(AppError::Validation("at least one tag is required".into()));
        }
        Ok(())
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
