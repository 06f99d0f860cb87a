//! Request body validation and the price rule.

use crate::error::AppError;
use serde_json::{Map, Value};

pub const PRICE_MIN: i64 = 1;
pub const PRICE_MAX: i64 = 30;

pub const MISSING_FIELDS: &str = "Missing fields in request.";

pub struct RequestValidator;

impl RequestValidator {
    /// Body must be a JSON object carrying every field with a non-null value.
    pub fn require_fields<'a>(
        body: &'a Value,
        fields: &[&str],
    ) -> Result<&'a Map<String, Value>, AppError> {
        let map = body
            .as_object()
            .ok_or_else(|| AppError::Validation(MISSING_FIELDS.into()))?;
        let complete = fields
            .iter()
            .all(|f| map.get(*f).map(|v| !v.is_null()).unwrap_or(false));
        if !complete {
            return Err(AppError::Validation(MISSING_FIELDS.into()));
        }
        Ok(map)
    }

    /// Integer id field. Floats, strings and booleans are rejected.
    pub fn id(body: &Map<String, Value>, field: &str) -> Result<i64, AppError> {
        body.get(field)
            .and_then(Value::as_i64)
            .ok_or_else(|| AppError::Validation(format!("{} must be an integer.", field)))
    }

    /// Price as an integer. The range is checked where it is persisted.
    pub fn price(body: &Map<String, Value>) -> Result<i64, AppError> {
        body.get("price")
            .and_then(Value::as_i64)
            .ok_or_else(|| AppError::Validation("Price must be an integer.".into()))
    }
}

/// Price must fall within `PRICE_MIN..=PRICE_MAX`.
pub fn validate_price(price: i64) -> Result<(), AppError> {
    if !(PRICE_MIN..=PRICE_MAX).contains(&price) {
        return Err(AppError::Validation(format!(
            "Price must be between {} and {}.",
            PRICE_MIN, PRICE_MAX
        )));
    }
    Ok(())
}
