//! Request validation and domain rules applied before persistence.

mod validation;
pub use validation::{validate_price, RequestValidator, MISSING_FIELDS, PRICE_MAX, PRICE_MIN};
