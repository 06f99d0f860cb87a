//! Response helpers shared by the handlers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// Error envelope. Both keys carry the same message so clients reading
/// either `error` or `errors` see it.
#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub error: String,
    pub errors: Vec<String>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            errors: vec![message.clone()],
            error: message,
        }
    }
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn error_body(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorBody>) {
    (status, Json(ErrorBody::new(message)))
}
