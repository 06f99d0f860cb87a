//! Router assembly.

mod api;
mod common;

pub use api::api_routes;
pub use common::common_routes;

use crate::response::{error_body, ErrorBody};
use crate::state::AppState;
use axum::{
    http::{
        header::{ALLOW, CONTENT_TYPE},
        StatusCode,
    },
    middleware::map_response,
    response::{IntoResponse, Response},
    Json, Router,
};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

async fn not_found() -> (StatusCode, Json<ErrorBody>) {
    error_body(StatusCode::NOT_FOUND, "Not found")
}

async fn method_not_allowed() -> (StatusCode, Json<ErrorBody>) {
    error_body(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.starts_with("application/json"))
        .unwrap_or(false)
}

/// Rewrites error responses produced by the framework or middleware (body
/// limit rejections, extractor failures) into the JSON error envelope.
async fn json_errors(response: Response) -> Response {
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) || is_json(&response) {
        return response;
    }
    let allow = response.headers().get(ALLOW).cloned();
    let message = status.canonical_reason().unwrap_or("Request failed");
    let mut rewritten = error_body(status, message).into_response();
    if let Some(allow) = allow {
        rewritten.headers_mut().insert(ALLOW, allow);
    }
    rewritten
}

/// Full application: common and API routes, JSON 404/405 fallbacks, body
/// limit, JSON error rewriting, and a tracing span per request.
pub fn app(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(api_routes(state))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(RequestBodyLimitLayer::new(body_limit_bytes))
        .layer(map_response(json_errors))
        .layer(TraceLayer::new_for_http())
}
