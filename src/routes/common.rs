//! Liveness, readiness and build info.

use crate::error::AppError;
use crate::state::AppState;
use crate::store;
use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

pub const DATABASE_UNAVAILABLE: &str = "Database unavailable";

/// Readiness needs a round-trip to the database; a failure surfaces as 503.
async fn ready(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    store::ping(&state.pool).await.map_err(|e| {
        tracing::warn!(error = %e, "readiness check failed");
        AppError::Unavailable(DATABASE_UNAVAILABLE.into())
    })?;
    Ok(Json(json!({ "status": "ok", "database": "ok" })))
}

/// GET /health, GET /ready, GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { Json(json!({ "status": "ok" })) }))
        .route("/ready", get(ready))
        .route(
            "/version",
            get(|| async {
                Json(json!({
                    "name": env!("CARGO_PKG_NAME"),
                    "version": env!("CARGO_PKG_VERSION"),
                }))
            }),
        )
        .with_state(state)
}
