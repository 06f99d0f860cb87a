use crate::error::AppError;
use crate::response::ok;
use crate::state::AppState;
use crate::store::Repository;
use axum::{extract::State, response::IntoResponse};

/// GET /pizzas
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let pizzas = state.pizzas.find_all().await?;
    Ok(ok(pizzas))
}
