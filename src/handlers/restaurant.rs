use crate::error::AppError;
use crate::models::RestaurantDetail;
use crate::response::ok;
use crate::state::AppState;
use crate::store::Repository;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

pub const RESTAURANT_NOT_FOUND: &str = "Restaurant not found";

/// Ids that are not integers cannot name a row, so they read as absent.
fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::NotFound(RESTAURANT_NOT_FOUND.into()))
}

/// GET /restaurants. Shallow: associations are only listed on the detail view.
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let restaurants = state.restaurants.find_all().await?;
    tracing::debug!(count = restaurants.len(), "listed restaurants");
    Ok(ok(restaurants))
}

/// GET /restaurants/:id
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let restaurant = state
        .restaurants
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(RESTAURANT_NOT_FOUND.into()))?;
    let restaurant_pizzas = state.restaurant_pizzas.find_by_restaurant(id).await?;
    Ok(ok(RestaurantDetail {
        restaurant,
        restaurant_pizzas,
    }))
}

/// DELETE /restaurants/:id. Dependent associations go in the same transaction.
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    if !state.restaurants.delete(id).await? {
        return Err(AppError::NotFound(RESTAURANT_NOT_FOUND.into()));
    }
    Ok(StatusCode::NO_CONTENT)
}
