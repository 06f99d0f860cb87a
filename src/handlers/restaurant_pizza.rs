use crate::error::AppError;
use crate::models::{NewRestaurantPizza, RestaurantPizzaView};
use crate::response::created;
use crate::service::{RequestValidator, MISSING_FIELDS};
use crate::state::AppState;
use crate::store::Repository;
use axum::{body::Bytes, extract::State, response::IntoResponse};
use serde_json::Value;

const REQUIRED_FIELDS: &[&str] = &["price", "pizza_id", "restaurant_id"];

/// POST /restaurant_pizzas
///
/// Checks run in order: field presence, id types, pizza exists, restaurant
/// exists, price. The body is parsed by hand so a malformed or non-JSON body
/// gets the same envelope as a missing field.
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let body: Value =
        serde_json::from_slice(&body).map_err(|_| AppError::Validation(MISSING_FIELDS.into()))?;
    let fields = RequestValidator::require_fields(&body, REQUIRED_FIELDS)?;
    let pizza_id = RequestValidator::id(fields, "pizza_id")?;
    let restaurant_id = RequestValidator::id(fields, "restaurant_id")?;

    let pizza = state
        .pizzas
        .find_by_id(pizza_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Pizza not found.".into()))?;
    let restaurant = state
        .restaurants
        .find_by_id(restaurant_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Restaurant not found.".into()))?;

    let new = NewRestaurantPizza {
        price: RequestValidator::price(fields)?,
        pizza_id,
        restaurant_id,
    };
    let association = state.restaurant_pizzas.save(&new).await.map_err(|e| {
        if let AppError::Validation(message) = &e {
            tracing::warn!(%message, pizza_id, restaurant_id, "restaurant pizza rejected");
        }
        e
    })?;
    Ok(created(RestaurantPizzaView::new(association, pizza, restaurant)))
}
