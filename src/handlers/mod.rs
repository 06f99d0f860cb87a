//! HTTP handlers for pizzas, restaurants and their price associations.

pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;

use axum::response::Html;

/// Landing page.
pub async fn index() -> Html<&'static str> {
    Html("<h1>Code Challenge API</h1>")
}
