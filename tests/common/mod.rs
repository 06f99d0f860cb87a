#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use pizza_restaurants::{app, apply_migrations, connect, AppState};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

pub async fn setup_pool() -> SqlitePool {
    let pool = connect("sqlite::memory:", 1).await.unwrap();
    apply_migrations(&pool).await.unwrap();
    pool
}

pub async fn setup_app() -> (Router, SqlitePool) {
    let pool = setup_pool().await;
    (app(AppState::new(pool.clone()), 64 * 1024), pool)
}

pub async fn seed_pizza(pool: &SqlitePool, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("INSERT INTO pizzas (name, ingredients) VALUES (?, 'Dough, Cheese') RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn seed_restaurant(pool: &SqlitePool, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("INSERT INTO restaurants (name, address) VALUES (?, '1 Main St') RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn seed_price(pool: &SqlitePool, price: i64, pizza_id: i64, restaurant_id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO restaurant_pizzas (price, pizza_id, restaurant_id) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(price)
    .bind(pizza_id)
    .bind(restaurant_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_prices_for(pool: &SqlitePool, restaurant_id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM restaurant_pizzas WHERE restaurant_id = ?")
        .bind(restaurant_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

pub async fn send_json(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let raw = body.map(|b| b.to_string());
    let (status, bytes) = send(app, method, uri, raw.as_deref()).await;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}
