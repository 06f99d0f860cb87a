mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::json;

#[tokio::test]
async fn creates_price_with_nested_parents() {
    let (app, pool) = setup_app().await;
    let pizza = seed_pizza(&pool, "Cheese").await;
    let restaurant = seed_restaurant(&pool, "Luigi's").await;

    let (status, body) = send_json(
        &app,
        "POST",
        "/restaurant_pizzas",
        Some(json!({"price": 10, "pizza_id": pizza, "restaurant_id": restaurant})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].as_i64().is_some());
    assert_eq!(body["price"], json!(10));
    assert_eq!(body["pizza_id"], json!(pizza));
    assert_eq!(body["restaurant_id"], json!(restaurant));
    assert_eq!(
        body["pizza"],
        json!({"id": pizza, "name": "Cheese", "ingredients": "Dough, Cheese"})
    );
    assert_eq!(
        body["restaurant"],
        json!({"id": restaurant, "name": "Luigi's", "address": "1 Main St"})
    );
    assert_eq!(count_prices_for(&pool, restaurant).await, 1);
}

#[tokio::test]
async fn created_price_shows_on_restaurant() {
    let (app, pool) = setup_app().await;
    let pizza = seed_pizza(&pool, "Cheese").await;
    let restaurant = seed_restaurant(&pool, "Luigi's").await;

    let (status, created) = send_json(
        &app,
        "POST",
        "/restaurant_pizzas",
        Some(json!({"price": 7, "pizza_id": pizza, "restaurant_id": restaurant})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = send_json(&app, "GET", &format!("/restaurants/{restaurant}"), None).await;
    assert_eq!(body["restaurant_pizzas"][0]["id"], created["id"]);
    assert_eq!(body["restaurant_pizzas"][0]["price"], json!(7));
}

#[tokio::test]
async fn missing_fields_are_400() {
    let (app, pool) = setup_app().await;
    let pizza = seed_pizza(&pool, "Cheese").await;
    let restaurant = seed_restaurant(&pool, "Luigi's").await;

    for body in [
        json!({"pizza_id": pizza, "restaurant_id": restaurant}),
        json!({"price": 10, "restaurant_id": restaurant}),
        json!({"price": 10, "pizza_id": pizza}),
        json!({"price": null, "pizza_id": pizza, "restaurant_id": restaurant}),
        json!({}),
        json!([]),
    ] {
        let (status, resp) = send_json(&app, "POST", "/restaurant_pizzas", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(resp["errors"], json!(["Missing fields in request."]));
    }
    assert_eq!(count_prices_for(&pool, restaurant).await, 0);
}

#[tokio::test]
async fn malformed_body_is_400() {
    let (app, _pool) = setup_app().await;
    let (status, body) = send(&app, "POST", "/restaurant_pizzas", Some("{not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["errors"], json!(["Missing fields in request."]));

    let (status, _) = send(&app, "POST", "/restaurant_pizzas", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_pizza_is_404() {
    let (app, pool) = setup_app().await;
    let restaurant = seed_restaurant(&pool, "Luigi's").await;

    let (status, body) = send_json(
        &app,
        "POST",
        "/restaurant_pizzas",
        Some(json!({"price": 10, "pizza_id": 999, "restaurant_id": restaurant})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["errors"], json!(["Pizza not found."]));
}

#[tokio::test]
async fn unknown_restaurant_is_404() {
    let (app, pool) = setup_app().await;
    let pizza = seed_pizza(&pool, "Cheese").await;

    let (status, body) = send_json(
        &app,
        "POST",
        "/restaurant_pizzas",
        Some(json!({"price": 10, "pizza_id": pizza, "restaurant_id": 999})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["errors"], json!(["Restaurant not found."]));
}

#[tokio::test]
async fn pizza_is_checked_before_restaurant() {
    let (app, _pool) = setup_app().await;
    let (status, body) = send_json(
        &app,
        "POST",
        "/restaurant_pizzas",
        Some(json!({"price": 10, "pizza_id": 998, "restaurant_id": 999})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["errors"], json!(["Pizza not found."]));
}

#[tokio::test]
async fn out_of_range_price_is_400_and_not_persisted() {
    let (app, pool) = setup_app().await;
    let pizza = seed_pizza(&pool, "Cheese").await;
    let restaurant = seed_restaurant(&pool, "Luigi's").await;

    for price in [0, 31, -5] {
        let (status, body) = send_json(
            &app,
            "POST",
            "/restaurant_pizzas",
            Some(json!({"price": price, "pizza_id": pizza, "restaurant_id": restaurant})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"], json!(["Price must be between 1 and 30."]));
    }
    assert_eq!(count_prices_for(&pool, restaurant).await, 0);
}

#[tokio::test]
async fn non_integer_values_are_400() {
    let (app, pool) = setup_app().await;
    let pizza = seed_pizza(&pool, "Cheese").await;
    let restaurant = seed_restaurant(&pool, "Luigi's").await;

    let (status, body) = send_json(
        &app,
        "POST",
        "/restaurant_pizzas",
        Some(json!({"price": "ten", "pizza_id": pizza, "restaurant_id": restaurant})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"], json!(["Price must be an integer."]));

    let (status, body) = send_json(
        &app,
        "POST",
        "/restaurant_pizzas",
        Some(json!({"price": 10, "pizza_id": "one", "restaurant_id": restaurant})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"], json!(["pizza_id must be an integer."]));
}

#[tokio::test]
async fn create_then_delete_scenario() {
    let (app, pool) = setup_app().await;
    let restaurant = seed_restaurant(&pool, "Luigi's").await;
    let pizza = seed_pizza(&pool, "Cheese").await;
    assert_eq!((restaurant, pizza), (1, 1));

    let (status, body) = send_json(
        &app,
        "POST",
        "/restaurant_pizzas",
        Some(json!({"price": 10, "pizza_id": 1, "restaurant_id": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["price"], json!(10));

    let (status, _) = send(&app, "DELETE", "/restaurants/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send_json(&app, "GET", "/restaurants/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(count_prices_for(&pool, 1).await, 0);
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let (app, pool) = setup_app().await;
    let pizza = seed_pizza(&pool, "Cheese").await;
    let restaurant = seed_restaurant(&pool, "Luigi's").await;
    let padding = "x".repeat(128 * 1024);
    let body = json!({"price": 10, "pizza_id": pizza, "restaurant_id": restaurant, "note": padding});

    let (status, resp) = send_json(&app, "POST", "/restaurant_pizzas", Some(body)).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(resp["error"], json!("Payload Too Large"));
    assert_eq!(resp["errors"], json!(["Payload Too Large"]));
    assert_eq!(count_prices_for(&pool, restaurant).await, 0);
}

#[tokio::test]
async fn storage_failure_on_create_is_generic_500() {
    let (app, pool) = setup_app().await;
    let pizza = seed_pizza(&pool, "Cheese").await;
    let restaurant = seed_restaurant(&pool, "Luigi's").await;
    sqlx::query("DROP TABLE restaurant_pizzas")
        .execute(&pool)
        .await
        .unwrap();

    let (status, body) = send_json(
        &app,
        "POST",
        "/restaurant_pizzas",
        Some(json!({"price": 10, "pizza_id": pizza, "restaurant_id": restaurant})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], json!("An unexpected error occurred."));
    assert_eq!(body["errors"], json!(["An unexpected error occurred."]));
    assert!(!body.to_string().contains("restaurant_pizzas"));
}
