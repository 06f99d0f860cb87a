//! Plain data records and the serialized shapes the API returns.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Pizza {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct RestaurantPizza {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}

#[derive(Debug, Clone)]
pub struct NewPizza {
    pub name: String,
    pub ingredients: String,
}

#[derive(Debug, Clone)]
pub struct NewRestaurant {
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone)]
pub struct NewRestaurantPizza {
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}

/// Association as listed under its restaurant: the pizza is embedded, the
/// restaurant is the enclosing object.
#[derive(Debug, Clone, Serialize)]
pub struct RestaurantPizzaEntry {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub pizza: Pizza,
}

/// Association with both parents embedded.
#[derive(Debug, Clone, Serialize)]
pub struct RestaurantPizzaView {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub pizza: Pizza,
    pub restaurant: Restaurant,
}

/// Single-restaurant view with its price list.
#[derive(Debug, Clone, Serialize)]
pub struct RestaurantDetail {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    pub restaurant_pizzas: Vec<RestaurantPizzaEntry>,
}

impl RestaurantPizzaView {
    pub fn new(association: RestaurantPizza, pizza: Pizza, restaurant: Restaurant) -> Self {
        Self {
            id: association.id,
            price: association.price,
            pizza_id: association.pizza_id,
            restaurant_id: association.restaurant_id,
            pizza,
            restaurant,
        }
    }
}
