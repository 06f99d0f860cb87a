//! Per-process context handed to every handler. Built once at startup;
//! each request borrows pool connections only for its own queries.

use crate::store::{PizzaStore, RestaurantPizzaStore, RestaurantStore};
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub pizzas: PizzaStore,
    pub restaurants: RestaurantStore,
    pub restaurant_pizzas: RestaurantPizzaStore,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pizzas: PizzaStore::new(pool.clone()),
            restaurants: RestaurantStore::new(pool.clone()),
            restaurant_pizzas: RestaurantPizzaStore::new(pool.clone()),
            pool,
        }
    }
}
