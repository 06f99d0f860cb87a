//! Sample data. Pizzas are read-only over HTTP, so this is how they get
//! into a fresh database.

use crate::error::AppError;
use crate::models::{NewPizza, NewRestaurant, NewRestaurantPizza};
use crate::store::{PizzaStore, Repository, RestaurantPizzaStore, RestaurantStore};
use sqlx::SqlitePool;

const PIZZAS: &[(&str, &str)] = &[
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

const RESTAURANTS: &[(&str, &str)] = &[
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Pizzas already existed; nothing was written.
    Skipped,
    Seeded {
        pizzas: usize,
        restaurants: usize,
        restaurant_pizzas: usize,
    },
}

/// Insert the sample rows unless the database already has pizzas, so
/// running it twice leaves one copy.
pub async fn seed(pool: &SqlitePool) -> Result<SeedOutcome, AppError> {
    let pizzas = PizzaStore::new(pool.clone());
    if !pizzas.find_all().await?.is_empty() {
        return Ok(SeedOutcome::Skipped);
    }
    let restaurants = RestaurantStore::new(pool.clone());
    let restaurant_pizzas = RestaurantPizzaStore::new(pool.clone());

    let mut pizza_ids = Vec::with_capacity(PIZZAS.len());
    for (name, ingredients) in PIZZAS {
        let pizza = pizzas
            .save(&NewPizza {
                name: name.to_string(),
                ingredients: ingredients.to_string(),
            })
            .await?;
        pizza_ids.push(pizza.id);
    }

    let mut restaurant_ids = Vec::with_capacity(RESTAURANTS.len());
    for (name, address) in RESTAURANTS {
        let restaurant = restaurants
            .save(&NewRestaurant {
                name: name.to_string(),
                address: address.to_string(),
            })
            .await?;
        restaurant_ids.push(restaurant.id);
    }

    for (i, restaurant_id) in restaurant_ids.iter().enumerate() {
        restaurant_pizzas
            .save(&NewRestaurantPizza {
                price: 10 + i as i64,
                pizza_id: pizza_ids[i % pizza_ids.len()],
                restaurant_id: *restaurant_id,
            })
            .await?;
    }

    Ok(SeedOutcome::Seeded {
        pizzas: pizza_ids.len(),
        restaurants: restaurant_ids.len(),
        restaurant_pizzas: restaurant_ids.len(),
    })
}
