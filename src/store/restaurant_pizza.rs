use super::Repository;
use crate::error::AppError;
use crate::models::{NewRestaurantPizza, Pizza, RestaurantPizza, RestaurantPizzaEntry};
use crate::service::validate_price;
use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

#[derive(Clone)]
pub struct RestaurantPizzaStore {
    pool: SqlitePool,
}

impl RestaurantPizzaStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Associations of one restaurant, each with its pizza embedded.
    pub async fn find_by_restaurant(
        &self,
        restaurant_id: i64,
    ) -> Result<Vec<RestaurantPizzaEntry>, AppError> {
        let rows = sqlx::query(
            r#"
            SELECT rp.id, rp.price, rp.pizza_id, rp.restaurant_id,
                   p.name AS pizza_name, p.ingredients AS pizza_ingredients
            FROM restaurant_pizzas rp
            JOIN pizzas p ON p.id = rp.pizza_id
            WHERE rp.restaurant_id = ?
            ORDER BY rp.id
            "#,
        )
        .bind(restaurant_id)
        .fetch_all(&self.pool)
        .await?;
        let entries = rows.iter().map(entry_from_row).collect::<Result<Vec<_>, _>>()?;
        Ok(entries)
    }
}

fn entry_from_row(row: &SqliteRow) -> Result<RestaurantPizzaEntry, sqlx::Error> {
    let pizza_id: i64 = row.try_get("pizza_id")?;
    Ok(RestaurantPizzaEntry {
        id: row.try_get("id")?,
        price: row.try_get("price")?,
        pizza_id,
        restaurant_id: row.try_get("restaurant_id")?,
        pizza: Pizza {
            id: pizza_id,
            name: row.try_get("pizza_name")?,
            ingredients: row.try_get("pizza_ingredients")?,
        },
    })
}

#[async_trait]
impl Repository for RestaurantPizzaStore {
    type Entity = RestaurantPizza;
    type New = NewRestaurantPizza;

    async fn find_by_id(&self, id: i64) -> Result<Option<RestaurantPizza>, AppError> {
        let row = sqlx::query_as::<_, RestaurantPizza>(
            "SELECT id, price, pizza_id, restaurant_id FROM restaurant_pizzas WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find_all(&self) -> Result<Vec<RestaurantPizza>, AppError> {
        let rows = sqlx::query_as::<_, RestaurantPizza>(
            "SELECT id, price, pizza_id, restaurant_id FROM restaurant_pizzas ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Price is checked before anything touches the database.
    async fn save(&self, new: &NewRestaurantPizza) -> Result<RestaurantPizza, AppError> {
        validate_price(new.price)?;
        let mut tx = self.pool.begin().await?;
        let row = sqlx::query_as::<_, RestaurantPizza>(
            r#"
            INSERT INTO restaurant_pizzas (price, pizza_id, restaurant_id)
            VALUES (?, ?, ?)
            RETURNING id, price, pizza_id, restaurant_id
            "#,
        )
        .bind(new.price)
        .bind(new.pizza_id)
        .bind(new.restaurant_id)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        tracing::debug!(
            id = row.id,
            pizza_id = row.pizza_id,
            restaurant_id = row.restaurant_id,
            "restaurant pizza created"
        );
        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;
        let deleted = sqlx::query("DELETE FROM restaurant_pizzas WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        if deleted == 0 {
            return Ok(false);
        }
        tx.commit().await?;
        Ok(true)
    }
}
