use super::Repository;
use crate::error::AppError;
use crate::models::{NewRestaurant, Restaurant};
use async_trait::async_trait;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct RestaurantStore {
    pool: SqlitePool,
}

impl RestaurantStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository for RestaurantStore {
    type Entity = Restaurant;
    type New = NewRestaurant;

    async fn find_by_id(&self, id: i64) -> Result<Option<Restaurant>, AppError> {
        let row =
            sqlx::query_as::<_, Restaurant>("SELECT id, name, address FROM restaurants WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row)
    }

    async fn find_all(&self) -> Result<Vec<Restaurant>, AppError> {
        let rows =
            sqlx::query_as::<_, Restaurant>("SELECT id, name, address FROM restaurants ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    async fn save(&self, new: &NewRestaurant) -> Result<Restaurant, AppError> {
        let mut tx = self.pool.begin().await?;
        let row = sqlx::query_as::<_, Restaurant>(
            "INSERT INTO restaurants (name, address) VALUES (?, ?) RETURNING id, name, address",
        )
        .bind(&new.name)
        .bind(&new.address)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        tracing::debug!(id = row.id, "restaurant created");
        Ok(row)
    }

    /// Removes the restaurant and every association pointing at it in one
    /// transaction.
    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;
        let associations = sqlx::query("DELETE FROM restaurant_pizzas WHERE restaurant_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        let deleted = sqlx::query("DELETE FROM restaurants WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        if deleted == 0 {
            return Ok(false);
        }
        tx.commit().await?;
        tracing::info!(id, associations, "restaurant deleted");
        Ok(true)
    }
}
