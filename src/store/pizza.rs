use super::Repository;
use crate::error::AppError;
use crate::models::{NewPizza, Pizza};
use async_trait::async_trait;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct PizzaStore {
    pool: SqlitePool,
}

impl PizzaStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository for PizzaStore {
    type Entity = Pizza;
    type New = NewPizza;

    async fn find_by_id(&self, id: i64) -> Result<Option<Pizza>, AppError> {
        let row = sqlx::query_as::<_, Pizza>("SELECT id, name, ingredients FROM pizzas WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_all(&self) -> Result<Vec<Pizza>, AppError> {
        let rows = sqlx::query_as::<_, Pizza>("SELECT id, name, ingredients FROM pizzas ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn save(&self, new: &NewPizza) -> Result<Pizza, AppError> {
        let mut tx = self.pool.begin().await?;
        let row = sqlx::query_as::<_, Pizza>(
            "INSERT INTO pizzas (name, ingredients) VALUES (?, ?) RETURNING id, name, ingredients",
        )
        .bind(&new.name)
        .bind(&new.ingredients)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        tracing::debug!(id = row.id, "pizza created");
        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM restaurant_pizzas WHERE pizza_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let deleted = sqlx::query("DELETE FROM pizzas WHERE id = ?")
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
