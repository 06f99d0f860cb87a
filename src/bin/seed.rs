//! Seeds an empty database with sample pizzas, restaurants and prices.

use pizza_restaurants::seed::{seed, SeedOutcome};
use pizza_restaurants::{apply_migrations, connect, init_tracing, Settings};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;
    init_tracing(&settings);

    let pool = connect(&settings.database_url, settings.max_connections).await?;
    if settings.run_migrations {
        apply_migrations(&pool).await?;
        tracing::info!("database migrations applied");
    }

    match seed(&pool).await? {
        SeedOutcome::Skipped => tracing::info!("pizzas already present, seeding skipped"),
        SeedOutcome::Seeded {
            pizzas,
            restaurants,
            restaurant_pizzas,
        } => tracing::info!(pizzas, restaurants, restaurant_pizzas, "database seeded"),
    }
    pool.close().await;
    Ok(())
}
