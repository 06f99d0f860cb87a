//! REST API over restaurants, pizzas, and the prices restaurants charge
//! for them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod state;
pub mod store;
pub mod telemetry;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use routes::{api_routes, app, common_routes};
pub use state::AppState;
pub use store::{apply_migrations, connect, Repository};
pub use telemetry::init_tracing;
