//! Tracing subscriber setup shared by the binaries.

use crate::config::{Settings, DEFAULT_LOG_FILTER};
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins over the default filter; `LOG_JSON` switches the format.
pub fn init_tracing(settings: &Settings) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    if settings.log_json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
