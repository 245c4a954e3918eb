pub mod adapter;
pub mod catalog;
pub mod config;
pub mod currency;
pub mod error;
pub mod fallback;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod pricing;
pub mod providers;
pub mod quote;
pub mod server;
pub mod shipping;
pub mod store;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing/logging
///
/// Note: This function can only be called once per process. `main` calls it
/// before dispatching to a command.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}
