pub mod catalog;
pub mod health;
pub mod metrics_handler;
pub mod orders;
pub mod quotes;

use crate::{catalog::Catalog, config::Config, quote::QuoteService, store::OrderStore};
use std::sync::Arc;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<Catalog>,
    pub quotes: Arc<QuoteService>,
    pub store: Arc<OrderStore>,
}
