use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{
    catalog::Catalog,
    config::Config,
    handlers::{self, AppState},
    metrics,
    quote::QuoteService,
    store::OrderStore,
};

/// Start the SpaceBuy API server
///
/// This function:
/// 1. Initializes metrics
/// 2. Opens the order store and builds the shared state
/// 3. Creates the Axum application
/// 4. Binds to the configured address
/// 5. Serves requests with graceful shutdown support
pub async fn start_server(config: Config) -> Result<()> {
    info!("Initializing Prometheus metrics...");
    let metrics_handle = Arc::new(metrics::init_metrics());

    let config = Arc::new(config);
    let catalog = Arc::new(Catalog::builtin());
    let http_client = reqwest::Client::new();
    let store = Arc::new(OrderStore::connect(&config.store.database_url).await?);
    let quotes = Arc::new(QuoteService::new(config.clone(), http_client));

    let state = AppState {
        config: config.clone(),
        catalog: catalog.clone(),
        quotes,
        store,
    };

    let app = create_router(state, metrics_handle, &config);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    info!("Starting SpaceBuy on {}", addr);
    info!(
        "Catalog: {} products, {} planets, {} agencies; AI pricing {}",
        catalog.products().len(),
        catalog.planets().len(),
        catalog.agencies().len(),
        if config.gemini.enabled {
            "enabled"
        } else {
            "disabled (fallback estimator only)"
        }
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped gracefully");
    Ok(())
}

/// Create the Axum router with all routes and middleware
fn create_router(
    state: AppState,
    metrics_handle: Arc<metrics_exporter_prometheus::PrometheusHandle>,
    config: &Config,
) -> Router {
    let api_routes = Router::new()
        .route("/v1/products", get(handlers::catalog::list_products))
        .route("/v1/planets", get(handlers::catalog::list_planets))
        .route("/v1/agencies", get(handlers::catalog::list_agencies))
        .route("/v1/quotes", post(handlers::quotes::create_quote))
        .route(
            "/v1/orders",
            post(handlers::orders::create_order).get(handlers::orders::list_orders),
        )
        .route("/v1/stats/planets", get(handlers::orders::planet_stats))
        .with_state(state);

    let mut public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check));
    if config.metrics.enabled {
        public_routes = public_routes.route(
            &config.metrics.endpoint,
            get(handlers::metrics_handler::metrics),
        );
    }

    public_routes
        .with_state(metrics_handle)
        .merge(api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received, draining connections...");
}
