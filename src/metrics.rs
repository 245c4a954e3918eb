use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::time::Duration;

/// Initialize Prometheus metrics exporter
pub fn init_metrics() -> PrometheusHandle {
    let builder = PrometheusBuilder::new();

    let handle = builder
        .install_recorder()
        .expect("Failed to install Prometheus recorder");

    init_metric_descriptions();

    handle
}

/// Initialize metric descriptions (can be called multiple times safely)
fn init_metric_descriptions() {
    describe_counter!(
        "spacebuy_quotes_total",
        "Total number of pricing quotes produced"
    );
    describe_counter!(
        "spacebuy_ai_failures_total",
        "AI pricing calls that degraded to the fallback estimator"
    );
    describe_histogram!(
        "spacebuy_ai_request_duration_seconds",
        "Gemini request duration in seconds"
    );
    describe_counter!("spacebuy_orders_total", "Total number of orders placed");
    describe_gauge!(
        "spacebuy_info",
        "SpaceBuy version and build information"
    );

    gauge!("spacebuy_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);
}

/// Record a produced quote, labeled by destination and source (ai/fallback)
pub fn record_quote(planet: &str, source: &str) {
    counter!(
        "spacebuy_quotes_total",
        "planet" => planet.to_string(),
        "source" => source.to_string(),
    )
    .increment(1);
}

/// Record an AI pricing failure by kind (timeout/transport/upstream/empty/parse)
pub fn record_ai_failure(kind: &str) {
    counter!(
        "spacebuy_ai_failures_total",
        "kind" => kind.to_string(),
    )
    .increment(1);
}

/// Record the duration of one Gemini call
pub fn record_ai_duration(duration: Duration) {
    histogram!("spacebuy_ai_request_duration_seconds").record(duration.as_secs_f64());
}

/// Record a placed order, labeled by destination
pub fn record_order(planet: &str) {
    counter!(
        "spacebuy_orders_total",
        "planet" => planet.to_string(),
    )
    .increment(1);
}
