use crate::currency;
use crate::error::AppError;
use crate::handlers::AppState;
use crate::metrics;
use crate::quote::{PricingQuote, QuoteSource};
use crate::shipping;
use crate::store::{NewOrder, OrderRecord, PlanetStats};
use axum::{
    extract::{Query, State},
    Json,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct OrderRequest {
    pub product: String,
    pub planet: String,
    #[serde(default)]
    pub agency: Option<String>,
    #[serde(default)]
    pub customer: Option<CustomerInfo>,
    #[serde(default)]
    pub special_instructions: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub order: OrderRecord,
    pub source: QuoteSource,
    pub multiplier: f64,
    pub reasoning: String,
    pub total_display: String,
    pub shipping_note: String,
    pub insurance: String,
}

/// Handle POST /v1/orders
///
/// Catalog products are priced off their list price; anything else goes
/// through the AI/fallback quote path. The computed quote and delivery cost
/// are persisted as an order record.
pub async fn create_order(
    State(state): State<AppState>,
    Json(request): Json<OrderRequest>,
) -> Result<Json<OrderResponse>, AppError> {
    let product_name = request.product.trim();
    if product_name.is_empty() {
        return Err(AppError::InvalidInput("product name cannot be empty".to_string()));
    }

    let profile = state.catalog.planet(&request.planet)?.clone();
    let agency = match &request.agency {
        Some(name) => Some(state.catalog.agency(name)?.clone()),
        None => None,
    };

    let mut rng = StdRng::from_entropy();
    let (quote, source, category) = match state.catalog.product(product_name) {
        Some(product) => (
            PricingQuote {
                base_price: product.base_price,
                multiplier: 1.0,
                reasoning: "Catalog list price".to_string(),
            },
            QuoteSource::Catalog,
            Some(product.category.clone()),
        ),
        None => {
            let (quote, source) = state
                .quotes
                .quote_product(product_name, &profile, &mut rng)
                .await?;
            (quote, source, None)
        }
    };

    let delivery_cost = state
        .quotes
        .delivery_cost(quote.base_price, &profile, &mut rng)?;
    let total_usd = quote.base_price + delivery_cost;
    let total_inr = total_usd * state.config.currency.usd_to_inr;

    let user_id = match &request.customer {
        Some(customer) => Some(state.store.ensure_user(&customer.name, &customer.email).await?),
        None => None,
    };

    let new_order = NewOrder {
        user_id,
        product_name: product_name.to_string(),
        product_category: category,
        destination_planet: profile.name.clone(),
        base_price_usd: quote.base_price,
        delivery_cost_usd: delivery_cost,
        total_price_inr: total_inr,
        space_agency: agency.as_ref().map(|a| a.name.clone()),
        estimated_delivery: shipping::estimated_delivery(&profile, &state.config.shipping, &mut rng),
        tracking_number: shipping::tracking_number(&mut rng),
        special_instructions: request.special_instructions.clone(),
    };

    let order = state.store.create_order(&new_order).await?;
    metrics::record_order(&profile.name);

    tracing::info!(
        order_id = %order.order_id,
        product = product_name,
        planet = %profile.name,
        source = source.as_str(),
        "Order placed"
    );

    Ok(Json(OrderResponse {
        source,
        multiplier: quote.multiplier,
        reasoning: quote.reasoning,
        total_display: currency::format_price(total_usd, &state.config.currency),
        shipping_note: shipping::shipping_commentary(&profile.name, delivery_cost, &mut rng),
        insurance: shipping::insurance_disclaimer(&profile.name),
        order,
    }))
}

#[derive(Debug, Deserialize)]
pub struct ListOrdersParams {
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct OrdersResponse {
    pub orders: Vec<OrderRecord>,
}

/// Handle GET /v1/orders
pub async fn list_orders(
    State(state): State<AppState>,
    Query(params): Query<ListOrdersParams>,
) -> Result<Json<OrdersResponse>, AppError> {
    let limit = params.limit.unwrap_or(20).clamp(1, 100);
    let orders = state.store.recent_orders(limit).await?;
    Ok(Json(OrdersResponse { orders }))
}

#[derive(Debug, Serialize)]
pub struct PlanetStatsResponse {
    pub planets: Vec<PlanetStats>,
}

/// Handle GET /v1/stats/planets
pub async fn planet_stats(
    State(state): State<AppState>,
) -> Result<Json<PlanetStatsResponse>, AppError> {
    let planets = state.store.planet_stats().await?;
    Ok(Json(PlanetStatsResponse { planets }))
}
