use crate::catalog::SpaceAgency;
use crate::currency;
use crate::error::AppError;
use crate::handlers::AppState;
use crate::quote::QuoteSource;
use crate::shipping::{self, CarbonFootprint};
use axum::{extract::State, Json};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub product: String,
    pub planet: String,
    #[serde(default)]
    pub agency: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PriceDisplay {
    pub base_price: String,
    pub delivery_cost: String,
    pub total: String,
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub product: String,
    pub planet: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agency: Option<SpaceAgency>,
    pub source: QuoteSource,
    pub base_price_usd: f64,
    pub multiplier: f64,
    pub reasoning: String,
    pub delivery_cost_usd: f64,
    pub total_usd: f64,
    pub display: PriceDisplay,
    pub description: String,
    pub estimated_delivery: String,
    pub shipping_note: String,
    pub insurance: String,
    pub carbon: CarbonFootprint,
}

/// Handle POST /v1/quotes
///
/// Prices a free-text product for a destination planet. The AI path degrades
/// to the fallback estimator internally; callers only ever see InvalidInput
/// or NotFound errors.
pub async fn create_quote(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, AppError> {
    let product = request.product.trim();
    if product.is_empty() {
        return Err(AppError::InvalidInput("product name cannot be empty".to_string()));
    }

    let profile = state.catalog.planet(&request.planet)?.clone();
    let agency = match &request.agency {
        Some(name) => Some(state.catalog.agency(name)?.clone()),
        None => None,
    };

    tracing::info!(
        product = product,
        planet = %profile.name,
        "Handling quote request"
    );

    let mut rng = StdRng::from_entropy();
    let (quote, source) = state
        .quotes
        .quote_product(product, &profile, &mut rng)
        .await?;

    let delivery_cost = state
        .quotes
        .delivery_cost(quote.base_price, &profile, &mut rng)?;
    let total_usd = quote.base_price + delivery_cost;

    let description = state
        .quotes
        .describe_product(product, &profile.name, &mut rng)
        .await;

    let currency = &state.config.currency;
    let response = QuoteResponse {
        product: product.to_string(),
        planet: profile.name.clone(),
        agency,
        source,
        base_price_usd: quote.base_price,
        multiplier: quote.multiplier,
        reasoning: quote.reasoning,
        delivery_cost_usd: delivery_cost,
        total_usd,
        display: PriceDisplay {
            base_price: currency::format_price(quote.base_price, currency),
            delivery_cost: currency::format_price(delivery_cost, currency),
            total: currency::format_price(total_usd, currency),
        },
        description,
        estimated_delivery: shipping::estimated_delivery(&profile, &state.config.shipping, &mut rng),
        shipping_note: shipping::shipping_commentary(&profile.name, delivery_cost, &mut rng),
        insurance: shipping::insurance_disclaimer(&profile.name),
        carbon: shipping::carbon_footprint(&profile),
    };

    Ok(Json(response))
}
