//! Quote types and the top-level quote operation.
//!
//! `QuoteService` composes the AI adapter, the fallback estimator, and the
//! pricing engine so callers always get a usable quote or an
//! `InvalidInput`/`NotFound` explanation — never a raw AI failure.

use crate::adapter::{AdapterOutcome, PricingAdapter};
use crate::catalog::PlanetProfile;
use crate::config::Config;
use crate::error::AppError;
use crate::fallback::FallbackEstimator;
use crate::metrics;
use crate::pricing::PricingEngine;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A price for one product on one planet. Produced once per request, never
/// mutated.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PricingQuote {
    pub base_price: f64,
    pub multiplier: f64,
    pub reasoning: String,
}

/// Where a quote came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteSource {
    /// Priced by the generative model
    Ai,
    /// Priced by the deterministic fallback estimator
    Fallback,
    /// Priced straight off the product catalog
    Catalog,
}

impl QuoteSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteSource::Ai => "ai",
            QuoteSource::Fallback => "fallback",
            QuoteSource::Catalog => "catalog",
        }
    }
}

pub struct QuoteService {
    adapter: PricingAdapter,
    fallback: FallbackEstimator,
    engine: PricingEngine,
}

impl QuoteService {
    pub fn new(config: Arc<Config>, http_client: reqwest::Client) -> Self {
        Self {
            adapter: PricingAdapter::new(http_client, config.gemini.clone()),
            fallback: FallbackEstimator::new(config.fallback.clone()),
            engine: PricingEngine::new(config.pricing.clone()),
        }
    }

    pub fn engine(&self) -> &PricingEngine {
        &self.engine
    }

    /// Price a free-text product for a destination.
    ///
    /// Delegates to the AI adapter; any adapter failure degrades to the
    /// fallback estimator. Only malformed input surfaces as an error.
    pub async fn quote_product(
        &self,
        product: &str,
        profile: &PlanetProfile,
        rng: &mut (impl Rng + Send),
    ) -> Result<(PricingQuote, QuoteSource), AppError> {
        profile.validate()?;

        match self.adapter.request_quote(product, profile).await {
            AdapterOutcome::Parsed(quote) => {
                metrics::record_quote(&profile.name, QuoteSource::Ai.as_str());
                Ok((quote, QuoteSource::Ai))
            }
            AdapterOutcome::Unavailable(reason) => {
                tracing::warn!(
                    product = product,
                    planet = %profile.name,
                    reason = %reason,
                    "AI pricing unavailable, using fallback estimator"
                );
                metrics::record_quote(&profile.name, QuoteSource::Fallback.as_str());
                let quote = self.fallback.estimate(product, profile, rng)?;
                Ok((quote, QuoteSource::Fallback))
            }
        }
    }

    /// Describe a product for a destination. Never fails: an unavailable
    /// model yields one of the templated fallback descriptions.
    pub async fn describe_product(
        &self,
        product: &str,
        planet: &str,
        rng: &mut (impl Rng + Send),
    ) -> String {
        match self.adapter.request_description(product, planet).await {
            Some(text) => text,
            None => self.fallback.fallback_description(product, planet, rng),
        }
    }

    /// Delivery cost for a base price and destination, per the pricing
    /// formula.
    pub fn delivery_cost(
        &self,
        base_price: f64,
        profile: &PlanetProfile,
        rng: &mut impl Rng,
    ) -> Result<f64, AppError> {
        self.engine.delivery_cost(base_price, profile, rng)
    }
}
