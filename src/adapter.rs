//! AI pricing adapter.
//!
//! Translates a free-text product plus a planet profile into a
//! [`PricingQuote`] by asking the Gemini API for a structured JSON response.
//! Every failure mode — transport errors, timeouts, non-2xx, empty
//! candidates, unparsable or out-of-range replies — collapses into
//! [`AdapterOutcome::Unavailable`] so callers can degrade to the fallback
//! estimator instead of surfacing the failure.

use crate::catalog::PlanetProfile;
use crate::config::GeminiConfig;
use crate::error::AppError;
use crate::metrics;
use crate::models::gemini::GenerateContentRequest;
use crate::providers;
use crate::quote::PricingQuote;
use reqwest::Client;
use serde::Deserialize;
use std::time::Instant;

/// Result of one adapter call
#[derive(Debug)]
pub enum AdapterOutcome {
    /// The model returned a valid, in-range quote
    Parsed(PricingQuote),
    /// The model could not be used; the reason is for logs/metrics only
    Unavailable(String),
}

/// Wire shape the model is asked to produce
#[derive(Debug, Deserialize)]
struct RawPricing {
    base_price: f64,
    multiplier: f64,
    reasoning: String,
}

pub struct PricingAdapter {
    client: Client,
    config: GeminiConfig,
}

impl PricingAdapter {
    pub fn new(client: Client, config: GeminiConfig) -> Self {
        Self { client, config }
    }

    /// Ask the model to price a product for a destination.
    pub async fn request_quote(&self, product: &str, profile: &PlanetProfile) -> AdapterOutcome {
        if !self.config.enabled {
            return AdapterOutcome::Unavailable("Gemini provider is disabled".to_string());
        }

        let prompt = pricing_prompt(product, profile);
        let request = GenerateContentRequest::user_prompt(&prompt, Some("application/json"));

        let start = Instant::now();
        let response =
            providers::gemini::generate_content(&self.client, &self.config, request).await;
        metrics::record_ai_duration(start.elapsed());

        let response = match response {
            Ok(response) => response,
            Err(err) => {
                metrics::record_ai_failure(failure_kind(&err));
                return AdapterOutcome::Unavailable(err.to_string());
            }
        };

        let Some(text) = response.first_text() else {
            metrics::record_ai_failure("empty");
            return AdapterOutcome::Unavailable("model returned an empty response".to_string());
        };

        match self.parse_quote(text) {
            Ok(quote) => AdapterOutcome::Parsed(quote),
            Err(reason) => {
                metrics::record_ai_failure("parse");
                AdapterOutcome::Unavailable(reason)
            }
        }
    }

    /// Ask the model for a product description. `None` means the caller
    /// should substitute a templated fallback description.
    pub async fn request_description(&self, product: &str, planet: &str) -> Option<String> {
        if !self.config.enabled {
            return None;
        }

        let prompt = description_prompt(product, planet);
        let request = GenerateContentRequest::user_prompt(&prompt, None);

        let start = Instant::now();
        let response =
            providers::gemini::generate_content(&self.client, &self.config, request).await;
        metrics::record_ai_duration(start.elapsed());

        match response {
            Ok(response) => response.first_text().map(|text| text.trim().to_string()),
            Err(err) => {
                metrics::record_ai_failure(failure_kind(&err));
                tracing::warn!(
                    product = product,
                    planet = planet,
                    error = %err,
                    "AI description unavailable"
                );
                None
            }
        }
    }

    /// Parse and validate the model's JSON reply. All three fields must be
    /// present, base_price positive, multiplier within [1, max_multiplier].
    fn parse_quote(&self, text: &str) -> Result<PricingQuote, String> {
        let raw: RawPricing = serde_json::from_str(text)
            .map_err(|err| format!("unparsable pricing response: {}", err))?;

        if !raw.base_price.is_finite() || raw.base_price <= 0.0 {
            return Err(format!("model base price {} is out of range", raw.base_price));
        }
        if !raw.multiplier.is_finite()
            || raw.multiplier < 1.0
            || raw.multiplier > self.config.max_multiplier
        {
            return Err(format!(
                "model multiplier {} outside [1, {}]",
                raw.multiplier, self.config.max_multiplier
            ));
        }
        if raw.reasoning.trim().is_empty() {
            return Err("model reasoning is empty".to_string());
        }

        Ok(PricingQuote {
            base_price: raw.base_price,
            multiplier: raw.multiplier,
            reasoning: raw.reasoning,
        })
    }
}

fn failure_kind(err: &AppError) -> &'static str {
    match err {
        AppError::HttpRequest(err) if err.is_timeout() => "timeout",
        AppError::HttpRequest(_) => "transport",
        AppError::UpstreamError { .. } => "upstream",
        _ => "other",
    }
}

fn pricing_prompt(product: &str, profile: &PlanetProfile) -> String {
    format!(
        r#"You are a cosmic pricing expert for SpaceBuy, an interplanetary e-commerce platform.

Calculate a realistic price for "{product}" to be delivered to a planet with these characteristics:
- Distance from Earth: {distance} AU
- Gravity: {gravity}g (compared to Earth)
- Atmosphere: {atmosphere}
- Delivery Difficulty: {difficulty}/10

Consider factors like:
1. Base Earth retail price for this product
2. Shipping complexity based on distance and conditions
3. Special handling requirements for the atmosphere/gravity
4. Insurance costs for high-risk deliveries
5. Fuel costs proportional to distance and gravity

Respond with JSON in this exact format:
{{
    "base_price": [estimated Earth price in USD],
    "multiplier": [price multiplier for this planet, between 2x and 50x],
    "reasoning": "[funny but logical explanation for the pricing]"
}}

Make the reasoning humorous but scientifically plausible. Be creative!"#,
        product = product,
        distance = profile.distance_au,
        gravity = profile.gravity,
        atmosphere = profile.atmosphere,
        difficulty = profile.delivery_difficulty,
    )
}

fn description_prompt(product: &str, planet: &str) -> String {
    format!(
        r#"You are a creative copywriter for SpaceBuy, an interplanetary e-commerce platform.

Write a humorous but detailed product description for "{product}" that will be delivered to {planet}.

Include:
1. What the product is and its main features
2. How it's been adapted or modified for use on {planet}
3. Any special considerations or warnings for interplanetary use
4. A funny disclaimer or warning

Keep it engaging, funny, and about 3-4 sentences long.
Write in a marketing style but with space-themed humor."#,
        product = product,
        planet = planet,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn adapter() -> PricingAdapter {
        PricingAdapter::new(Client::new(), GeminiConfig::default())
    }

    #[test]
    fn test_parse_valid_quote() {
        let adapter = adapter();
        let quote = adapter
            .parse_quote(r#"{"base_price": 999.0, "multiplier": 12.5, "reasoning": "Mars tax."}"#)
            .unwrap();
        assert_eq!(quote.base_price, 999.0);
        assert_eq!(quote.multiplier, 12.5);
        assert_eq!(quote.reasoning, "Mars tax.");
    }

    #[test]
    fn test_parse_rejects_missing_field() {
        let adapter = adapter();
        assert!(adapter
            .parse_quote(r#"{"base_price": 999.0, "multiplier": 12.5}"#)
            .is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range_multiplier() {
        let adapter = adapter();
        assert!(adapter
            .parse_quote(r#"{"base_price": 10.0, "multiplier": 0.5, "reasoning": "cheap"}"#)
            .is_err());
        assert!(adapter
            .parse_quote(r#"{"base_price": 10.0, "multiplier": 900.0, "reasoning": "wild"}"#)
            .is_err());
    }

    #[test]
    fn test_parse_rejects_non_positive_base_price() {
        let adapter = adapter();
        assert!(adapter
            .parse_quote(r#"{"base_price": -1.0, "multiplier": 2.0, "reasoning": "odd"}"#)
            .is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let adapter = adapter();
        assert!(adapter.parse_quote("the price is lots of money").is_err());
    }

    #[tokio::test]
    async fn test_disabled_provider_is_unavailable() {
        let adapter = adapter();
        let catalog = Catalog::builtin();
        let mars = catalog.planet("Mars").unwrap();

        let outcome = adapter.request_quote("iPhone", mars).await;
        assert!(matches!(outcome, AdapterOutcome::Unavailable(_)));
        assert!(adapter.request_description("iPhone", "Mars").await.is_none());
    }

    #[test]
    fn test_pricing_prompt_includes_profile_fields() {
        let catalog = Catalog::builtin();
        let mars = catalog.planet("Mars").unwrap();
        let prompt = pricing_prompt("Instant Ramen", mars);
        assert!(prompt.contains("Instant Ramen"));
        assert!(prompt.contains("1.52 AU"));
        assert!(prompt.contains("0.38g"));
        assert!(prompt.contains("Thin (Mostly CO2)"));
        assert!(prompt.contains("7.2/10"));
    }
}
