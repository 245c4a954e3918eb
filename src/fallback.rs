//! Deterministic-enough stand-in pricing for when the AI adapter is
//! unavailable.

use crate::catalog::PlanetProfile;
use crate::config::FallbackConfig;
use crate::error::AppError;
use crate::quote::PricingQuote;
use rand::seq::SliceRandom;
use rand::Rng;

pub struct FallbackEstimator {
    config: FallbackConfig,
}

impl FallbackEstimator {
    pub fn new(config: FallbackConfig) -> Self {
        Self { config }
    }

    /// Estimate a base price from product-name keywords. Case-insensitive
    /// substring match against the configured table, first matching row wins.
    pub fn classify_base_price(&self, product: &str) -> f64 {
        let product = product.to_lowercase();
        self.config
            .price_hints
            .iter()
            .find(|hint| {
                hint.keywords
                    .iter()
                    .any(|keyword| product.contains(&keyword.to_lowercase()))
            })
            .map(|hint| hint.base_price)
            .unwrap_or(self.config.default_base_price)
    }

    /// Produce a complete quote without the AI model. Fails only on a
    /// malformed planet profile.
    pub fn estimate(
        &self,
        product: &str,
        profile: &PlanetProfile,
        rng: &mut impl Rng,
    ) -> Result<PricingQuote, AppError> {
        profile.validate()?;

        let base_price = self.classify_base_price(product);

        let jitter = rng.gen_range(self.config.jitter_min..=self.config.jitter_max);
        let multiplier = (profile.delivery_difficulty * profile.distance_au * jitter)
            .max(self.config.min_multiplier);
        let multiplier = (multiplier * 10.0).round() / 10.0;

        let reasons = [
            format!(
                "Extreme shipping costs due to {} AU distance and {} atmosphere",
                profile.distance_au, profile.atmosphere
            ),
            format!(
                "Special packaging required for {}g gravity conditions",
                profile.gravity
            ),
            format!(
                "Insurance premiums skyrocketed due to {}/10 delivery difficulty rating",
                profile.delivery_difficulty
            ),
            "Fuel costs alone could buy a small country due to the journey to this hostile environment"
                .to_string(),
        ];
        // Slice is non-empty, choose cannot return None
        let reasoning = reasons
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| reasons[0].clone());

        Ok(PricingQuote {
            base_price,
            multiplier,
            reasoning,
        })
    }

    /// Templated product description for when the model has nothing to say.
    pub fn fallback_description(
        &self,
        product: &str,
        planet: &str,
        rng: &mut impl Rng,
    ) -> String {
        let descriptions = [
            format!(
                "The {product} has been specially modified for {planet} conditions. Features include \
                 radiation shielding, temperature regulation, and a built-in prayer function. Warning: \
                 May cause existential crisis when you realize how much you paid for shipping."
            ),
            format!(
                "Experience {product} like never before - on {planet}! This interplanetary edition \
                 includes cosmic dust protection and gravity-adjustment features. Side effects may \
                 include questioning your life choices and bankruptcy."
            ),
            format!(
                "Bringing you {product} across the vast emptiness of space to {planet}. Enhanced with \
                 space-grade materials and hope. Disclaimer: Product may arrive as cosmic dust, but at \
                 least you'll have a great story to tell."
            ),
        ];
        descriptions
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| descriptions[0].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::FallbackConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn estimator() -> FallbackEstimator {
        FallbackEstimator::new(FallbackConfig::default())
    }

    #[test]
    fn test_keyword_classification() {
        let estimator = estimator();
        assert_eq!(estimator.classify_base_price("iPhone 15 Pro Max"), 999.0);
        assert_eq!(estimator.classify_base_price("Tesla Model S Plaid"), 50_000.0);
        assert_eq!(estimator.classify_base_price("Starbucks Venti Latte"), 5.0);
        assert_eq!(estimator.classify_base_price("Rolex Submariner"), 5000.0);
    }

    #[test]
    fn test_unknown_product_gets_default_price() {
        let estimator = estimator();
        assert_eq!(
            estimator.classify_base_price("Quantum Rubber Duck"),
            FallbackConfig::default().default_base_price
        );
    }

    #[test]
    fn test_multiplier_floor() {
        let estimator = estimator();
        let catalog = Catalog::builtin();
        // Moon: difficulty 4.5 * distance 0.0026 is tiny, floor must hold
        let moon = catalog.planet("Moon").unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let quote = estimator.estimate("coffee", moon, &mut rng).unwrap();
        assert_eq!(quote.multiplier, 2.0);
    }

    #[test]
    fn test_deterministic_with_fixed_seed() {
        let estimator = estimator();
        let catalog = Catalog::builtin();
        let mars = catalog.planet("Mars").unwrap();

        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);
        let a = estimator.estimate("laptop", mars, &mut rng_a).unwrap();
        let b = estimator.estimate("laptop", mars, &mut rng_b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_always_returns_complete_quote() {
        let estimator = estimator();
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(11);

        for planet in catalog.planets() {
            let quote = estimator.estimate("mystery box", planet, &mut rng).unwrap();
            assert!(quote.base_price > 0.0);
            assert!(quote.multiplier >= 1.0);
            assert!(!quote.reasoning.is_empty());
        }
    }

    #[test]
    fn test_malformed_profile_is_invalid_input() {
        let estimator = estimator();
        let mut profile = Catalog::builtin().planet("Mars").unwrap().clone();
        profile.delivery_difficulty = f64::NAN;
        let mut rng = StdRng::seed_from_u64(5);
        assert!(matches!(
            estimator.estimate("radio", &profile, &mut rng),
            Err(AppError::InvalidInput(_))
        ));
    }
}
