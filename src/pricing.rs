//! Delivery-cost pricing engine.
//!
//! Pure computation over a product's base price and a planet profile; the one
//! source of randomness (market volatility) comes in through the caller's
//! `Rng` so tests can pin it with a seeded generator.

use crate::catalog::PlanetProfile;
use crate::config::PricingConfig;
use crate::error::AppError;
use rand::Rng;

/// Symmetric penalty for deviation from Earth gravity in either direction.
pub fn gravity_factor(gravity: f64) -> f64 {
    (gravity - 1.0).abs() + 1.0
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Classify an atmosphere description against the configured keyword
    /// table. Case-insensitive substring match, first matching row wins;
    /// unmatched text gets the default tier.
    pub fn atmosphere_factor(&self, atmosphere: &str) -> f64 {
        let atmosphere = atmosphere.to_lowercase();
        self.config
            .atmosphere_tiers
            .iter()
            .find(|tier| atmosphere.contains(&tier.keyword.to_lowercase()))
            .map(|tier| tier.multiplier)
            .unwrap_or(self.config.default_atmosphere_multiplier)
    }

    /// The deterministic component of the delivery cost: everything up to but
    /// not including the volatility draw, floor, and surcharges.
    pub fn raw_cost(&self, base_price: f64, profile: &PlanetProfile) -> Result<f64, AppError> {
        if !base_price.is_finite() || base_price <= 0.0 {
            return Err(AppError::InvalidInput(format!(
                "base price must be positive, got {}",
                base_price
            )));
        }
        profile.validate()?;

        let distance_factor = profile.distance_au.powf(1.5);
        let gravity_factor = gravity_factor(profile.gravity);
        let difficulty_factor = profile.delivery_difficulty / 10.0;
        let atmosphere_factor = self.atmosphere_factor(&profile.atmosphere);

        let cfg = &self.config;
        Ok(base_price
            * cfg.k_base
            * distance_factor.powf(cfg.distance_exponent)
            * gravity_factor.powf(cfg.gravity_exponent)
            * difficulty_factor.powf(cfg.difficulty_exponent)
            * atmosphere_factor.powf(cfg.atmosphere_exponent))
    }

    /// Compute the delivery cost for shipping a product to a planet.
    ///
    /// Returns the cost in the same currency unit as `base_price`, rounded to
    /// cents, never negative or NaN.
    pub fn delivery_cost(
        &self,
        base_price: f64,
        profile: &PlanetProfile,
        rng: &mut impl Rng,
    ) -> Result<f64, AppError> {
        let cfg = &self.config;
        let raw = self.raw_cost(base_price, profile)?;

        let volatility = rng.gen_range(cfg.volatility_min..=cfg.volatility_max);
        let mut cost = raw * volatility;

        // Even a Moon run costs something
        cost = cost.max(base_price * cfg.min_cost_ratio);

        if profile.stellar || profile.delivery_difficulty >= cfg.extreme_difficulty {
            cost *= cfg.extreme_multiplier;
        }

        if profile.distance_au > cfg.outer_system_au {
            cost *= profile.distance_au * cfg.outer_system_rate;
        }

        Ok(round_cents(cost))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn engine() -> PricingEngine {
        PricingEngine::new(PricingConfig::default())
    }

    #[test]
    fn test_gravity_factor_is_symmetric() {
        assert_eq!(gravity_factor(0.5), gravity_factor(1.5));
        assert_eq!(gravity_factor(0.1), gravity_factor(1.9));
        assert_eq!(gravity_factor(1.0), 1.0);
    }

    #[test]
    fn test_atmosphere_classification_case_insensitive() {
        let engine = engine();
        assert_eq!(
            engine.atmosphere_factor("TOXIC atmosphere"),
            engine.atmosphere_factor("toxic")
        );
        assert_eq!(engine.atmosphere_factor("Toxic (Sulfuric acid clouds)"), 4.0);
    }

    #[test]
    fn test_atmosphere_first_match_wins() {
        let engine = engine();
        // "plasma" precedes "toxic" in the reference table
        assert_eq!(engine.atmosphere_factor("toxic plasma soup"), 10.0);
    }

    #[test]
    fn test_unmatched_atmosphere_uses_default_tier() {
        let engine = engine();
        assert_eq!(
            engine.atmosphere_factor("breathable paradise"),
            engine.config().default_atmosphere_multiplier
        );
    }

    #[test]
    fn test_non_positive_base_price_rejected() {
        let engine = engine();
        let catalog = Catalog::builtin();
        let mars = catalog.planet("Mars").unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        for bad in [0.0, -5.0, f64::NAN] {
            let err = engine.delivery_cost(bad, mars, &mut rng).unwrap_err();
            assert!(matches!(err, AppError::InvalidInput(_)));
        }
    }

    #[test]
    fn test_zero_gravity_rejected() {
        let engine = engine();
        let mut profile = Catalog::builtin().planet("Mars").unwrap().clone();
        profile.gravity = 0.0;
        let mut rng = StdRng::seed_from_u64(1);
        assert!(engine.delivery_cost(100.0, &profile, &mut rng).is_err());
    }

    #[test]
    fn test_cost_rounded_to_cents() {
        let engine = engine();
        let catalog = Catalog::builtin();
        let mars = catalog.planet("Mars").unwrap();
        let mut rng = StdRng::seed_from_u64(99);

        let cost = engine.delivery_cost(123.45, mars, &mut rng).unwrap();
        assert_eq!(cost, round_cents(cost));
    }
}
