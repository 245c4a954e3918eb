use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub gemini: GeminiConfig,
    pub pricing: PricingConfig,
    pub fallback: FallbackConfig,
    pub currency: CurrencyConfig,
    pub shipping: ShippingConfig,
    pub store: StoreConfig,
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GeminiConfig {
    pub enabled: bool,
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout_seconds: u64,
    /// Upper bound accepted for the model's price multiplier
    pub max_multiplier: f64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_key: String::new(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-2.5-flash".to_string(),
            timeout_seconds: 30,
            max_multiplier: 50.0,
        }
    }
}

/// One row of the atmosphere classification table. Rows are matched in
/// order; the first keyword found as a case-insensitive substring wins.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AtmosphereTier {
    pub keyword: String,
    pub multiplier: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Base scale constant applied to every delivery cost
    pub k_base: f64,
    /// Exponent on the distance factor
    pub distance_exponent: f64,
    /// Exponent on the gravity factor
    pub gravity_exponent: f64,
    /// Exponent on the difficulty factor
    pub difficulty_exponent: f64,
    /// Exponent on the atmosphere factor
    pub atmosphere_exponent: f64,
    pub atmosphere_tiers: Vec<AtmosphereTier>,
    /// Multiplier used when no atmosphere keyword matches
    pub default_atmosphere_multiplier: f64,
    /// Market volatility is drawn uniformly from this range
    pub volatility_min: f64,
    pub volatility_max: f64,
    /// Cost never drops below base_price * min_cost_ratio
    pub min_cost_ratio: f64,
    /// Difficulty at or above this marks an extreme destination
    pub extreme_difficulty: f64,
    pub extreme_multiplier: f64,
    /// Distance beyond which the outer-system surcharge kicks in (AU)
    pub outer_system_au: f64,
    /// The surcharge multiplies cost by distance * outer_system_rate
    pub outer_system_rate: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            k_base: 5.0,
            distance_exponent: 2.0,
            gravity_exponent: 1.5,
            difficulty_exponent: 2.0,
            atmosphere_exponent: 1.5,
            atmosphere_tiers: vec![
                AtmosphereTier {
                    keyword: "plasma".to_string(),
                    multiplier: 10.0,
                },
                AtmosphereTier {
                    keyword: "toxic".to_string(),
                    multiplier: 4.0,
                },
                AtmosphereTier {
                    keyword: "dense".to_string(),
                    multiplier: 3.0,
                },
                AtmosphereTier {
                    keyword: "icy".to_string(),
                    multiplier: 2.2,
                },
                AtmosphereTier {
                    keyword: "thin".to_string(),
                    multiplier: 1.8,
                },
                AtmosphereTier {
                    keyword: "none".to_string(),
                    multiplier: 2.5,
                },
            ],
            default_atmosphere_multiplier: 2.5,
            volatility_min: 2.0,
            volatility_max: 8.0,
            min_cost_ratio: 10.0,
            extreme_difficulty: 10.0,
            extreme_multiplier: 500.0,
            outer_system_au: 10.0,
            outer_system_rate: 2.0,
        }
    }
}

/// One row of the fallback estimator's product price table
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PriceHint {
    pub keywords: Vec<String>,
    pub base_price: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FallbackConfig {
    pub price_hints: Vec<PriceHint>,
    pub default_base_price: f64,
    /// Jitter applied to the fallback multiplier, drawn uniformly
    pub jitter_min: f64,
    pub jitter_max: f64,
    pub min_multiplier: f64,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        let hint = |keywords: &[&str], base_price: f64| PriceHint {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            base_price,
        };
        Self {
            price_hints: vec![
                hint(&["iphone", "phone", "smartphone"], 999.0),
                hint(&["tesla", "car", "vehicle"], 50_000.0),
                hint(&["coffee", "latte", "drink"], 5.0),
                hint(&["laptop", "computer", "macbook"], 1500.0),
                hint(&["pizza", "food"], 15.0),
                hint(&["watch", "rolex"], 5000.0),
            ],
            default_base_price: 50.0,
            jitter_min: 0.8,
            jitter_max: 1.2,
            min_multiplier: 2.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CurrencyConfig {
    /// USD to INR conversion rate used for display formatting
    pub usd_to_inr: f64,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self { usd_to_inr: 83.0 }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ShippingConfig {
    /// Average cargo spacecraft speed, km/s
    pub cargo_speed_km_s: f64,
    /// Order processing time added to the transit estimate, days
    pub processing_days_min: u32,
    pub processing_days_max: u32,
}

impl Default for ShippingConfig {
    fn default() -> Self {
        Self {
            cargo_speed_km_s: 20.0,
            processing_days_min: 30,
            processing_days_max: 90,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StoreConfig {
    pub database_url: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite:spacebuy.db?mode=rwc".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub enabled: bool,
    pub endpoint: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: "/metrics".to_string(),
        }
    }
}

/// Load configuration from a TOML file (optional) layered with
/// SPACEBUY__-prefixed environment variables.
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::from(path.to_path_buf()).required(false))
        .add_source(config::Environment::with_prefix("SPACEBUY").separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.gemini.enabled && cfg.gemini.api_key.is_empty() {
        anyhow::bail!("Gemini provider is enabled but no API key is configured");
    }
    if cfg.gemini.max_multiplier < 1.0 {
        anyhow::bail!("gemini.max_multiplier must be at least 1.0");
    }

    let pricing = &cfg.pricing;
    if pricing.k_base <= 0.0 {
        anyhow::bail!("pricing.k_base must be positive");
    }
    if pricing.volatility_min <= 0.0 || pricing.volatility_max < pricing.volatility_min {
        anyhow::bail!(
            "pricing volatility range [{}, {}] is invalid",
            pricing.volatility_min,
            pricing.volatility_max
        );
    }
    if pricing.min_cost_ratio <= 0.0 {
        anyhow::bail!("pricing.min_cost_ratio must be positive");
    }
    if pricing.extreme_multiplier < 1.0 {
        anyhow::bail!("pricing.extreme_multiplier must be at least 1.0");
    }
    if pricing.atmosphere_tiers.is_empty() {
        anyhow::bail!("pricing.atmosphere_tiers must not be empty");
    }
    for tier in &pricing.atmosphere_tiers {
        if tier.keyword.is_empty() {
            anyhow::bail!("atmosphere tier keyword cannot be empty");
        }
        if tier.multiplier <= 0.0 {
            anyhow::bail!("atmosphere tier '{}' multiplier must be positive", tier.keyword);
        }
    }
    if pricing.default_atmosphere_multiplier <= 0.0 {
        anyhow::bail!("pricing.default_atmosphere_multiplier must be positive");
    }

    let fallback = &cfg.fallback;
    if fallback.default_base_price <= 0.0 {
        anyhow::bail!("fallback.default_base_price must be positive");
    }
    if fallback.jitter_min <= 0.0 || fallback.jitter_max < fallback.jitter_min {
        anyhow::bail!(
            "fallback jitter range [{}, {}] is invalid",
            fallback.jitter_min,
            fallback.jitter_max
        );
    }
    for hint in &fallback.price_hints {
        if hint.keywords.is_empty() {
            anyhow::bail!("fallback price hint has no keywords");
        }
        if hint.base_price <= 0.0 {
            anyhow::bail!("fallback price hint base price must be positive");
        }
    }

    if cfg.currency.usd_to_inr <= 0.0 {
        anyhow::bail!("currency.usd_to_inr must be positive");
    }
    if cfg.shipping.cargo_speed_km_s <= 0.0 {
        anyhow::bail!("shipping.cargo_speed_km_s must be positive");
    }
    if cfg.shipping.processing_days_max < cfg.shipping.processing_days_min {
        anyhow::bail!("shipping processing days range is invalid");
    }
    if cfg.store.database_url.is_empty() {
        anyhow::bail!("store.database_url cannot be empty");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let cfg = Config::default();
        assert!(validate_config(&cfg).is_ok());
    }

    #[test]
    fn test_enabled_gemini_requires_api_key() {
        let mut cfg = Config::default();
        cfg.gemini.enabled = true;
        assert!(validate_config(&cfg).is_err());

        cfg.gemini.api_key = "test-key".to_string();
        assert!(validate_config(&cfg).is_ok());
    }

    #[test]
    fn test_invalid_volatility_range_rejected() {
        let mut cfg = Config::default();
        cfg.pricing.volatility_min = 8.0;
        cfg.pricing.volatility_max = 2.0;
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn test_empty_atmosphere_table_rejected() {
        let mut cfg = Config::default();
        cfg.pricing.atmosphere_tiers.clear();
        assert!(validate_config(&cfg).is_err());
    }
}
