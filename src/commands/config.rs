use anyhow::Result;
use colored::Colorize;
use spacebuy::config::{self, Config};
use std::path::Path;
use tracing::info;

/// Execute the config show command
///
/// Displays the current configuration with secrets masked
pub fn show(config_path: &Path) -> Result<()> {
    println!("{}", "Loading configuration...".yellow());
    info!("Loading configuration for display");

    let cfg = config::load_config(config_path)?;
    let sanitized = sanitize_secrets(&cfg);

    println!("{}", "Current Configuration:".green().bold());
    println!();

    let toml_string = toml::to_string_pretty(&sanitized)?;
    println!("{}", toml_string);

    Ok(())
}

/// Execute the config validate command
pub fn validate(config_path: &Path) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());
    info!("Validating configuration file");

    let cfg = config::load_config(config_path)?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!(
        "  AI pricing: {}",
        if cfg.gemini.enabled {
            format!("enabled ({})", cfg.gemini.model)
        } else {
            "disabled (fallback estimator only)".to_string()
        }
    );
    println!("  Atmosphere tiers: {}", cfg.pricing.atmosphere_tiers.len());
    println!(
        "  Volatility range: [{}, {}]",
        cfg.pricing.volatility_min, cfg.pricing.volatility_max
    );
    println!("  Fallback price hints: {}", cfg.fallback.price_hints.len());
    println!("  Database: {}", cfg.store.database_url);

    Ok(())
}

/// Sanitize secrets in configuration for safe display
fn sanitize_secrets(cfg: &Config) -> Config {
    let mut sanitized = cfg.clone();
    sanitized.gemini.api_key = mask_api_key(&sanitized.gemini.api_key);
    sanitized
}

fn mask_api_key(key: &str) -> String {
    if key.is_empty() {
        return String::new();
    }
    if key.len() > 11 {
        format!("{}...{}", &key[..7], &key[key.len() - 4..])
    } else {
        "***".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_api_key() {
        assert_eq!(mask_api_key("AIzaSyD-1234567890abcdef"), "AIzaSyD...cdef");
        assert_eq!(mask_api_key("short"), "***");
        assert_eq!(mask_api_key(""), "");
    }
}
