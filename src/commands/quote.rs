use anyhow::Result;
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use spacebuy::{catalog::Catalog, config, currency, quote::QuoteService, shipping};
use std::path::Path;
use std::sync::Arc;

/// Execute the quote command
///
/// Prices one product for one destination and prints the result. With
/// `--offline` the AI model is skipped and the fallback estimator prices
/// directly.
pub async fn execute(config_path: &Path, product: &str, planet: &str, offline: bool) -> Result<()> {
    let mut cfg = config::load_config(config_path)?;
    if offline {
        cfg.gemini.enabled = false;
    }

    let catalog = Catalog::builtin();
    let profile = catalog.planet(planet)?.clone();
    let service = QuoteService::new(Arc::new(cfg.clone()), reqwest::Client::new());

    let mut rng = StdRng::from_entropy();
    let (quote, source) = service.quote_product(product, &profile, &mut rng).await?;
    let delivery_cost = service.delivery_cost(quote.base_price, &profile, &mut rng)?;
    let total = quote.base_price + delivery_cost;

    println!();
    println!(
        "{}",
        format!("Quote: {} -> {}", product, profile.name).bold()
    );
    println!("  Source:            {}", source.as_str().cyan());
    println!(
        "  Base price:        {}",
        currency::format_price(quote.base_price, &cfg.currency).green()
    );
    println!("  Multiplier:        {}x", quote.multiplier);
    println!(
        "  Delivery cost:     {}",
        currency::format_price(delivery_cost, &cfg.currency).yellow()
    );
    println!(
        "  Total:             {}",
        currency::format_price(total, &cfg.currency).green().bold()
    );
    println!(
        "  Est. delivery:     {}",
        shipping::estimated_delivery(&profile, &cfg.shipping, &mut rng)
    );
    println!(
        "  Insurance:         {}",
        shipping::insurance_disclaimer(&profile.name).red()
    );
    println!();
    println!("  {}", quote.reasoning.italic());
    println!();

    Ok(())
}
