//! Shipping extras: delivery-time estimates, tracking numbers, cost
//! commentary, carbon accounting, and insurance disclaimers.

use crate::catalog::PlanetProfile;
use crate::config::ShippingConfig;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

const AU_KM: f64 = 149_597_870.7;

const TRACKING_PREFIXES: &[&str] = &["SPACE", "COSMIC", "STELLAR", "GALAX", "ORBIT", "NEBULA"];

/// Estimate delivery time from distance at cargo-spacecraft speed, doubled
/// for round-trip planning, plus randomized processing days.
pub fn estimated_delivery(
    profile: &PlanetProfile,
    config: &ShippingConfig,
    rng: &mut impl Rng,
) -> String {
    let km = profile.distance_au * AU_KM;
    let travel_seconds = km / config.cargo_speed_km_s;
    let travel_days = travel_seconds / (24.0 * 3600.0);

    let processing_days =
        rng.gen_range(config.processing_days_min..=config.processing_days_max) as f64;
    let total_days = travel_days * 2.0 + processing_days;

    if total_days < 365.0 {
        format!("{} days", total_days as u64)
    } else {
        let years = total_days / 365.0;
        if years < 2.0 {
            format!("{:.1} year", years)
        } else {
            format!("{:.1} years", years)
        }
    }
}

/// Space-themed tracking number: prefix plus 8 random digits.
pub fn tracking_number(rng: &mut impl Rng) -> String {
    let prefix = TRACKING_PREFIXES
        .choose(rng)
        .copied()
        .unwrap_or(TRACKING_PREFIXES[0]);
    let digits: String = (0..8).map(|_| rng.gen_range(0..10).to_string()).collect();
    format!("{}-{}", prefix, digits)
}

/// Cost-tiered shipping commentary.
pub fn shipping_commentary(planet: &str, delivery_cost_usd: f64, rng: &mut impl Rng) -> String {
    let messages: Vec<String> = if delivery_cost_usd > 1_000_000.0 {
        vec![
            format!("Shipping to {}: More expensive than a small nation's GDP!", planet),
            format!("Fun fact: You could buy a private island instead of shipping to {}!", planet),
            format!("Your bank called - they want to discuss your {} shopping addiction.", planet),
            "Congratulations! You've unlocked the 'Cosmic Spender' achievement!".to_string(),
        ]
    } else if delivery_cost_usd > 100_000.0 {
        vec![
            format!("Shipping to {}: Costs more than most luxury cars in India!", planet),
            format!("Investment tip: SpaceBuy stock goes up every time someone ships to {}!", planet),
            "You could fund multiple engineering degrees for this shipping cost!".to_string(),
            "Alternatively, you could buy a nice flat in Mumbai for this price!".to_string(),
        ]
    } else if delivery_cost_usd > 10_000.0 {
        vec![
            format!("Shipping to {}: Expensive enough to make you question your priorities!", planet),
            "For this price, we could hire a Bollywood dance troupe to deliver your package!".to_string(),
            "You could buy 10 iPhones instead of paying this shipping cost!".to_string(),
            "We could probably auto-rickshaw your package around India 1000 times for this price!".to_string(),
        ]
    } else {
        vec![
            format!("Shipping to {}: Surprisingly reasonable for interplanetary delivery!", planet),
            "Great news! This shipping cost won't completely bankrupt you!".to_string(),
            format!("Pro tip: {} is practically next door in cosmic terms!", planet),
            "Budget-friendly space delivery - your wallet will thank you!".to_string(),
        ]
    };

    messages
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| messages[0].clone())
}

/// The absurdly high carbon footprint of interplanetary delivery.
#[derive(Debug, Clone, Serialize)]
pub struct CarbonFootprint {
    pub co2_tons: f64,
    pub trees_needed: u64,
    pub comparison: String,
}

pub fn carbon_footprint(profile: &PlanetProfile) -> CarbonFootprint {
    let fuel_consumption = profile.distance_au * 1_000_000.0;
    let mut co2_tons = fuel_consumption * 3.14;

    // Atmospheric entry/exit doubles emissions
    if !profile.atmosphere.to_lowercase().contains("none") {
        co2_tons *= 2.0;
    }

    let co2_tons = (co2_tons * 100.0).round() / 100.0;
    CarbonFootprint {
        co2_tons,
        trees_needed: (co2_tons * 16.0).round() as u64,
        comparison: format!(
            "Equivalent to driving around Earth {} times",
            (co2_tons / 4.6).round() as u64
        ),
    }
}

/// Per-planet insurance disclaimers.
pub fn insurance_disclaimer(planet: &str) -> String {
    match planet.to_lowercase().as_str() {
        "sun" => "EXTREME RISK: 100% chance of package vaporization. Insurance void due to laws of physics.".to_string(),
        "venus" => "HIGH RISK: Sulfuric acid damage not covered. Package may arrive as toxic sludge.".to_string(),
        "jupiter" => "MODERATE RISK: Crushing atmospheric pressure may compress package to atomic level.".to_string(),
        "mercury" => "EXTREME RISK: Thermal shock may cause package to simultaneously melt and freeze.".to_string(),
        "mars" => "LOW RISK: Dust storms may delay delivery by several decades.".to_string(),
        "saturn" => "MODERATE RISK: Package may get stuck in rings. Retrieval missions extra.".to_string(),
        "uranus" => "MODERATE RISK: Methane atmosphere may cause unpleasant odors upon opening.".to_string(),
        "neptune" => "HIGH RISK: Supersonic winds may scatter package across multiple dimensions.".to_string(),
        "pluto" => "LOW RISK: Package may be perfectly preserved in ice for millions of years.".to_string(),
        "moon" => "VERY LOW RISK: Lowest insurance rates in the solar system!".to_string(),
        _ => format!("UNKNOWN RISK: {} delivery insurance calculated by space lawyers.", planet),
    }
}
