//! Currency display formatting.
//!
//! Prices are computed in USD and displayed in INR with tiered bucketing
//! (thousands, lakhs, crores) and escalating commentary for the truly
//! astronomical ones.

use crate::config::CurrencyConfig;

/// Format a USD price as a localized INR display string.
pub fn format_price(usd: f64, config: &CurrencyConfig) -> String {
    let inr = usd * config.usd_to_inr;

    if inr >= 100_000_000_000.0 {
        format!("₹{} (BANKRUPTCY LEVEL)", with_commas(inr))
    } else if inr >= 10_000_000_000.0 {
        format!("₹{:.1} Cr (MORTGAGE YOUR HOUSE)", inr / 10_000_000.0)
    } else if inr >= 100_000_000.0 {
        format!("₹{:.1} Cr (SELL YOUR CAR)", inr / 10_000_000.0)
    } else if inr >= 10_000_000.0 {
        format!("₹{:.2} Cr (MAX OUT CREDIT CARDS)", inr / 10_000_000.0)
    } else if inr >= 100_000.0 {
        format!("₹{:.1} L (EXPENSIVE)", inr / 100_000.0)
    } else if inr >= 1_000.0 {
        format!("₹{}", with_commas(inr))
    } else {
        format!("₹{:.2}", inr)
    }
}

/// Integer part with thousands separators.
fn with_commas(value: f64) -> String {
    let digits = (value.round() as i128).to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
