//! Built-in product, planet, and space agency catalogs.
//!
//! The catalogs are immutable: built once at startup and passed explicitly to
//! whatever needs them. Lookups are by name, case-insensitive.

use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Physical attributes of a delivery destination
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlanetProfile {
    pub name: String,
    /// Distance from Earth in astronomical units
    pub distance_au: f64,
    /// Surface gravity relative to Earth
    pub gravity: f64,
    /// Free-text atmosphere description, classified by keyword
    pub atmosphere: String,
    /// Delivery difficulty rating in [0, 10]
    pub delivery_difficulty: f64,
    /// Marks stellar destinations (cost formula treats these as extreme)
    pub stellar: bool,
    pub population: u64,
    pub fun_fact: String,
}

impl PlanetProfile {
    /// Reject profiles the pricing formula cannot handle.
    pub fn validate(&self) -> Result<(), AppError> {
        if !self.distance_au.is_finite() || self.distance_au < 0.0 {
            return Err(AppError::InvalidInput(format!(
                "planet '{}' has invalid distance {}",
                self.name, self.distance_au
            )));
        }
        if !self.gravity.is_finite() || self.gravity <= 0.0 {
            return Err(AppError::InvalidInput(format!(
                "planet '{}' has invalid gravity {}",
                self.name, self.gravity
            )));
        }
        if !self.delivery_difficulty.is_finite()
            || !(0.0..=10.0).contains(&self.delivery_difficulty)
        {
            return Err(AppError::InvalidInput(format!(
                "planet '{}' has delivery difficulty {} outside [0, 10]",
                self.name, self.delivery_difficulty
            )));
        }
        Ok(())
    }
}

/// An Earth product available for interplanetary delivery
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Product {
    pub name: String,
    pub emoji: String,
    pub description: String,
    pub category: String,
    pub base_price: f64,
}

/// A delivery service provider
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpaceAgency {
    pub name: String,
    pub motto: String,
    pub reliability: String,
    pub delivery_time: String,
    pub specialty: String,
}

/// Immutable catalog of products, planets, and agencies
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    planets: Vec<PlanetProfile>,
    agencies: Vec<SpaceAgency>,
}

impl Catalog {
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn planets(&self) -> &[PlanetProfile] {
        &self.planets
    }

    pub fn agencies(&self) -> &[SpaceAgency] {
        &self.agencies
    }

    pub fn planet(&self, name: &str) -> Result<&PlanetProfile, AppError> {
        self.planets
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| AppError::NotFound(format!("unsupported destination '{}'", name)))
    }

    pub fn product(&self, name: &str) -> Option<&Product> {
        self.products
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    pub fn agency(&self, name: &str) -> Result<&SpaceAgency, AppError> {
        self.agencies
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| AppError::NotFound(format!("unknown space agency '{}'", name)))
    }

    /// The built-in SpaceBuy catalog.
    pub fn builtin() -> Self {
        let product = |name: &str, emoji: &str, description: &str, category: &str, base_price| {
            Product {
                name: name.to_string(),
                emoji: emoji.to_string(),
                description: description.to_string(),
                category: category.to_string(),
                base_price,
            }
        };

        let planet = |name: &str,
                      distance_au: f64,
                      gravity: f64,
                      atmosphere: &str,
                      delivery_difficulty: f64,
                      stellar: bool,
                      population: u64,
                      fun_fact: &str| PlanetProfile {
            name: name.to_string(),
            distance_au,
            gravity,
            atmosphere: atmosphere.to_string(),
            delivery_difficulty,
            stellar,
            population,
            fun_fact: fun_fact.to_string(),
        };

        let agency = |name: &str, motto: &str, reliability: &str, delivery_time: &str, specialty: &str| {
            SpaceAgency {
                name: name.to_string(),
                motto: motto.to_string(),
                reliability: reliability.to_string(),
                delivery_time: delivery_time.to_string(),
                specialty: specialty.to_string(),
            }
        };

        Self {
            products: vec![
                product(
                    "iPhone 15 Pro Max",
                    "📱",
                    "Latest smartphone with space-grade aluminum. Warning: May not work in vacuum of space.",
                    "Electronics",
                    1199.99,
                ),
                product(
                    "Tesla Model S Plaid",
                    "🚗",
                    "Electric vehicle adapted for planetary surfaces. Includes magnetic wheels for low-gravity environments.",
                    "Vehicles",
                    89_990.00,
                ),
                product(
                    "Starbucks Venti Latte",
                    "☕",
                    "Premium coffee beverage. May freeze instantly in space. Warming systems sold separately.",
                    "Food & Beverages",
                    5.95,
                ),
                product(
                    "Nintendo Switch OLED",
                    "🎮",
                    "Portable gaming console. Perfect for long space journeys. Battery life: 3 hours or 3 light-years.",
                    "Electronics",
                    349.99,
                ),
                product(
                    "MacBook Pro M3",
                    "💻",
                    "High-performance laptop with space-resistant screen. Cosmic ray damage not covered by warranty.",
                    "Electronics",
                    2399.99,
                ),
                product(
                    "Air Jordan 4 Retro",
                    "👟",
                    "Classic basketball shoes. Anti-gravity soles available for Jupiter deliveries at extra cost.",
                    "Fashion",
                    200.00,
                ),
                product(
                    "Dominos Large Pizza",
                    "🍕",
                    "Hot and fresh pizza. Delivered hot or your money back! (Heat retention in space not guaranteed)",
                    "Food & Beverages",
                    15.99,
                ),
                product(
                    "IKEA Billy Bookshelf",
                    "📚",
                    "Self-assembly furniture. Assembly instructions translated into 47 alien languages. Allen key included.",
                    "Home & Garden",
                    49.99,
                ),
                product(
                    "Rolex Submariner",
                    "⌚",
                    "Luxury timepiece. Synchronized with galactic standard time. Works underwater and in vacuum.",
                    "Fashion",
                    8550.00,
                ),
                product(
                    "Amazon Echo Dot",
                    "🔊",
                    "Smart speaker with Alexa. Now understands 12 alien languages. \"Alexa, what's the weather on Mars?\"",
                    "Electronics",
                    49.99,
                ),
                product(
                    "Instant Ramen",
                    "🍜",
                    "Quick and easy meal. Just add hot water (bring your own heat source to space).",
                    "Food & Beverages",
                    0.99,
                ),
                product(
                    "Dyson V15 Vacuum",
                    "🌪️",
                    "Powerful vacuum cleaner. Ironically useless in the vacuum of space. Great for spaceship interiors.",
                    "Home & Garden",
                    749.99,
                ),
            ],
            planets: vec![
                planet(
                    "Mercury",
                    0.39,
                    0.38,
                    "None (Extreme temperatures)",
                    9.5,
                    false,
                    0,
                    "Hot enough to melt lead!",
                ),
                planet(
                    "Venus",
                    0.72,
                    0.90,
                    "Toxic (Sulfuric acid clouds)",
                    9.8,
                    false,
                    0,
                    "Surface pressure could crush a submarine!",
                ),
                planet(
                    "Mars",
                    1.52,
                    0.38,
                    "Thin (Mostly CO2)",
                    7.2,
                    false,
                    7,
                    "Home to the first interplanetary Starbucks!",
                ),
                planet(
                    "Jupiter",
                    5.20,
                    2.36,
                    "Dense (Crushing gas giant)",
                    9.9,
                    false,
                    0,
                    "Packages delivered to floating platforms only!",
                ),
                planet(
                    "Saturn",
                    9.58,
                    0.92,
                    "Dense (Beautiful but deadly)",
                    9.7,
                    false,
                    0,
                    "Ring delivery available for small packages!",
                ),
                planet(
                    "Uranus",
                    19.22,
                    0.89,
                    "Icy (Sideways rotation)",
                    8.8,
                    false,
                    0,
                    "The planet that makes everyone giggle!",
                ),
                planet(
                    "Neptune",
                    30.05,
                    1.13,
                    "Icy (Supersonic winds)",
                    9.1,
                    false,
                    0,
                    "Winds faster than the speed of sound!",
                ),
                planet(
                    "Pluto",
                    39.48,
                    0.07,
                    "Thin (Very cold)",
                    6.5,
                    false,
                    1,
                    "Still a planet in our hearts!",
                ),
                planet(
                    "Sun",
                    0.00,
                    27.01,
                    "Plasma (Nuclear fusion)",
                    10.0,
                    true,
                    0,
                    "Our delivery record: 0% success rate, 100% vaporization rate!",
                ),
                planet(
                    "Moon",
                    0.0026,
                    0.17,
                    "None (But great views)",
                    4.5,
                    false,
                    2,
                    "Cheese reserves confirmed to be fake!",
                ),
            ],
            agencies: vec![
                agency(
                    "SpaceX Mars Division",
                    "Making Mars Great Again, One Package at a Time",
                    "73% (When Elon tweets positively)",
                    "6-9 months (Earth-Mars only)",
                    "Reusable rockets, unreusable packages",
                ),
                agency(
                    "NASA Planetary Logistics",
                    "We Put the Science in Delivery Science",
                    "94% (But very expensive)",
                    "2-5 years (Includes scientific study)",
                    "Peer-reviewed delivery receipts",
                ),
                agency(
                    "Blue Origin Express",
                    "Gradatim Ferociter (Step by Step, Package by Package)",
                    "45% (Still figuring it out)",
                    "8-12 years (Under development)",
                    "Space tourism for your packages",
                ),
                agency(
                    "Virgin Galactic Courier",
                    "Your Package's Space Adventure Awaits",
                    "67% (Weather dependent)",
                    "3-6 months (Suborbital only)",
                    "Luxury space experience for premium items",
                ),
                agency(
                    "Roscosmos Reliable",
                    "In Soviet Space, Package Delivers You",
                    "89% (Built like a tank)",
                    "4-8 months (Via Soyuz truck)",
                    "Vodka-resistant packaging",
                ),
                agency(
                    "JAXA Precision Delivery",
                    "Precision, Politeness, and Planetary Packages",
                    "97% (Extremely methodical)",
                    "1-3 years (Worth the wait)",
                    "Origami-folded packages",
                ),
                agency(
                    "ESA European Express",
                    "United in Delivery, Diverse in Delays",
                    "82% (Bureaucracy slows us down)",
                    "6 months - 2 years (Committee dependent)",
                    "Multi-language delivery confirmations",
                ),
                agency(
                    "CNSA Cosmic Courier",
                    "The Great Wall of Space Delivery",
                    "76% (Rapidly improving)",
                    "3-7 months (Moon deliveries preferred)",
                    "Bulk orders and space station construction",
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planet_lookup_is_case_insensitive() {
        let catalog = Catalog::builtin();
        let mars = catalog.planet("mars").unwrap();
        assert_eq!(mars.name, "Mars");
        assert_eq!(mars.distance_au, 1.52);
    }

    #[test]
    fn test_unknown_planet_is_not_found() {
        let catalog = Catalog::builtin();
        let err = catalog.planet("Krypton").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_sun_is_stellar_and_max_difficulty() {
        let catalog = Catalog::builtin();
        let sun = catalog.planet("Sun").unwrap();
        assert!(sun.stellar);
        assert_eq!(sun.delivery_difficulty, 10.0);
    }

    #[test]
    fn test_builtin_profiles_are_valid() {
        let catalog = Catalog::builtin();
        for planet in catalog.planets() {
            planet.validate().unwrap();
        }
    }

    #[test]
    fn test_agency_lookup() {
        let catalog = Catalog::builtin();
        assert!(catalog.agency("NASA Planetary Logistics").is_ok());
        assert!(matches!(
            catalog.agency("Acme Rockets"),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_invalid_profile_rejected() {
        let mut profile = Catalog::builtin().planet("Mars").unwrap().clone();
        profile.gravity = 0.0;
        assert!(matches!(
            profile.validate(),
            Err(AppError::InvalidInput(_))
        ));

        let mut profile = Catalog::builtin().planet("Mars").unwrap().clone();
        profile.delivery_difficulty = 11.0;
        assert!(matches!(
            profile.validate(),
            Err(AppError::InvalidInput(_))
        ));
    }
}
