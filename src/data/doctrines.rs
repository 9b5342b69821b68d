use std::fmt;

use serde::{Deserialize, Serialize};

/// Extraction policy that sets how much of the settlement's production the state takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Doctrine {
    Revolutionary,
    Industrialization,
    Wartime,
    Reconstruction,
    Thaw,
    Freeze,
    Stagnation,
    Eternal,
}

impl Default for Doctrine {
    fn default() -> Self {
        Doctrine::Revolutionary
    }
}

impl Doctrine {
    pub const ALL: [Doctrine; 8] = [
        Doctrine::Revolutionary,
        Doctrine::Industrialization,
        Doctrine::Wartime,
        Doctrine::Reconstruction,
        Doctrine::Thaw,
        Doctrine::Freeze,
        Doctrine::Stagnation,
        Doctrine::Eternal,
    ];

    pub fn delivery_rates(self) -> DeliveryRates {
        match self {
            Doctrine::Revolutionary => DeliveryRates::new(0.40, 0.20, 0.30),
            Doctrine::Industrialization => DeliveryRates::new(0.45, 0.25, 0.35),
            Doctrine::Wartime => DeliveryRates::new(0.60, 0.30, 0.50),
            Doctrine::Reconstruction => DeliveryRates::new(0.50, 0.25, 0.40),
            Doctrine::Thaw => DeliveryRates::new(0.30, 0.20, 0.25),
            Doctrine::Freeze => DeliveryRates::new(0.45, 0.25, 0.35),
            Doctrine::Stagnation => DeliveryRates::new(0.35, 0.25, 0.30),
            Doctrine::Eternal => DeliveryRates::new(0.40, 0.20, 0.30),
        }
    }

    /// Only stagnation skims on top of the official rates.
    pub fn has_corruption(self) -> bool {
        matches!(self, Doctrine::Stagnation)
    }
}

impl fmt::Display for Doctrine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Doctrine::Revolutionary => "revolutionary",
            Doctrine::Industrialization => "industrialization",
            Doctrine::Wartime => "wartime",
            Doctrine::Reconstruction => "reconstruction",
            Doctrine::Thaw => "thaw",
            Doctrine::Freeze => "freeze",
            Doctrine::Stagnation => "stagnation",
            Doctrine::Eternal => "eternal",
        };
        write!(f, "{}", label)
    }
}

/// Fractions of production taken per channel, each within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRates {
    pub food: f64,
    pub vodka: f64,
    pub money: f64,
}

impl DeliveryRates {
    const fn new(food: f64, vodka: f64, money: f64) -> Self {
        Self { food, vodka, money }
    }
}

/// Bounds of the corruption surcharge drawn when stagnation becomes active.
pub const CORRUPTION_RATE_MIN: f64 = 0.05;
pub const CORRUPTION_RATE_MAX: f64 = 0.15;
