use std::fmt;

use serde::{Deserialize, Serialize};

use crate::simulation::resources::ResourceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatingTier {
    /// Individual masonry stoves.
    Pechka,
    District,
    Crumbling,
}

impl Default for HeatingTier {
    fn default() -> Self {
        HeatingTier::Pechka
    }
}

impl fmt::Display for HeatingTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HeatingTier::Pechka => "pechka",
            HeatingTier::District => "district",
            HeatingTier::Crumbling => "crumbling",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatingConsumption {
    pub resource: ResourceKind,
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatingProfile {
    pub consumption: HeatingConsumption,
    pub capacity: u32,
    pub efficiency: f64,
    pub breakdown_chance: f64,
}

/// Population at which stoves give way to a district network.
pub const DISTRICT_POPULATION_THRESHOLD: u32 = 100;
/// Ticks without repair after which a district network starts crumbling.
pub const DISTRICT_TO_CRUMBLING_TICKS: u64 = 720;
/// Share of the population put at risk by a winter without heat.
pub const WINTER_RISK_FRACTION: f64 = 0.1;
pub const WINTER_MONTHS: [u8; 5] = [11, 12, 1, 2, 3];

impl HeatingTier {
    pub fn profile(self) -> HeatingProfile {
        match self {
            HeatingTier::Pechka => HeatingProfile {
                consumption: HeatingConsumption {
                    resource: ResourceKind::Timber,
                    amount: 2.0,
                },
                capacity: 150,
                efficiency: 0.6,
                breakdown_chance: 0.0,
            },
            HeatingTier::District => HeatingProfile {
                consumption: HeatingConsumption {
                    resource: ResourceKind::Timber,
                    amount: 5.0,
                },
                capacity: 1_000,
                efficiency: 0.9,
                breakdown_chance: 0.01,
            },
            HeatingTier::Crumbling => HeatingProfile {
                consumption: HeatingConsumption {
                    resource: ResourceKind::Timber,
                    amount: 8.0,
                },
                capacity: 600,
                efficiency: 0.5,
                breakdown_chance: 0.05,
            },
        }
    }
}

pub fn is_winter_month(month: u8) -> bool {
    WINTER_MONTHS.contains(&month)
}
