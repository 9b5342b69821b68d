use serde::{Deserialize, Serialize};

use crate::data::history::{RATION_CRISIS_WINDOWS, RATION_OPEN_ENDED_FROM};

/// Daily per-citizen demand for one ration tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RationRate {
    pub food: f64,
    pub vodka: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RationTable {
    pub worker: RationRate,
    pub employee: RationRate,
    pub dependent: RationRate,
    pub child: RationRate,
}

/// Population shares of the worker, employee, dependent and child tiers.
pub const TIER_SHARES: [f64; 4] = [0.5, 0.2, 0.2, 0.1];

impl Default for RationTable {
    fn default() -> Self {
        Self {
            worker: RationRate {
                food: 0.8,
                vodka: 0.1,
            },
            employee: RationRate {
                food: 0.6,
                vodka: 0.05,
            },
            dependent: RationRate {
                food: 0.4,
                vodka: 0.0,
            },
            child: RationRate {
                food: 0.3,
                vodka: 0.0,
            },
        }
    }
}

impl RationTable {
    fn tiers(&self) -> [RationRate; 4] {
        [self.worker, self.employee, self.dependent, self.child]
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RationConfig {
    pub active: bool,
    pub rations: RationTable,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RationDemand {
    pub food: f64,
    pub vodka: f64,
}

impl RationConfig {
    /// Refreshes the activation flag and reports whether it changed.
    pub fn update(&mut self, year: i32) -> bool {
        let active = should_rations_be_active(year);
        let changed = active != self.active;
        self.active = active;
        changed
    }
}

pub fn should_rations_be_active(year: i32) -> bool {
    if year >= RATION_OPEN_ENDED_FROM {
        return true;
    }
    RATION_CRISIS_WINDOWS
        .iter()
        .any(|(first, last)| year >= *first && year <= *last)
}

pub fn calculate_ration_demand(population: u32, config: &RationConfig) -> RationDemand {
    let population = population as f64;
    let mut demand = RationDemand::default();
    for (share, rate) in TIER_SHARES.iter().zip(config.rations.tiers()) {
        let tier_population = population * share;
        demand.food += tier_population * rate.food;
        demand.vodka += tier_population * rate.vodka;
    }
    demand
}
