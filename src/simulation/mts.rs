use serde::{Deserialize, Serialize};

use crate::data::history::mts_available;

/// Machine-tractor station rentals for the collective farms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MtsState {
    pub active: bool,
    pub tractor_units: u32,
    pub rental_cost_per_unit: f64,
    pub grain_boost_multiplier: f64,
    pub total_rental_spent: f64,
}

impl Default for MtsState {
    fn default() -> Self {
        Self {
            active: false,
            tractor_units: 5,
            rental_cost_per_unit: 10.0,
            grain_boost_multiplier: 1.3,
            total_rental_spent: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MtsOutcome {
    /// Outside the historical window.
    NotApplicable,
    InsufficientFunds { cost_required: f64 },
    Applied { cost: f64, grain_multiplier: f64 },
}

impl MtsOutcome {
    pub fn grain_multiplier(&self) -> f64 {
        match self {
            MtsOutcome::Applied {
                grain_multiplier, ..
            } => *grain_multiplier,
            _ => 1.0,
        }
    }

    pub fn cost(&self) -> f64 {
        match self {
            MtsOutcome::Applied { cost, .. } => *cost,
            _ => 0.0,
        }
    }
}

impl MtsState {
    pub fn rental_cost(&self) -> f64 {
        self.tractor_units as f64 * self.rental_cost_per_unit
    }

    pub fn tick(&mut self, year: i32, money_available: f64) -> MtsOutcome {
        self.active = mts_available(year);
        if !self.active {
            return MtsOutcome::NotApplicable;
        }
        let cost = self.rental_cost();
        if money_available < cost {
            return MtsOutcome::InsufficientFunds {
                cost_required: cost,
            };
        }
        self.total_rental_spent += cost;
        MtsOutcome::Applied {
            cost,
            grain_multiplier: self.grain_boost_multiplier,
        }
    }

    /// Settles an approved rental against the balance left after the same tick's currency
    /// reform. A rental the reformed balance cannot cover is withdrawn and its cost unbooked.
    pub fn settle_rental(&mut self, outcome: MtsOutcome, money_after_reform: f64) -> MtsOutcome {
        match outcome {
            MtsOutcome::Applied { cost, .. } if money_after_reform < cost => {
                self.total_rental_spent -= cost;
                MtsOutcome::InsufficientFunds {
                    cost_required: cost,
                }
            }
            other => other,
        }
    }
}
