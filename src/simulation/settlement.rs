use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

use crate::simulation::deliveries::DeliveryResult;
use crate::simulation::economy::EconomyTickResult;
use crate::simulation::resources::ResourceBundle;

/// Host-side settlement figures the economy reads and writes back to.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub population: u32,
    pub stores: ResourceBundle,
    /// Raw output for the coming tick, before extraction.
    pub production: ResourceBundle,
    /// Grain boost granted by this tick's MTS rental.
    #[serde(default = "default_grain_multiplier")]
    pub grain_multiplier: f64,
}

fn default_grain_multiplier() -> f64 {
    1.0
}

impl Default for Settlement {
    fn default() -> Self {
        Self {
            population: 0,
            stores: ResourceBundle::zero(),
            production: ResourceBundle::zero(),
            grain_multiplier: default_grain_multiplier(),
        }
    }
}

impl Settlement {
    /// Books deliveries, rental costs, heating fuel and currency reform into the stores.
    pub fn apply_tick_result(&mut self, result: &EconomyTickResult) {
        // The reform was computed on the balance as it stood before this tick. A rental is
        // only applied when that balance, reformed or not, covers it.
        let money = match &result.currency_reform {
            Some(reform) => reform.money_after,
            None => self.stores.money,
        };
        let delivered = result.fondy.actual();
        self.stores = self.stores.add(delivered);
        self.stores.money = money + delivered.money - result.mts.cost();
        self.grain_multiplier = result.mts.grain_multiplier();

        if result.heating.operational {
            let fuel = result.heating.consumption;
            let left = (self.stores.get(fuel.resource) - fuel.amount).max(0.0);
            self.stores.set(fuel.resource, left);
        }
    }

    /// Keeps what compulsory deliveries left of this tick's production.
    pub fn apply_delivery(&mut self, production: &ResourceBundle, delivery: &DeliveryResult) {
        self.stores.food += delivery.total_food_remaining;
        self.stores.vodka += production.vodka - delivery.vodka_taken;
        self.stores.money += production.money - delivery.money_taken;
        self.stores.steel += production.steel;
        self.stores.timber += production.timber;
    }
}
