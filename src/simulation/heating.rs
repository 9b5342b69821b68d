use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::data::heating::{
    is_winter_month, HeatingConsumption, HeatingTier, DISTRICT_POPULATION_THRESHOLD,
    DISTRICT_TO_CRUMBLING_TICKS, WINTER_RISK_FRACTION,
};
use crate::simulation::resources::ResourceBundle;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatingState {
    pub tier: HeatingTier,
    pub consumption: HeatingConsumption,
    pub capacity_served: u32,
    pub efficiency: f64,
    pub ticks_since_repair: u64,
    pub failing: bool,
}

impl Default for HeatingState {
    fn default() -> Self {
        let profile = HeatingTier::Pechka.profile();
        Self {
            tier: HeatingTier::Pechka,
            consumption: profile.consumption,
            capacity_served: 0,
            efficiency: profile.efficiency,
            ticks_since_repair: 0,
            failing: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeatingResult {
    pub tier: HeatingTier,
    pub previous_tier: HeatingTier,
    pub operational: bool,
    pub consumption: HeatingConsumption,
    pub efficiency: f64,
    pub capacity_served: u32,
    pub population_at_risk: u32,
    /// True when this tick's breakdown roll put the network into failure.
    pub broke_down: bool,
}

impl HeatingResult {
    pub fn tier_changed(&self) -> bool {
        self.tier != self.previous_tier
    }
}

/// Next tier for the network. Forward-only apart from the small-settlement reset to stoves.
pub fn determine_heating_tier(
    population: u32,
    ticks_since_repair: u64,
    current_tier: HeatingTier,
) -> HeatingTier {
    if population < DISTRICT_POPULATION_THRESHOLD {
        return HeatingTier::Pechka;
    }
    match current_tier {
        HeatingTier::Pechka => HeatingTier::District,
        HeatingTier::District if ticks_since_repair >= DISTRICT_TO_CRUMBLING_TICKS => {
            HeatingTier::Crumbling
        }
        tier => tier,
    }
}

impl HeatingState {
    pub fn process<R: Rng + ?Sized>(
        &mut self,
        population: u32,
        month: u8,
        stores: &ResourceBundle,
        rng: &mut R,
    ) -> HeatingResult {
        let previous_tier = self.tier;
        if self.tier != HeatingTier::Pechka {
            self.ticks_since_repair += 1;
        }
        self.tier = determine_heating_tier(population, self.ticks_since_repair, self.tier);
        let profile = self.tier.profile();
        self.consumption = profile.consumption;
        self.capacity_served = population.min(profile.capacity);

        let mut broke_down = false;
        if profile.breakdown_chance > 0.0 {
            let roll: f64 = rng.random();
            if roll < profile.breakdown_chance && !self.failing {
                self.failing = true;
                broke_down = true;
            }
        }

        let fuel_available = stores.get(profile.consumption.resource) >= profile.consumption.amount;
        let operational = fuel_available && !self.failing;
        self.efficiency = if operational { profile.efficiency } else { 0.0 };

        let population_at_risk = if is_winter_month(month) && !operational {
            (population as f64 * WINTER_RISK_FRACTION).ceil() as u32
        } else {
            0
        };

        HeatingResult {
            tier: self.tier,
            previous_tier,
            operational,
            consumption: self.consumption,
            efficiency: self.efficiency,
            capacity_served: self.capacity_served,
            population_at_risk,
            broke_down,
        }
    }

    /// Clears failure and the wear counter; a crumbling network is rebuilt to district grade.
    pub fn repair(&mut self) {
        self.failing = false;
        self.ticks_since_repair = 0;
        if self.tier == HeatingTier::Crumbling {
            self.tier = HeatingTier::District;
            self.consumption = self.tier.profile().consumption;
        }
    }
}
