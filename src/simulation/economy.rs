use bevy_ecs::prelude::*;
use bevy_utils::tracing::{debug, info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::data::difficulty::Difficulty;
use crate::data::eras::Era;
use crate::simulation::blat::{BlatPurpose, BlatSpendOutcome, BlatState, DELIVERY_RELIABILITY_STEP};
use crate::simulation::currency::{CurrencyReformEvent, CurrencyReformLedger, CurrencyReformResult};
use crate::simulation::fondy::{FondyOutcome, FondyState};
use crate::simulation::heating::{HeatingResult, HeatingState};
use crate::simulation::mts::{MtsOutcome, MtsState};
use crate::simulation::quota::calculate_next_quota;
use crate::simulation::rations::{calculate_ration_demand, RationConfig, RationDemand};
use crate::simulation::resources::ResourceBundle;
use crate::simulation::stakhanovite::{check_stakhanovite, StakhanoviteEvent};
use crate::simulation::trudodni::{GridKey, TrudodniRecord};

/// Blat granted per propaganda point of a model-worker event.
pub const BLAT_PER_PROPAGANDA: f64 = 0.1;

/// A placed building as the host's entity world reports it.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildingSnapshot {
    pub key: GridKey,
    pub building_id: String,
    pub workers: u32,
}

/// Settlement state the host hands in each tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickContext {
    pub month: u8,
    /// Current stores; money funds MTS rentals and the heating resource must cover consumption.
    pub stores: ResourceBundle,
}

impl Default for TickContext {
    fn default() -> Self {
        Self {
            month: 6,
            stores: ResourceBundle::zero(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EconomyTickResult {
    pub rations_active: bool,
    pub trudodni_earned: f64,
    pub fondy: FondyOutcome,
    pub mts: MtsOutcome,
    pub heating: HeatingResult,
    pub currency_reform: Option<CurrencyReformResult>,
    pub stakhanovite: Option<StakhanoviteEvent>,
    pub blat_granted: f64,
    /// Present only while rationing is in force.
    pub ration_demand: Option<RationDemand>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrudodniSave {
    pub total_contributed: f64,
    pub per_building: Vec<(GridKey, f64)>,
    pub minimum_required: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomySaveData {
    pub era: Era,
    pub difficulty: Difficulty,
    pub trudodni: TrudodniSave,
    pub fondy: FondyState,
    pub blat: BlatState,
    pub rations: RationConfig,
    pub mts: MtsState,
    pub heating: HeatingState,
    pub currency_reforms: Vec<CurrencyReformEvent>,
}

/// Planned-economy orchestrator: owns every leaf ledger and sequences them once per tick.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct EconomySystem {
    era: Era,
    difficulty: Difficulty,
    trudodni: TrudodniRecord,
    fondy: FondyState,
    blat: BlatState,
    rations: RationConfig,
    mts: MtsState,
    heating: HeatingState,
    currency_reforms: CurrencyReformLedger,
}

impl EconomySystem {
    pub fn new(era: Era, difficulty: Difficulty) -> Self {
        let multipliers = difficulty.multipliers();
        Self {
            era,
            difficulty,
            trudodni: TrudodniRecord::new(multipliers.trudodni_minimum),
            fondy: FondyState::new(era),
            blat: BlatState::new(multipliers.starting_blat),
            rations: RationConfig::default(),
            mts: MtsState::default(),
            heating: HeatingState::default(),
            currency_reforms: CurrencyReformLedger::default(),
        }
    }

    pub fn era(&self) -> Era {
        self.era
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn get_trudodni(&self) -> &TrudodniRecord {
        &self.trudodni
    }

    pub fn get_fondy(&self) -> &FondyState {
        &self.fondy
    }

    pub fn get_blat(&self) -> &BlatState {
        &self.blat
    }

    pub fn get_rations(&self) -> &RationConfig {
        &self.rations
    }

    pub fn get_mts(&self) -> &MtsState {
        &self.mts
    }

    pub fn get_heating(&self) -> &HeatingState {
        &self.heating
    }

    pub fn get_currency_reforms(&self) -> &[CurrencyReformEvent] {
        &self.currency_reforms.reforms
    }

    pub fn set_era(&mut self, era: Era) {
        if era != self.era {
            info!("economy: era {} -> {}", self.era, era);
        }
        self.era = era;
        self.fondy.set_era(era);
    }

    pub fn record_trudodni(&mut self, key: GridKey, building_id: &str, workers: u32) -> f64 {
        self.trudodni.record(key, building_id, workers)
    }

    pub fn get_trudodni_ratio(&self) -> f64 {
        self.trudodni.ratio()
    }

    pub fn reset_trudodni(&mut self) {
        self.trudodni.reset();
    }

    pub fn grant_blat(&mut self, amount: f64) {
        self.blat.grant(amount);
    }

    /// Spends blat. An "improve delivery" favour also raises fondy reliability and an
    /// "expedite repair" favour repairs the heating network.
    pub fn spend_blat<R: Rng + ?Sized>(
        &mut self,
        amount: f64,
        purpose: BlatPurpose,
        rng: &mut R,
    ) -> BlatSpendOutcome {
        let mut outcome = self.blat.spend(amount, rng);
        if let BlatSpendOutcome::Spent {
            kgb_detected,
            ref mut delivery_reliability,
            ..
        } = outcome
        {
            match purpose {
                BlatPurpose::ImproveDelivery => {
                    let reliability = self.fondy.improve_reliability(DELIVERY_RELIABILITY_STEP);
                    *delivery_reliability = Some(reliability);
                }
                BlatPurpose::ExpediteRepair => {
                    info!("blat: heating repair expedited");
                    self.heating.repair();
                }
                BlatPurpose::Personal => {}
            }
            if kgb_detected {
                warn!("blat: spend of {:.1} ({:?}) noticed by the KGB", amount, purpose);
            }
        }
        outcome
    }

    pub fn repair_heating(&mut self) {
        self.heating.repair();
    }

    /// Next plan target under the active era and difficulty.
    pub fn escalate_quota(&self, current_target: f64, met: bool) -> f64 {
        calculate_next_quota(
            current_target,
            met,
            self.era.escalation_factor(),
            self.difficulty.multipliers().quota_factor,
        )
    }

    /// Runs one simulation step. Subsystems run in a fixed order so seeded replays match.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        total_ticks: u64,
        year: i32,
        population: u32,
        buildings: &[BuildingSnapshot],
        context: &TickContext,
        rng: &mut R,
    ) -> EconomyTickResult {
        if self.rations.update(year) {
            let change = if self.rations.active { "introduced" } else { "lifted" };
            info!("rations: {} in {}", change, year);
        }

        let trudodni_earned: f64 = buildings
            .iter()
            .map(|building| {
                self.trudodni
                    .record(building.key, &building.building_id, building.workers)
            })
            .sum();

        let fondy = self.fondy.process_delivery(total_ticks, rng);
        match &fondy {
            FondyOutcome::Delivered { actual, .. } => {
                debug!("fondy: delivery at tick {}: {:?}", total_ticks, actual);
            }
            FondyOutcome::NotDelivered { reason, .. } => {
                debug!("fondy: delivery failed at tick {}: {}", total_ticks, reason);
            }
            FondyOutcome::NotDue { .. } => {}
        }

        let mts = self.mts.tick(year, context.stores.money);

        let heating = self
            .heating
            .process(population, context.month, &context.stores, rng);
        if heating.tier_changed() {
            info!("heating: {} -> {}", heating.previous_tier, heating.tier);
        }
        if heating.broke_down {
            warn!("heating: {} network failed", heating.tier);
        }

        let currency_reform = self.currency_reforms.apply_pending(year, context.stores.money);
        if let Some(reform) = &currency_reform {
            info!(
                "currency reform '{}': {:.0} -> {:.0}",
                reform.label, reform.money_before, reform.money_after
            );
        }
        let mts = match &currency_reform {
            Some(reform) => {
                let settled = self.mts.settle_rental(mts, reform.money_after);
                if settled != mts {
                    debug!("mts: rental withdrawn, reformed balance {:.0}", reform.money_after);
                }
                settled
            }
            None => mts,
        };

        let building_ids: Vec<&str> = buildings
            .iter()
            .map(|building| building.building_id.as_str())
            .collect();
        let stakhanovite = check_stakhanovite(&building_ids, rng);
        let blat_granted = match &stakhanovite {
            Some(event) => {
                info!("{}", event.announcement);
                let granted = event.propaganda_value * BLAT_PER_PROPAGANDA;
                self.blat.grant(granted);
                granted
            }
            None => 0.0,
        };

        let ration_demand = self
            .rations
            .active
            .then(|| calculate_ration_demand(population, &self.rations));

        EconomyTickResult {
            rations_active: self.rations.active,
            trudodni_earned,
            fondy,
            mts,
            heating,
            currency_reform,
            stakhanovite,
            blat_granted,
            ration_demand,
        }
    }

    pub fn serialize(&self) -> EconomySaveData {
        EconomySaveData {
            era: self.era,
            difficulty: self.difficulty,
            trudodni: TrudodniSave {
                total_contributed: self.trudodni.total_contributed,
                per_building: self
                    .trudodni
                    .per_building
                    .iter()
                    .map(|(key, value)| (*key, *value))
                    .collect(),
                minimum_required: self.trudodni.minimum_required,
            },
            fondy: self.fondy.clone(),
            blat: self.blat,
            rations: self.rations.clone(),
            mts: self.mts,
            heating: self.heating.clone(),
            currency_reforms: self.currency_reforms.reforms.clone(),
        }
    }

    pub fn deserialize(save: &EconomySaveData) -> Self {
        Self {
            era: save.era,
            difficulty: save.difficulty,
            trudodni: TrudodniRecord {
                total_contributed: save.trudodni.total_contributed,
                per_building: save.trudodni.per_building.iter().copied().collect(),
                minimum_required: save.trudodni.minimum_required,
            },
            fondy: save.fondy.clone(),
            blat: save.blat,
            rations: save.rations.clone(),
            mts: save.mts,
            heating: save.heating.clone(),
            currency_reforms: CurrencyReformLedger {
                reforms: save.currency_reforms.clone(),
            },
        }
    }
}
