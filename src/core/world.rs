use bevy_ecs::prelude::*;

use crate::components::world::{Building, Position, Workers};
use crate::core::ecs::{create_schedule, create_world};
use crate::core::rng::EconomyRng;
use crate::core::serialization::{
    apply_state_to_world, decode_save, encode_save, extract_state_from_world, SaveError, SaveState,
};
use crate::data::config::EconomyConfig;
use crate::simulation::blat::{BlatPurpose, BlatSpendOutcome};
use crate::simulation::deliveries::{CompulsoryDeliveries, DeliveryResult};
use crate::simulation::economy::{EconomySystem, EconomyTickResult};
use crate::simulation::settlement::Settlement;
use crate::simulation::time::EconomyClock;
use crate::systems::economy::{EconomyEventLog, LastDeliveryReport, LastEconomyTick};

/// Data snapshot returned to the UI layer after each tick.
#[derive(Debug, Clone)]
pub struct TickReport {
    pub time_str: String,
    pub economy: Option<EconomyTickResult>,
    pub deliveries: Option<DeliveryResult>,
    pub events: Vec<String>,
}

/// Wrapper around the ECS world and schedule that drives the economy one tick at a time.
pub struct EconomyHost {
    world: World,
    schedule: Schedule,
    seed: u64,
}

impl EconomyHost {
    pub fn new(config: &EconomyConfig) -> Self {
        Self {
            world: create_world(config),
            schedule: create_schedule(),
            seed: config.seed,
        }
    }

    pub fn spawn_building(&mut self, x: i32, y: i32, building_id: &str, workers: u32) -> Entity {
        self.world
            .spawn((
                Position { x, y },
                Building(building_id.to_string()),
                Workers(workers),
            ))
            .id()
    }

    pub fn set_workers(&mut self, building: Entity, workers: u32) {
        if let Some(mut assigned) = self.world.get_mut::<Workers>(building) {
            assigned.0 = workers;
        }
    }

    pub fn settlement(&self) -> &Settlement {
        self.world.resource::<Settlement>()
    }

    pub fn settlement_mut(&mut self) -> Mut<'_, Settlement> {
        self.world.resource_mut::<Settlement>()
    }

    pub fn economy(&self) -> &EconomySystem {
        self.world.resource::<EconomySystem>()
    }

    pub fn deliveries(&self) -> &CompulsoryDeliveries {
        self.world.resource::<CompulsoryDeliveries>()
    }

    pub fn clock(&self) -> &EconomyClock {
        self.world.resource::<EconomyClock>()
    }

    /// Run one tick and return what happened.
    pub fn tick(&mut self) -> TickReport {
        let time_str = self.clock().to_string();
        self.schedule.run(&mut self.world);
        TickReport {
            time_str,
            economy: self.world.resource::<LastEconomyTick>().0.clone(),
            deliveries: self.world.resource::<LastDeliveryReport>().0,
            events: self.world.resource::<EconomyEventLog>().0.clone(),
        }
    }

    pub fn spend_blat(&mut self, amount: f64, purpose: BlatPurpose) -> BlatSpendOutcome {
        self.world
            .resource_scope(|world, mut rng: Mut<EconomyRng>| {
                world
                    .resource_mut::<EconomySystem>()
                    .spend_blat(amount, purpose, &mut rng.0)
            })
    }

    pub fn repair_heating(&mut self) {
        self.world.resource_mut::<EconomySystem>().repair_heating();
    }

    /// Extract a serializable save state from the current world.
    pub fn save_state(&self) -> SaveState {
        extract_state_from_world(&self.world, self.seed)
    }

    /// Apply a saved state back into the live world.
    pub fn load_state(&mut self, state: &SaveState) {
        self.seed = state.seed;
        apply_state_to_world(state, &mut self.world);
    }

    pub fn save_to_json(&self) -> Result<String, SaveError> {
        encode_save(&self.save_state())
    }

    pub fn load_from_json(&mut self, data: &str) -> Result<(), SaveError> {
        let state = decode_save(data)?;
        self.load_state(&state);
        Ok(())
    }
}
