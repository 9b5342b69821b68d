use bevy_ecs::prelude::*;
use bevy_ecs::schedule::SystemSet;

use crate::core::rng::EconomyRng;
use crate::data::config::EconomyConfig;
use crate::simulation::deliveries::CompulsoryDeliveries;
use crate::simulation::economy::EconomySystem;
use crate::simulation::settlement::Settlement;
use crate::simulation::time::{advance_clock_system, EconomyClock};
use crate::systems::economy::{
    compulsory_delivery_system, economy_tick_system, EconomyEventLog, LastDeliveryReport,
    LastEconomyTick,
};

/// Canonical tick ordering. Economy before extraction; the clock moves last.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum TickSet {
    Economy,
    Extraction,
    Time,
}

/// Build the ECS world with the economy resources for `config`.
pub fn create_world(config: &EconomyConfig) -> World {
    let mut world = World::new();
    let mut rng = EconomyRng::from_seed(config.seed);
    let deliveries = CompulsoryDeliveries::new(config.effective_doctrine(), &mut rng.0);

    world.insert_resource(EconomySystem::new(config.era, config.difficulty));
    world.insert_resource(deliveries);
    world.insert_resource(rng);
    world.insert_resource(EconomyClock::new(config.start_year, config.ticks_per_month));
    world.insert_resource(Settlement::default());
    world.insert_resource(LastEconomyTick::default());
    world.insert_resource(LastDeliveryReport::default());
    world.insert_resource(EconomyEventLog::default());
    world
}

/// Build the system schedule in the canonical order.
pub fn create_schedule() -> Schedule {
    let mut schedule = Schedule::default();

    schedule.configure_sets((TickSet::Economy, TickSet::Extraction, TickSet::Time).chain());

    schedule.add_systems((
        economy_tick_system.in_set(TickSet::Economy),
        compulsory_delivery_system.in_set(TickSet::Extraction),
        advance_clock_system.in_set(TickSet::Time),
    ));

    schedule
}
