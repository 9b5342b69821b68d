use bevy_ecs::prelude::*;
use bevy_utils::tracing::{debug, info};

use crate::components::world::{Building, Position, Workers};
use crate::core::rng::EconomyRng;
use crate::data::eras::Era;
use crate::simulation::deliveries::{CompulsoryDeliveries, DeliveryResult};
use crate::simulation::economy::{BuildingSnapshot, EconomySystem, EconomyTickResult, TickContext};
use crate::simulation::fondy::FondyOutcome;
use crate::simulation::settlement::Settlement;
use crate::simulation::time::EconomyClock;

/// Result of the most recent economy tick, for UI and scoring layers.
#[derive(Resource, Default, Debug)]
pub struct LastEconomyTick(pub Option<EconomyTickResult>);

#[derive(Resource, Default, Debug)]
pub struct LastDeliveryReport(pub Option<DeliveryResult>);

/// Human-readable economy events raised during the last tick.
#[derive(Resource, Default, Debug)]
pub struct EconomyEventLog(pub Vec<String>);

/// System: runs the planned-economy tick and books the result into the settlement.
pub fn economy_tick_system(
    mut economy: ResMut<EconomySystem>,
    mut deliveries: ResMut<CompulsoryDeliveries>,
    mut rng: ResMut<EconomyRng>,
    mut settlement: ResMut<Settlement>,
    clock: Res<EconomyClock>,
    mut last: ResMut<LastEconomyTick>,
    mut log: ResMut<EconomyEventLog>,
    buildings: Query<(&Position, &Building, &Workers)>,
) {
    log.0.clear();

    let era = Era::for_year(clock.year);
    if era > economy.era() {
        let configured = deliveries.doctrine();
        if configured != economy.era().doctrine() {
            info!(
                "compulsory deliveries: configured {} doctrine replaced by the {} era",
                configured, era
            );
            log.0.push(format!(
                "The {} doctrine gives way to the {} era",
                configured, era
            ));
        }
        economy.set_era(era);
        deliveries.set_doctrine(era.doctrine(), &mut rng.0);
        log.0.push(format!("The {} era begins", era));
    }

    let snapshots = collect_buildings(&buildings);
    let context = TickContext {
        month: clock.month,
        stores: settlement.stores,
    };
    let result = economy.tick(
        clock.total_ticks,
        clock.year,
        settlement.population,
        &snapshots,
        &context,
        &mut rng.0,
    );

    if let Some(reason) = failed_delivery_reason(&result) {
        log.0.push(reason);
    }
    if let Some(reform) = &result.currency_reform {
        log.0.push(format!("{}: savings cut by {:.0}", reform.label, reform.amount_lost));
    }
    if let Some(event) = &result.stakhanovite {
        log.0.push(event.announcement.clone());
    }
    if result.heating.population_at_risk > 0 {
        log.0.push(format!(
            "{} citizens freezing without heat",
            result.heating.population_at_risk
        ));
    }

    settlement.apply_tick_result(&result);
    last.0 = Some(result);
}

/// System: hands the state its compulsory share of this tick's production.
pub fn compulsory_delivery_system(
    mut deliveries: ResMut<CompulsoryDeliveries>,
    mut settlement: ResMut<Settlement>,
    mut report: ResMut<LastDeliveryReport>,
) {
    let mut production = settlement.production;
    production.food *= settlement.grain_multiplier;
    let result = deliveries.apply_deliveries(production.food, production.vodka, production.money);
    debug!(
        "compulsory deliveries: took {:.1} food, {:.1} vodka, {:.1} money",
        result.food_taken, result.vodka_taken, result.money_taken
    );
    settlement.apply_delivery(&production, &result);
    report.0 = Some(result);
}

/// Snapshots sorted by grid key so seeded replays see buildings in the same order.
fn collect_buildings(query: &Query<(&Position, &Building, &Workers)>) -> Vec<BuildingSnapshot> {
    let mut snapshots: Vec<BuildingSnapshot> = query
        .iter()
        .map(|(position, building, workers)| BuildingSnapshot {
            key: position.grid_key(),
            building_id: building.0.clone(),
            workers: workers.0,
        })
        .collect();
    snapshots.sort_by(|a, b| a.key.cmp(&b.key));
    snapshots
}

fn failed_delivery_reason(result: &EconomyTickResult) -> Option<String> {
    match &result.fondy {
        FondyOutcome::NotDelivered { reason, .. } => {
            Some(format!("Fondy delivery failed: {}", reason))
        }
        _ => None,
    }
}
