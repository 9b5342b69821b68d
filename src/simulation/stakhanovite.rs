use rand::Rng;

use crate::data::stakhanovite::{ANNOUNCEMENT_TEMPLATES, WORKER_NAMES};

/// Per-tick chance that a model worker emerges.
pub const STAKHANOVITE_CHANCE: f64 = 0.01;
pub const MIN_PRODUCTION_BOOST: f64 = 1.5;
pub const MAX_PRODUCTION_BOOST: f64 = 4.0;
/// Propaganda points per unit of production boost.
pub const PROPAGANDA_PER_BOOST: f64 = 10.0;
/// Share of the boost above 1.0 added to the next quota.
pub const QUOTA_INCREASE_PER_BOOST: f64 = 0.1;

/// A model worker's record-breaking shift. Transient; never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct StakhanoviteEvent {
    pub worker_name: String,
    pub building: String,
    pub production_boost: f64,
    pub propaganda_value: f64,
    pub quota_increase: f64,
    pub announcement: String,
}

/// Rolls for a model worker among `building_ids`. No draws happen when the list is empty.
pub fn check_stakhanovite<R: Rng + ?Sized>(
    building_ids: &[&str],
    rng: &mut R,
) -> Option<StakhanoviteEvent> {
    if building_ids.is_empty() {
        return None;
    }
    let roll: f64 = rng.random();
    if roll >= STAKHANOVITE_CHANCE {
        return None;
    }

    let worker_name = WORKER_NAMES[rng.random_range(0..WORKER_NAMES.len())];
    let building = building_ids[rng.random_range(0..building_ids.len())];
    let spread: f64 = rng.random();
    let production_boost =
        MIN_PRODUCTION_BOOST + spread * (MAX_PRODUCTION_BOOST - MIN_PRODUCTION_BOOST);
    let propaganda_value = (production_boost * PROPAGANDA_PER_BOOST).round();
    let quota_increase = (production_boost - 1.0) * QUOTA_INCREASE_PER_BOOST;
    let template = ANNOUNCEMENT_TEMPLATES[rng.random_range(0..ANNOUNCEMENT_TEMPLATES.len())];
    let announcement = template
        .replace("{worker}", worker_name)
        .replace("{building}", &building.replace('_', " "))
        .replace("{boost}", &format!("{:.1}", production_boost));

    Some(StakhanoviteEvent {
        worker_name: worker_name.to_string(),
        building: building.to_string(),
        production_boost,
        propaganda_value,
        quota_increase,
        announcement,
    })
}
