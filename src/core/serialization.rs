use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::rng::EconomyRng;
use crate::data::doctrines::CORRUPTION_RATE_MAX;
use crate::simulation::blat::MAX_CONNECTIONS;
use crate::simulation::deliveries::{CompulsoryDeliveries, CompulsoryDeliverySave};
use crate::simulation::economy::{EconomySaveData, EconomySystem};
use crate::simulation::settlement::Settlement;
use crate::simulation::time::EconomyClock;

pub const SAVE_VERSION: u32 = 1;

/// Save block the host embeds in its game save: the economy, the extraction peer and
/// enough of the generator to resume the same random stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveState {
    #[serde(default = "default_save_version")]
    pub version: u32,
    pub seed: u64,
    #[serde(with = "u128_string", default)]
    pub rng_word_pos: u128,
    pub clock: EconomyClock,
    pub settlement: Settlement,
    pub economy: EconomySaveData,
    pub deliveries: CompulsoryDeliverySave,
}

fn default_save_version() -> u32 {
    1
}

#[derive(Debug)]
pub enum SaveError {
    Json(serde_json::Error),
    UnsupportedVersion(u32),
    Invalid(String),
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveError::Json(err) => write!(f, "save json error: {}", err),
            SaveError::UnsupportedVersion(version) => {
                write!(f, "unsupported save version {}", version)
            }
            SaveError::Invalid(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for SaveError {}

impl From<serde_json::Error> for SaveError {
    fn from(err: serde_json::Error) -> Self {
        SaveError::Json(err)
    }
}

/// Extract a serializable snapshot of the economy resources.
pub fn extract_state_from_world(world: &World, seed: u64) -> SaveState {
    SaveState {
        version: SAVE_VERSION,
        seed,
        rng_word_pos: world.resource::<EconomyRng>().0.get_word_pos(),
        clock: world.resource::<EconomyClock>().clone(),
        settlement: world.resource::<Settlement>().clone(),
        economy: world.resource::<EconomySystem>().serialize(),
        deliveries: world.resource::<CompulsoryDeliveries>().serialize(),
    }
}

/// Replace the economy resources in `world` with freshly built copies of the save.
pub fn apply_state_to_world(state: &SaveState, world: &mut World) {
    let mut rng = EconomyRng::from_seed(state.seed);
    rng.0.set_word_pos(state.rng_word_pos);
    world.insert_resource(rng);
    world.insert_resource(state.clock.clone());
    world.insert_resource(state.settlement.clone());
    world.insert_resource(EconomySystem::deserialize(&state.economy));
    world.insert_resource(CompulsoryDeliveries::deserialize(&state.deliveries));
}

pub fn encode_save(state: &SaveState) -> Result<String, SaveError> {
    Ok(serde_json::to_string_pretty(state)?)
}

pub fn decode_save(data: &str) -> Result<SaveState, SaveError> {
    let state: SaveState = serde_json::from_str(data)?;
    state.validate()?;
    Ok(state)
}

impl SaveState {
    pub fn validate(&self) -> Result<(), SaveError> {
        if self.version != SAVE_VERSION {
            return Err(SaveError::UnsupportedVersion(self.version));
        }
        let blat = &self.economy.blat;
        if !(0.0..=MAX_CONNECTIONS).contains(&blat.connections) {
            return Err(SaveError::Invalid(format!(
                "blat connections {} outside 0..={}",
                blat.connections, MAX_CONNECTIONS
            )));
        }
        let reliability = self.economy.fondy.reliability;
        if !(reliability > 0.0 && reliability <= 1.0) {
            return Err(SaveError::Invalid(format!(
                "fondy reliability {} outside (0, 1]",
                reliability
            )));
        }
        if self.economy.fondy.delivery_interval == 0 {
            return Err(SaveError::Invalid("fondy delivery interval is zero".to_string()));
        }
        let corruption = self.deliveries.corruption_rate;
        if !(0.0..=CORRUPTION_RATE_MAX).contains(&corruption) {
            return Err(SaveError::Invalid(format!(
                "corruption rate {} outside 0..={}",
                corruption, CORRUPTION_RATE_MAX
            )));
        }
        if self.clock.ticks_per_month == 0 || !(1..=12).contains(&self.clock.month) {
            return Err(SaveError::Invalid("clock fields out of range".to_string()));
        }
        Ok(())
    }
}

mod u128_string {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &u128, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u128, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<u128>().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ecs::create_world;
    use crate::data::config::EconomyConfig;

    fn sample_state() -> SaveState {
        let world = create_world(&EconomyConfig::default());
        extract_state_from_world(&world, 0)
    }

    #[test]
    fn encoded_save_decodes_to_the_same_state() {
        let state = sample_state();
        let raw = encode_save(&state).unwrap();
        assert!(raw.contains("\"rng_word_pos\": \"0\""));
        assert_eq!(decode_save(&raw).unwrap(), state);
    }

    #[test]
    fn unknown_version_is_rejected() {
        let mut state = sample_state();
        state.version = 9;
        let raw = encode_save(&state).unwrap();
        assert!(matches!(decode_save(&raw), Err(SaveError::UnsupportedVersion(9))));
    }

    #[test]
    fn out_of_range_blat_is_rejected() {
        let mut state = sample_state();
        state.economy.blat.connections = 250.0;
        let raw = encode_save(&state).unwrap();
        assert!(matches!(decode_save(&raw), Err(SaveError::Invalid(_))));
    }

    #[test]
    fn garbage_is_a_json_error() {
        assert!(matches!(decode_save("{ not json"), Err(SaveError::Json(_))));
    }
}
