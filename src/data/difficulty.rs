use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Worker,
    Comrade,
    Tovarish,
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Comrade
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyMultipliers {
    /// Applied on top of the met/missed factor when a quota escalates.
    pub quota_factor: f64,
    /// Work points the settlement must contribute per plan period.
    pub trudodni_minimum: f64,
    pub starting_blat: f64,
}

impl Difficulty {
    pub fn multipliers(self) -> DifficultyMultipliers {
        match self {
            Difficulty::Worker => DifficultyMultipliers {
                quota_factor: 0.8,
                trudodni_minimum: 50.0,
                starting_blat: 15.0,
            },
            Difficulty::Comrade => DifficultyMultipliers {
                quota_factor: 1.0,
                trudodni_minimum: 100.0,
                starting_blat: 10.0,
            },
            Difficulty::Tovarish => DifficultyMultipliers {
                quota_factor: 1.3,
                trudodni_minimum: 150.0,
                starting_blat: 5.0,
            },
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Worker => "worker",
            Difficulty::Comrade => "comrade",
            Difficulty::Tovarish => "tovarish",
        };
        write!(f, "{}", label)
    }
}
