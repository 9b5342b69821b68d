pub mod buildings;
pub mod config;
pub mod difficulty;
pub mod doctrines;
pub mod eras;
pub mod heating;
pub mod history;
pub mod reforms;
pub mod stakhanovite;

pub use config::{load_economy_config, EconomyConfig, EconomyConfigError};
pub use difficulty::{Difficulty, DifficultyMultipliers};
pub use doctrines::{DeliveryRates, Doctrine};
pub use eras::{Era, FondyAllocation};
pub use heating::{HeatingConsumption, HeatingProfile, HeatingTier};
