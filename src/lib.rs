// Re-export core modules for use by host drivers
pub mod components;
pub mod core;
pub mod data;
pub mod simulation;
pub mod systems;

// Expose the host wrapper and the engine types hosts interact with
pub use crate::core::serialization::SaveState;
pub use crate::core::world::{EconomyHost, TickReport};
pub use crate::data::{Difficulty, Doctrine, EconomyConfig, Era};
pub use crate::simulation::{CompulsoryDeliveries, EconomySystem, EconomyTickResult};
