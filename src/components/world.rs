use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

use crate::simulation::trudodni::GridKey;

/// Grid cell a building occupies.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn grid_key(&self) -> GridKey {
        GridKey::new(self.x, self.y)
    }
}

/// Definition id of a placed building, e.g. `collective_farm`.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct Building(pub String);

/// Workers currently assigned to a building.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Workers(pub u32);
