use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

/// Host calendar: ticks, months and years as the economy sees them.
#[derive(Resource, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EconomyClock {
    pub total_ticks: u64,
    pub year: i32,
    /// 1-based month.
    pub month: u8,
    pub ticks_per_month: u64,
}

impl Default for EconomyClock {
    fn default() -> Self {
        Self::new(1917, 30)
    }
}

impl EconomyClock {
    pub fn new(start_year: i32, ticks_per_month: u64) -> Self {
        Self {
            total_ticks: 0,
            year: start_year,
            month: 1,
            ticks_per_month: ticks_per_month.max(1),
        }
    }

    pub fn to_string(&self) -> String {
        format!("{}-{:02} (tick {})", self.year, self.month, self.total_ticks)
    }

    pub fn advance(&mut self) {
        self.total_ticks += 1;
        if self.total_ticks % self.ticks_per_month == 0 {
            self.month += 1;
            if self.month > 12 {
                self.month = 1;
                self.year += 1;
            }
        }
    }
}

/// System: Advances the clock by one tick.
pub fn advance_clock_system(mut clock: ResMut<EconomyClock>) {
    clock.advance();
}
