use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::data::eras::Era;
use crate::simulation::resources::{ResourceBundle, ResourceKind};

const FAILURE_REASONS: &[&str] = &[
    "Shipment diverted to a higher-priority oblast",
    "Rail wagons requisitioned by the military district",
    "Allocation lost in the ministry's paperwork",
    "Convoy stranded by impassable roads",
];

/// State allocation ledger: what the centre promises and what has actually arrived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FondyState {
    pub allocated: ResourceBundle,
    /// Running total of everything actually delivered.
    pub delivered: ResourceBundle,
    pub next_delivery_tick: u64,
    pub delivery_interval: u64,
    pub reliability: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FondyOutcome {
    NotDue {
        next_delivery_tick: u64,
    },
    NotDelivered {
        allocated: ResourceBundle,
        reason: String,
    },
    Delivered {
        allocated: ResourceBundle,
        actual: ResourceBundle,
    },
}

impl FondyOutcome {
    pub fn delivered(&self) -> bool {
        matches!(self, FondyOutcome::Delivered { .. })
    }

    /// Amounts that arrived this tick; zero unless delivered.
    pub fn actual(&self) -> ResourceBundle {
        match self {
            FondyOutcome::Delivered { actual, .. } => *actual,
            _ => ResourceBundle::zero(),
        }
    }
}

impl FondyState {
    pub fn new(era: Era) -> Self {
        let template = era.fondy_allocation();
        Self {
            allocated: template.allocated,
            delivered: ResourceBundle::zero(),
            next_delivery_tick: template.interval_ticks,
            delivery_interval: template.interval_ticks,
            reliability: template.reliability,
        }
    }

    /// Swaps the template wholesale. The pending delivery tick is kept.
    pub fn set_era(&mut self, era: Era) {
        let template = era.fondy_allocation();
        self.allocated = template.allocated;
        self.delivery_interval = template.interval_ticks;
        self.reliability = template.reliability;
    }

    pub fn improve_reliability(&mut self, step: f64) -> f64 {
        self.reliability = (self.reliability + step).min(1.0);
        self.reliability
    }

    pub fn process_delivery<R: Rng + ?Sized>(
        &mut self,
        current_tick: u64,
        rng: &mut R,
    ) -> FondyOutcome {
        if current_tick < self.next_delivery_tick {
            return FondyOutcome::NotDue {
                next_delivery_tick: self.next_delivery_tick,
            };
        }
        let cycle = self.next_delivery_tick / self.delivery_interval.max(1);
        self.next_delivery_tick += self.delivery_interval;

        let roll: f64 = rng.random();
        if roll >= self.reliability {
            let reason = FAILURE_REASONS[(cycle as usize) % FAILURE_REASONS.len()];
            return FondyOutcome::NotDelivered {
                allocated: self.allocated,
                reason: reason.to_string(),
            };
        }

        let mut actual = ResourceBundle::zero();
        for kind in ResourceKind::ALL {
            let variance: f64 = rng.random();
            let amount = self.allocated.get(kind) * self.reliability * (0.5 + variance * 0.5);
            actual.set(kind, amount);
        }
        self.delivered = self.delivered.add(actual);
        FondyOutcome::Delivered {
            allocated: self.allocated,
            actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn not_due_before_scheduled_tick() {
        let mut fondy = FondyState::new(Era::Thaw);
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let before = fondy.clone();
        let outcome = fondy.process_delivery(10, &mut rng);
        assert_eq!(outcome, FondyOutcome::NotDue { next_delivery_tick: 60 });
        assert_eq!(fondy, before);
    }

    #[test]
    fn reschedules_even_on_failure() {
        let mut fondy = FondyState::new(Era::Revolution);
        fondy.reliability = 0.0;
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        let outcome = fondy.process_delivery(90, &mut rng);
        assert!(!outcome.delivered());
        assert!(outcome.actual().is_zero());
        assert_eq!(fondy.next_delivery_tick, 180);
        assert!(fondy.delivered.is_zero());
        match outcome {
            FondyOutcome::NotDelivered { reason, .. } => assert!(!reason.is_empty()),
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn certain_delivery_accumulates() {
        let mut fondy = FondyState::new(Era::Thaw);
        fondy.reliability = 1.0;
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let first = fondy.process_delivery(60, &mut rng).actual();
        let second = fondy.process_delivery(120, &mut rng).actual();
        assert!(first.food >= 25.0 && first.food <= 50.0);
        assert_eq!(fondy.delivered, first.add(second));
    }

    #[test]
    fn set_era_keeps_schedule() {
        let mut fondy = FondyState::new(Era::Revolution);
        fondy.set_era(Era::Thaw);
        assert_eq!(fondy.next_delivery_tick, 90);
        assert_eq!(fondy.delivery_interval, 60);
        assert_eq!(fondy.reliability, 0.7);
    }

    #[test]
    fn reliability_improvement_caps_at_one() {
        let mut fondy = FondyState::new(Era::Thaw);
        fondy.improve_reliability(0.2);
        assert_eq!(fondy.improve_reliability(0.2), 1.0);
    }

    proptest! {
        #[test]
        fn delivered_never_exceeds_allocation(seed in any::<u64>(), era_index in 0usize..8) {
            let mut fondy = FondyState::new(Era::ALL[era_index]);
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            let mut tick = 0;
            for _ in 0..20 {
                tick += fondy.delivery_interval;
                let outcome = fondy.process_delivery(tick, &mut rng);
                if let FondyOutcome::Delivered { allocated, actual } = outcome {
                    for kind in ResourceKind::ALL {
                        prop_assert!(actual.get(kind) <= allocated.get(kind));
                        prop_assert!(actual.get(kind) >= 0.0);
                    }
                }
            }
        }
    }
}
