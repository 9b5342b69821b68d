use rand::Rng;
use serde::{Deserialize, Serialize};

pub const MAX_CONNECTIONS: f64 = 100.0;
/// Spends above this size attract KGB attention.
pub const DETECTION_THRESHOLD: f64 = 5.0;
pub const DETECTION_CHANCE_PER_POINT: f64 = 0.02;
/// Reliability gained by fondy per "improve delivery" spend.
pub const DELIVERY_RELIABILITY_STEP: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlatPurpose {
    ImproveDelivery,
    ExpediteRepair,
    Personal,
}

/// Informal influence: a capped, spendable balance with lifetime bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlatState {
    pub connections: f64,
    pub total_spent: f64,
    pub total_earned: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BlatSpendOutcome {
    Insufficient {
        requested: f64,
        available: f64,
    },
    Spent {
        amount: f64,
        kgb_detected: bool,
        /// Fondy reliability after the spend, when the purpose touched deliveries.
        delivery_reliability: Option<f64>,
    },
}

impl BlatSpendOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, BlatSpendOutcome::Spent { .. })
    }
}

impl BlatState {
    pub fn new(connections: f64) -> Self {
        Self {
            connections: connections.clamp(0.0, MAX_CONNECTIONS),
            total_spent: 0.0,
            total_earned: 0.0,
        }
    }

    /// Earned bookkeeping records the raw amount even when the cap truncates the balance.
    pub fn grant(&mut self, amount: f64) {
        if amount <= 0.0 {
            return;
        }
        self.connections = (self.connections + amount).min(MAX_CONNECTIONS);
        self.total_earned += amount;
    }

    /// Deducts the spend and rolls for detection. Does not touch fondy; see
    /// `EconomySystem::spend_blat` for the delivery coupling.
    pub fn spend<R: Rng + ?Sized>(&mut self, amount: f64, rng: &mut R) -> BlatSpendOutcome {
        if amount <= 0.0 || amount > self.connections {
            return BlatSpendOutcome::Insufficient {
                requested: amount,
                available: self.connections,
            };
        }
        self.connections -= amount;
        self.total_spent += amount;

        let kgb_detected = match detection_chance(amount) {
            chance if chance > 0.0 => rng.random::<f64>() < chance,
            _ => false,
        };
        BlatSpendOutcome::Spent {
            amount,
            kgb_detected,
            delivery_reliability: None,
        }
    }
}

pub fn detection_chance(amount: f64) -> f64 {
    let excess = amount - DETECTION_THRESHOLD;
    if excess <= 0.0 {
        return 0.0;
    }
    (excess * DETECTION_CHANCE_PER_POINT).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn grant_caps_balance_but_not_bookkeeping() {
        let mut blat = BlatState::new(90.0);
        blat.grant(25.0);
        assert_eq!(blat.connections, 100.0);
        assert_eq!(blat.total_earned, 25.0);
    }

    #[test]
    fn overspend_fails_without_mutation() {
        let mut blat = BlatState::new(4.0);
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        let outcome = blat.spend(5.0, &mut rng);
        assert!(!outcome.succeeded());
        assert_eq!(blat, BlatState::new(4.0));
    }

    #[test]
    fn small_spends_are_never_detected() {
        let mut blat = BlatState::new(100.0);
        let mut rng = ChaCha20Rng::seed_from_u64(10);
        for _ in 0..20 {
            match blat.spend(5.0, &mut rng) {
                BlatSpendOutcome::Spent { kgb_detected, .. } => assert!(!kgb_detected),
                other => panic!("unexpected {:?}", other),
            }
        }
        assert_eq!(blat.connections, 0.0);
        assert_eq!(blat.total_spent, 100.0);
    }

    #[test]
    fn detection_scales_with_excess() {
        assert_eq!(detection_chance(5.0), 0.0);
        assert!((detection_chance(10.0) - 0.1).abs() < 1e-12);
        assert_eq!(detection_chance(500.0), 1.0);
    }

    proptest! {
        #[test]
        fn connections_stay_capped(grants in proptest::collection::vec(0.0f64..80.0, 0..30)) {
            let mut blat = BlatState::new(0.0);
            for amount in grants {
                blat.grant(amount);
                prop_assert!(blat.connections <= MAX_CONNECTIONS);
            }
        }

        #[test]
        fn spend_never_exceeds_balance(
            start in 0.0f64..100.0,
            amount in 0.0f64..200.0,
            seed in any::<u64>(),
        ) {
            let mut blat = BlatState::new(start);
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            let outcome = blat.spend(amount, &mut rng);
            if amount > start {
                prop_assert!(!outcome.succeeded());
            }
            prop_assert!(blat.connections >= 0.0);
        }
    }
}
