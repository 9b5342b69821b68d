use serde::{Deserialize, Serialize};

use crate::data::reforms::default_currency_reforms;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReformRule {
    /// Old notes exchanged at `rate` to one, never leaving less than a single rouble.
    Denomination { rate: f64 },
    /// Holdings above the floor lose a share of the excess.
    ProtectedConfiscation {
        protected_floor: f64,
        confiscation_rate: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyReformEvent {
    pub year: i32,
    pub label: String,
    pub rule: ReformRule,
    pub applied: bool,
}

impl CurrencyReformEvent {
    pub fn new(year: i32, label: &str, rule: ReformRule) -> Self {
        Self {
            year,
            label: label.to_string(),
            rule,
            applied: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyReformResult {
    pub year: i32,
    pub label: String,
    pub money_before: f64,
    pub money_after: f64,
    pub amount_lost: f64,
}

pub fn apply_currency_reform(money_before: f64, rule: &ReformRule) -> (f64, f64) {
    if money_before <= 0.0 {
        return (money_before, 0.0);
    }
    let money_after = match *rule {
        ReformRule::Denomination { rate } => {
            if rate <= 0.0 {
                money_before
            } else {
                (money_before / rate).floor().max(1.0)
            }
        }
        ReformRule::ProtectedConfiscation {
            protected_floor,
            confiscation_rate,
        } => {
            if money_before <= protected_floor {
                money_before
            } else {
                let excess = money_before - protected_floor;
                protected_floor + excess * (1.0 - confiscation_rate.clamp(0.0, 1.0))
            }
        }
    };
    (money_after, money_before - money_after)
}

/// Earliest unapplied reform whose year has been reached.
pub fn find_pending_reform(reforms: &[CurrencyReformEvent], year: i32) -> Option<usize> {
    reforms
        .iter()
        .position(|reform| reform.year <= year && !reform.applied)
}

/// Chronological list of one-shot reforms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyReformLedger {
    pub reforms: Vec<CurrencyReformEvent>,
}

impl Default for CurrencyReformLedger {
    fn default() -> Self {
        Self {
            reforms: default_currency_reforms(),
        }
    }
}

impl CurrencyReformLedger {
    pub fn pending(&self, year: i32) -> Option<&CurrencyReformEvent> {
        find_pending_reform(&self.reforms, year).map(|index| &self.reforms[index])
    }

    /// Returns false when the index is out of range or the reform already fired.
    pub fn mark_applied(&mut self, index: usize) -> bool {
        match self.reforms.get_mut(index) {
            Some(reform) if !reform.applied => {
                reform.applied = true;
                true
            }
            _ => false,
        }
    }

    /// Applies at most one pending reform and marks it so it never fires again.
    pub fn apply_pending(&mut self, year: i32, money: f64) -> Option<CurrencyReformResult> {
        let index = find_pending_reform(&self.reforms, year)?;
        self.mark_applied(index);
        let reform = &self.reforms[index];
        let (money_after, amount_lost) = apply_currency_reform(money, &reform.rule);
        Some(CurrencyReformResult {
            year: reform.year,
            label: reform.label.clone(),
            money_before: money,
            money_after,
            amount_lost,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denomination_divides_by_rate() {
        let rule = ReformRule::Denomination { rate: 10.0 };
        let (after, lost) = apply_currency_reform(10_000.0, &rule);
        assert_eq!(after, 1_000.0);
        assert_eq!(lost, 9_000.0);
    }

    #[test]
    fn denomination_keeps_one_rouble() {
        let rule = ReformRule::Denomination { rate: 50_000.0 };
        let (after, lost) = apply_currency_reform(100.0, &rule);
        assert_eq!(after, 1.0);
        assert_eq!(lost, 99.0);
    }

    #[test]
    fn pavlov_style_confiscation() {
        let rule = ReformRule::ProtectedConfiscation {
            protected_floor: 1_000.0,
            confiscation_rate: 0.5,
        };
        assert_eq!(apply_currency_reform(5_000.0, &rule), (3_000.0, 2_000.0));
        assert_eq!(apply_currency_reform(800.0, &rule), (800.0, 0.0));
        assert_eq!(apply_currency_reform(1_000.0, &rule), (1_000.0, 0.0));
    }

    #[test]
    fn empty_treasury_is_untouched() {
        let (after, lost) = apply_currency_reform(0.0, &ReformRule::Denomination { rate: 10.0 });
        assert_eq!((after, lost), (0.0, 0.0));
    }

    #[test]
    fn each_reform_fires_once_in_order() {
        let mut ledger = CurrencyReformLedger::default();
        assert!(ledger.pending(1921).is_none());

        // A save loaded late in the game catches up one reform per call, oldest first.
        let first = ledger.apply_pending(1950, 100_000.0).unwrap();
        assert_eq!(first.year, 1922);
        let second = ledger.apply_pending(1950, first.money_after).unwrap();
        assert_eq!(second.year, 1924);
        let third = ledger.apply_pending(1950, 10_000.0).unwrap();
        assert_eq!(third.year, 1947);
        assert!(ledger.apply_pending(1950, 10_000.0).is_none());
        assert_eq!(ledger.reforms.iter().filter(|r| r.applied).count(), 3);
    }

    #[test]
    fn marking_is_one_shot() {
        let mut ledger = CurrencyReformLedger::default();
        assert!(ledger.mark_applied(3));
        assert!(!ledger.mark_applied(3));
        assert!(!ledger.mark_applied(40));
        assert_eq!(find_pending_reform(&ledger.reforms, 1970), Some(0));
    }
}
