use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::data::buildings::trudodni_rate;

/// Grid position that identifies a placed building in the work-point ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridKey {
    pub x: i32,
    pub y: i32,
}

impl GridKey {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for GridKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseGridKeyError {
    pub value: String,
}

impl fmt::Display for ParseGridKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid grid key {:?}", self.value)
    }
}

impl std::error::Error for ParseGridKeyError {}

impl FromStr for GridKey {
    type Err = ParseGridKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseGridKeyError {
            value: s.to_string(),
        };
        let (x, y) = s.split_once(',').ok_or_else(err)?;
        let x = x.trim().parse().map_err(|_| err())?;
        let y = y.trim().parse().map_err(|_| err())?;
        Ok(GridKey { x, y })
    }
}

impl Serialize for GridKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GridKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Work points earned by the settlement, per building and in total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrudodniRecord {
    pub total_contributed: f64,
    pub per_building: BTreeMap<GridKey, f64>,
    pub minimum_required: f64,
}

impl TrudodniRecord {
    pub fn new(minimum_required: f64) -> Self {
        Self {
            total_contributed: 0.0,
            per_building: BTreeMap::new(),
            minimum_required,
        }
    }

    /// Records one accrual and returns the points credited.
    pub fn record(&mut self, key: GridKey, building_id: &str, workers: u32) -> f64 {
        let earned = calculate_building_trudodni(building_id, workers);
        self.total_contributed += earned;
        *self.per_building.entry(key).or_insert(0.0) += earned;
        earned
    }

    pub fn at(&self, key: GridKey) -> f64 {
        self.per_building.get(&key).copied().unwrap_or(0.0)
    }

    /// Progress against the minimum. A zero minimum counts as fully satisfied.
    pub fn ratio(&self) -> f64 {
        if self.minimum_required <= 0.0 {
            return 1.0;
        }
        self.total_contributed / self.minimum_required
    }

    pub fn reset(&mut self) {
        self.total_contributed = 0.0;
        self.per_building.clear();
    }
}

pub fn calculate_building_trudodni(building_id: &str, workers: u32) -> f64 {
    trudodni_rate(building_id) * workers as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::buildings::DEFAULT_TRUDODNI_RATE;

    #[test]
    fn grid_key_parses_its_own_display() {
        let key = GridKey::new(-3, 12);
        assert_eq!(key.to_string(), "-3,12");
        assert_eq!("-3,12".parse::<GridKey>().unwrap(), key);
        assert!("3;12".parse::<GridKey>().is_err());
        assert!("a,1".parse::<GridKey>().is_err());
    }

    #[test]
    fn rate_times_workers() {
        assert_eq!(calculate_building_trudodni("factory", 4), 6.0);
        assert_eq!(
            calculate_building_trudodni("unknown_kiosk", 4),
            DEFAULT_TRUDODNI_RATE * 4.0
        );
        assert_eq!(calculate_building_trudodni("factory", 0), 0.0);
    }

    #[test]
    fn repeated_records_at_one_key_sum() {
        let mut ledger = TrudodniRecord::new(100.0);
        let key = GridKey::new(1, 1);
        ledger.record(key, "collective_farm", 10);
        ledger.record(key, "collective_farm", 5);
        ledger.record(GridKey::new(2, 1), "factory", 2);
        assert_eq!(ledger.at(key), 15.0);
        assert_eq!(ledger.total_contributed, 18.0);
        assert_eq!(ledger.ratio(), 0.18);
    }

    #[test]
    fn zero_minimum_yields_full_ratio() {
        let ledger = TrudodniRecord::new(0.0);
        assert_eq!(ledger.ratio(), 1.0);
    }

    #[test]
    fn reset_clears_total_and_ledger() {
        let mut ledger = TrudodniRecord::new(50.0);
        ledger.record(GridKey::new(0, 0), "mine", 3);
        ledger.reset();
        assert_eq!(ledger.total_contributed, 0.0);
        assert!(ledger.per_building.is_empty());
        assert_eq!(ledger.minimum_required, 50.0);
    }
}
