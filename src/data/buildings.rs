/// Work points credited per worker per tick for buildings not listed below.
pub const DEFAULT_TRUDODNI_RATE: f64 = 0.5;

const TRUDODNI_RATES: &[(&str, f64)] = &[
    ("collective_farm", 1.0),
    ("factory", 1.5),
    ("steel_mill", 1.8),
    ("sawmill", 1.2),
    ("distillery", 1.1),
    ("power_station", 1.4),
    ("mine", 1.6),
    ("warehouse", 0.6),
    ("hospital", 0.9),
    ("school", 0.8),
    ("party_office", 0.3),
    ("apartment_block", 0.1),
];

/// Per-worker rate for a building definition id, falling back to [`DEFAULT_TRUDODNI_RATE`].
pub fn trudodni_rate(building_id: &str) -> f64 {
    TRUDODNI_RATES
        .iter()
        .find(|(id, _)| *id == building_id)
        .map(|(_, rate)| *rate)
        .unwrap_or(DEFAULT_TRUDODNI_RATE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_buildings_use_default_rate() {
        assert_eq!(trudodni_rate("dacha"), DEFAULT_TRUDODNI_RATE);
        assert_eq!(trudodni_rate("factory"), 1.5);
    }
}
