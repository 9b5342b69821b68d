//! Fixed historical windows that switch policies on and off by in-game year.

/// Inclusive `(first, last)` years of rationing crises, chronological and non-overlapping.
pub const RATION_CRISIS_WINDOWS: &[(i32, i32)] = &[(1918, 1921), (1929, 1935), (1941, 1947)];

/// Rationing returns for good from this year on.
pub const RATION_OPEN_ENDED_FROM: i32 = 1990;

/// Inclusive year range in which machine-tractor stations rent out equipment.
pub const MTS_ACTIVE_YEARS: (i32, i32) = (1928, 1958);

pub fn mts_available(year: i32) -> bool {
    year >= MTS_ACTIVE_YEARS.0 && year <= MTS_ACTIVE_YEARS.1
}
