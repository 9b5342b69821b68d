/// Growth applied to a plan target after it was met.
pub const MET_FACTOR: f64 = 1.15;
/// Relief applied after a missed plan.
pub const MISS_FACTOR: f64 = 0.95;

/// Next plan target. Factors multiply as `base(met) * era * difficulty`, rounded once.
pub fn calculate_next_quota(
    current_target: f64,
    met: bool,
    era_escalation_factor: f64,
    difficulty_factor: f64,
) -> f64 {
    if current_target == 0.0 {
        return 0.0;
    }
    let base = if met { MET_FACTOR } else { MISS_FACTOR };
    (current_target * base * era_escalation_factor * difficulty_factor).round()
}

/// Detection risk of an overstated report (pripiski).
///
/// Reporting anything against an actual of zero returns the sentinel `1.0`.
pub fn falsification_risk(reported: f64, actual: f64) -> f64 {
    if actual <= 0.0 {
        return if reported > 0.0 { 1.0 } else { 0.0 };
    }
    ((reported - actual) / actual).clamp(0.0, 1.0)
}
