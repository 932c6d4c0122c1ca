use serde::Serialize;

/// Life percentage above which a switch is considered healthy.
pub const HEALTHY_ABOVE_PCT: f64 = 50.0;
/// Life percentage above which a switch is merely worn, not critical.
pub const WARNING_ABOVE_PCT: f64 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SeverityTier {
    Healthy,
    Warning,
    Critical,
}

/// Remaining useful life as a percentage of the rated press count.
/// Clamps at 0 once the rated lifespan has been consumed. `rated_lifespan`
/// is positive by catalog invariant.
pub fn life_expectancy(presses: u64, rated_lifespan: u64) -> f64 {
    let remaining = rated_lifespan.saturating_sub(presses);
    if remaining == 0 {
        return 0.0;
    }
    (remaining as f64 / rated_lifespan as f64) * 100.0
}

pub fn severity_tier(percentage: f64) -> SeverityTier {
    if percentage > HEALTHY_ABOVE_PCT {
        SeverityTier::Healthy
    } else if percentage > WARNING_ABOVE_PCT {
        SeverityTier::Warning
    } else {
        SeverityTier::Critical
    }
}
