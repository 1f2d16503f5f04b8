//! Projection output structures

use serde::{Deserialize, Serialize};

/// Outcome of a single projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Sum of all contributions made over the plan
    pub total_invested: f64,

    /// Projected corpus at the end of the plan
    pub future_value: f64,

    /// Growth over contributions: future_value - total_invested
    pub wealth_gained: f64,
}

impl ProjectionResult {
    /// Build a result from the invested amount and computed future value
    pub fn from_future_value(total_invested: f64, future_value: f64) -> Self {
        Self {
            total_invested,
            future_value,
            wealth_gained: future_value - total_invested,
        }
    }
}

/// Best/expected/worst projection around a central rate
///
/// `worst` uses the central rate minus the deviation, floored at zero;
/// `best` uses the central rate plus the deviation. The rates actually
/// used are carried alongside so callers can label chart bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionBand {
    pub worst: ProjectionResult,
    pub expected: ProjectionResult,
    pub best: ProjectionResult,

    /// Rate used for the worst leg, after the zero floor
    pub worst_rate_pct: f64,
    /// Central rate (post inflation adjustment, if enabled)
    pub expected_rate_pct: f64,
    /// Rate used for the best leg
    pub best_rate_pct: f64,
}

/// One point of the growth-over-time series
///
/// Points are emitted per completed year; a trailing partial year gets its
/// own point at the plan's final month. There is no year-0 point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearPoint {
    /// Elapsed years, counting from 1; the last point may repeat the prior
    /// year number plus a fraction's worth of months
    pub year: u32,

    /// Months elapsed at this point (year * 12, except a partial final year)
    pub months_elapsed: u32,

    /// Contributions made up to this point
    pub total_invested: f64,

    /// Projected corpus at this point
    pub future_value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wealth_gained_identity() {
        let r = ProjectionResult::from_future_value(600_000.0, 1_161_695.38);
        assert_eq!(r.wealth_gained, r.future_value - r.total_invested);
    }
}
