//! Projection engine: applies options (inflation, deviation) around the
//! core annuity formula and produces results, bands, and chart series

use crate::error::InputError;
use crate::plan::SipPlan;

use super::annuity::{future_value, real_rate};
use super::result::{ProjectionBand, ProjectionResult, YearPoint};

/// Options for a projection run
///
/// All fields are defaulted so callers opt in to each adjustment
/// individually. `inflation_rate_pct` only takes effect when
/// `adjust_for_inflation` is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionConfig {
    /// Assumed annual inflation in percent
    pub inflation_rate_pct: f64,

    /// Half-width of the best/worst band, in percentage points of rate
    pub deviation_pct: f64,

    /// Whether to project at the real (inflation-adjusted) rate
    pub adjust_for_inflation: bool,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            inflation_rate_pct: 0.0,
            deviation_pct: 0.0,
            adjust_for_inflation: false,
        }
    }
}

/// Main projection engine
///
/// Holds a validated config; every method is a pure function of the plan
/// passed in. One engine can serve any number of plans.
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create an engine, validating the config once up front
    pub fn new(config: ProjectionConfig) -> Result<Self, InputError> {
        if !config.inflation_rate_pct.is_finite() {
            return Err(InputError::NonFiniteInflation(config.inflation_rate_pct));
        }
        if !config.deviation_pct.is_finite() || config.deviation_pct < 0.0 {
            return Err(InputError::InvalidDeviation(config.deviation_pct));
        }
        Ok(Self { config })
    }

    /// Engine with all adjustments off
    pub fn nominal() -> Self {
        Self {
            config: ProjectionConfig::default(),
        }
    }

    /// The config this engine was built with
    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Rate the projection actually runs at: the plan's nominal rate,
    /// deflated by the Fisher relation when inflation adjustment is on
    pub fn effective_rate_pct(&self, plan: &SipPlan) -> f64 {
        if self.config.adjust_for_inflation {
            real_rate(plan.annual_rate_pct(), self.config.inflation_rate_pct)
        } else {
            plan.annual_rate_pct()
        }
    }

    /// Project the plan to its full duration
    pub fn project(&self, plan: &SipPlan) -> ProjectionResult {
        let rate = self.effective_rate_pct(plan);
        let fv = future_value(plan.monthly_contribution(), rate, plan.duration_months());
        ProjectionResult::from_future_value(plan.total_invested(), fv)
    }

    /// Project best/expected/worst cases around the effective rate
    ///
    /// The worst leg runs at `rate - deviation` floored at zero; the best
    /// leg at `rate + deviation`. With a zero deviation all three legs are
    /// identical.
    pub fn project_band(&self, plan: &SipPlan) -> ProjectionBand {
        let rate = self.effective_rate_pct(plan);
        let best_rate = rate + self.config.deviation_pct;
        let worst_rate = (rate - self.config.deviation_pct).max(0.0);
        let invested = plan.total_invested();

        let at = |r: f64| {
            ProjectionResult::from_future_value(
                invested,
                future_value(plan.monthly_contribution(), r, plan.duration_months()),
            )
        };

        ProjectionBand {
            worst: at(worst_rate),
            expected: at(rate),
            best: at(best_rate),
            worst_rate_pct: worst_rate,
            expected_rate_pct: rate,
            best_rate_pct: best_rate,
        }
    }

    /// Generate the growth-over-time series for charting
    ///
    /// One point per completed year (months 12, 24, ...), plus a final
    /// point at the plan's last month when the duration is not a whole
    /// number of years. No year-0 point is emitted; the series for an
    /// N-year plan has exactly N points.
    pub fn project_series(&self, plan: &SipPlan) -> Vec<YearPoint> {
        let rate = self.effective_rate_pct(plan);
        let duration = plan.duration_months();
        let mut points = Vec::with_capacity((duration as usize + 11) / 12);

        let mut month = 12;
        while month <= duration {
            points.push(self.point_at(plan, rate, month));
            month += 12;
        }
        if duration % 12 != 0 {
            points.push(self.point_at(plan, rate, duration));
        }

        points
    }

    fn point_at(&self, plan: &SipPlan, rate: f64, months_elapsed: u32) -> YearPoint {
        YearPoint {
            year: (months_elapsed + 11) / 12,
            months_elapsed,
            total_invested: plan.monthly_contribution() * months_elapsed as f64,
            future_value: future_value(plan.monthly_contribution(), rate, months_elapsed),
        }
    }
}
