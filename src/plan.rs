//! SIP plan input structure and validation

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// A validated SIP plan: the three inputs every projection needs
///
/// Construction goes through [`SipPlan::new`] or [`SipPlan::from_years`];
/// deserialization routes through the same validation. Fields are private
/// so no path can materialize an out-of-domain plan: a `SipPlan` that
/// exists is always safe to project.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSipPlan")]
pub struct SipPlan {
    /// Contribution invested at the start of each month
    monthly_contribution: f64,

    /// Expected annual growth rate in percent (CAGR); may be negative
    annual_rate_pct: f64,

    /// Total number of monthly contributions
    duration_months: u32,
}

/// Unvalidated mirror that serde deserializes into before validation
#[derive(Debug, Clone, Copy, Deserialize)]
struct RawSipPlan {
    monthly_contribution: f64,
    annual_rate_pct: f64,
    duration_months: u32,
}

impl TryFrom<RawSipPlan> for SipPlan {
    type Error = InputError;

    fn try_from(raw: RawSipPlan) -> Result<Self, Self::Error> {
        Self::new(
            raw.monthly_contribution,
            raw.annual_rate_pct,
            raw.duration_months,
        )
    }
}

impl SipPlan {
    /// Create a plan, validating every field
    ///
    /// Fails when the contribution is non-positive or non-finite, the
    /// duration is zero, or the rate is NaN/infinite. A zero rate is a
    /// valid (degenerate) input, not an error.
    pub fn new(
        monthly_contribution: f64,
        annual_rate_pct: f64,
        duration_months: u32,
    ) -> Result<Self, InputError> {
        if !monthly_contribution.is_finite() || monthly_contribution <= 0.0 {
            return Err(InputError::InvalidContribution(monthly_contribution));
        }
        if duration_months == 0 {
            return Err(InputError::InvalidDuration);
        }
        if !annual_rate_pct.is_finite() {
            return Err(InputError::NonFiniteRate(annual_rate_pct));
        }

        Ok(Self {
            monthly_contribution,
            annual_rate_pct,
            duration_months,
        })
    }

    /// Create a plan from a duration in whole years
    ///
    /// A year count whose month equivalent overflows `u32` is rejected as
    /// an invalid duration, never wrapped.
    pub fn from_years(
        monthly_contribution: f64,
        annual_rate_pct: f64,
        years: u32,
    ) -> Result<Self, InputError> {
        let duration_months = years.checked_mul(12).ok_or(InputError::InvalidDuration)?;
        Self::new(monthly_contribution, annual_rate_pct, duration_months)
    }

    /// Copy of this plan at a different rate, revalidated
    pub fn with_rate(&self, annual_rate_pct: f64) -> Result<Self, InputError> {
        Self::new(
            self.monthly_contribution,
            annual_rate_pct,
            self.duration_months,
        )
    }

    /// Contribution invested at the start of each month
    pub fn monthly_contribution(&self) -> f64 {
        self.monthly_contribution
    }

    /// Expected annual growth rate in percent
    pub fn annual_rate_pct(&self) -> f64 {
        self.annual_rate_pct
    }

    /// Total number of monthly contributions
    pub fn duration_months(&self) -> u32 {
        self.duration_months
    }

    /// Sum of all contributions over the plan's life
    pub fn total_invested(&self) -> f64 {
        self.monthly_contribution * self.duration_months as f64
    }

    /// Duration in whole completed years
    pub fn whole_years(&self) -> u32 {
        self.duration_months / 12
    }
}
