//! Closed-form annuity-due future value
//!
//! The core compound-growth formula shared by every projection path

/// Calculate the future value of a monthly SIP (annuity-due).
///
/// Contributions are made at the start of each month and compound at the
/// monthly equivalent of the given annual rate:
///
/// ```text
/// i  = annual_rate_pct / 100 / 12
/// FV = contribution * ((1 + i)^n - 1) / i * (1 + i)
/// ```
///
/// # Arguments
/// * `contribution` - Amount invested each month (must be > 0, caller-validated)
/// * `annual_rate_pct` - Annual growth rate in percent; zero and negative allowed
/// * `duration_months` - Number of contributions (must be >= 1, caller-validated)
///
/// # Returns
/// Finite future value for all valid inputs. At a zero rate the closed form
/// degenerates to 0/0, so that case returns the plain contribution sum
/// `contribution * duration_months` instead of dividing by zero.
pub fn future_value(contribution: f64, annual_rate_pct: f64, duration_months: u32) -> f64 {
    let monthly_rate = annual_rate_pct / 100.0 / 12.0;
    let n = duration_months as f64;

    if monthly_rate == 0.0 {
        return contribution * n;
    }

    let growth = (1.0 + monthly_rate).powi(duration_months as i32);
    contribution * (growth - 1.0) / monthly_rate * (1.0 + monthly_rate)
}

/// Convert a nominal annual rate to a real (inflation-adjusted) rate.
///
/// Uses the compound (Fisher) relation rather than simple subtraction:
///
/// ```text
/// real = ((1 + nominal/100) / (1 + inflation/100) - 1) * 100
/// ```
///
/// Both arguments and the result are in percent. The result is negative
/// whenever inflation outpaces the nominal rate.
pub fn real_rate(nominal_pct: f64, inflation_pct: f64) -> f64 {
    ((1.0 + nominal_pct / 100.0) / (1.0 + inflation_pct / 100.0) - 1.0) * 100.0
}
