//! Input validation errors

use thiserror::Error;

/// Invalid-input error for plan construction and word conversion
///
/// Every variant means the caller handed us something outside the declared
/// input domain. There is no partial result: validation happens before any
/// computation starts.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InputError {
    /// Contribution must be positive and finite
    #[error("contribution must be a positive finite amount, got {0}")]
    InvalidContribution(f64),

    /// Duration must be at least one month
    #[error("duration must be at least one month")]
    InvalidDuration,

    /// Annual rate must be a finite number (negative is allowed)
    #[error("annual rate must be finite, got {0}")]
    NonFiniteRate(f64),

    /// Inflation rate must be a finite number
    #[error("inflation rate must be finite, got {0}")]
    NonFiniteInflation(f64),

    /// Deviation must be non-negative and finite
    #[error("deviation must be a non-negative finite percentage, got {0}")]
    InvalidDeviation(f64),

    /// Amount for word conversion must be non-negative and finite
    #[error("amount must be a non-negative finite number, got {0}")]
    InvalidAmount(f64),
}
