//! Future value projection for SIP plans

mod annuity;
mod engine;
mod result;

pub use annuity::{future_value, real_rate};
pub use engine::{ProjectionConfig, ProjectionEngine};
pub use result::{ProjectionBand, ProjectionResult, YearPoint};
