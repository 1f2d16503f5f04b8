//! SIP Projection - Systematic Investment Plan return calculator core
//!
//! This library provides:
//! - Future value projection for monthly SIP plans (annuity-due formula)
//! - Optional inflation adjustment (compound Fisher relation) and
//!   best/worst-case deviation bands
//! - Year-by-year growth series for charting
//! - Indian numbering system words conversion (crore/lakh/thousand)
//! - Batch scenario runner for rate grids and plan portfolios
//!
//! Everything is a pure function of its inputs: no I/O, no shared state.
//! Currency formatting and chart rendering belong to the caller.

pub mod error;
pub mod plan;
pub mod projection;
pub mod scenario;
pub mod words;

// Re-export commonly used types
pub use error::InputError;
pub use plan::SipPlan;
pub use projection::{ProjectionBand, ProjectionConfig, ProjectionEngine, ProjectionResult, YearPoint};
pub use scenario::ScenarioRunner;
pub use words::{amount_in_words, to_indian_words};
