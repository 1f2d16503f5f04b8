//! Scenario runner for batch projections
//!
//! Builds the engine once, then fans the same options out over many plans
//! or many rate assumptions without reconstructing anything per call.

use rayon::prelude::*;

use crate::error::InputError;
use crate::plan::SipPlan;
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};

/// Pre-configured runner for batch projections
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(ProjectionConfig::default())?;
/// for rate in [8.0, 10.0, 12.0] {
///     let result = runner.run_at_rate(&plan, rate);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Create a runner with the given projection options
    pub fn new(config: ProjectionConfig) -> Result<Self, InputError> {
        Ok(Self {
            engine: ProjectionEngine::new(config)?,
        })
    }

    /// Run a single projection
    pub fn run(&self, plan: &SipPlan) -> ProjectionResult {
        self.engine.project(plan)
    }

    /// Project many plans in parallel with the same options
    pub fn run_batch(&self, plans: &[SipPlan]) -> Vec<ProjectionResult> {
        plans.par_iter().map(|plan| self.engine.project(plan)).collect()
    }

    /// Project one plan across a grid of rate assumptions
    ///
    /// Each scenario replaces the plan's own rate; contribution and
    /// duration stay fixed. Results come back in the grid's order. Every
    /// grid rate is validated before any projection runs: a non-finite
    /// rate fails the whole call with no partial results.
    pub fn run_rate_scenarios(
        &self,
        plan: &SipPlan,
        rates_pct: &[f64],
    ) -> Result<Vec<ProjectionResult>, InputError> {
        let scenarios = rates_pct
            .iter()
            .map(|&rate| plan.with_rate(rate))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(scenarios
            .iter()
            .map(|scenario| self.engine.project(scenario))
            .collect())
    }

    /// The engine backing this runner
    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self {
            engine: ProjectionEngine::nominal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_plan() -> SipPlan {
        SipPlan::from_years(5000.0, 12.0, 10).unwrap()
    }

    #[test]
    fn test_rate_scenarios_ordered_by_rate() {
        let runner = ScenarioRunner::default();
        let results = runner
            .run_rate_scenarios(&test_plan(), &[8.0, 10.0, 12.0])
            .unwrap();

        assert_eq!(results.len(), 3);
        // Higher rate must produce a higher corpus
        assert!(results[1].future_value > results[0].future_value);
        assert!(results[2].future_value > results[1].future_value);
    }

    #[test]
    fn test_rate_scenarios_reject_non_finite_rate() {
        let runner = ScenarioRunner::default();

        // One bad rate fails the whole grid; no NaN result may leak out
        let results = runner.run_rate_scenarios(&test_plan(), &[8.0, f64::NAN, 12.0]);
        assert!(matches!(results, Err(InputError::NonFiniteRate(_))));

        let results = runner.run_rate_scenarios(&test_plan(), &[f64::INFINITY]);
        assert!(matches!(results, Err(InputError::NonFiniteRate(_))));
    }

    #[test]
    fn test_batch_matches_single_runs() {
        let runner = ScenarioRunner::default();
        let plans = vec![
            test_plan(),
            SipPlan::from_years(2000.0, 8.0, 5).unwrap(),
            SipPlan::new(750.0, 0.0, 18).unwrap(),
        ];

        let batch = runner.run_batch(&plans);
        assert_eq!(batch.len(), plans.len());
        for (plan, result) in plans.iter().zip(&batch) {
            assert_eq!(*result, runner.run(plan));
        }
    }
}
