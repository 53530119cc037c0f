//! Scenario runner for batch projections
//!
//! Validates the plan once, then allows running many projections under
//! different rate assumptions without revalidating the shared inputs.

use rayon::prelude::*;

use crate::error::ProjectionError;
use crate::plan::Plan;
use crate::projection::{MonthlySeries, ProjectionEngine};

/// Pre-validated scenario runner for batch projections
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(plan);
///
/// // Run many scenarios with different rates
/// let results = runner.sweep_rates(&[0.03, 0.05, 0.07])?;
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    /// Pre-validated base plan
    base_plan: Plan,
}

impl ScenarioRunner {
    /// Create a runner from a validated base plan
    pub fn new(base_plan: Plan) -> Self {
        Self { base_plan }
    }

    /// Project the base plan
    pub fn run(&self) -> MonthlySeries {
        ProjectionEngine::new(self.base_plan.clone()).project()
    }

    /// Project the base plan under a different annual rate
    pub fn run_with_rate(&self, annual_rate: f64) -> Result<MonthlySeries, ProjectionError> {
        let plan = self.base_plan.with_annual_rate(annual_rate)?;
        Ok(ProjectionEngine::new(plan).project())
    }

    /// Project the base plan under each rate, in parallel
    ///
    /// Output order matches the input rates.
    pub fn sweep_rates(&self, rates: &[f64]) -> Result<Vec<MonthlySeries>, ProjectionError> {
        rates
            .par_iter()
            .map(|&rate| self.run_with_rate(rate))
            .collect()
    }

    /// Project many independent plans, in parallel
    pub fn run_batch(plans: &[Plan]) -> Vec<MonthlySeries> {
        plans
            .par_iter()
            .map(|plan| ProjectionEngine::new(plan.clone()).project())
            .collect()
    }

    /// The base plan used for every scenario
    pub fn plan(&self) -> &Plan {
        &self.base_plan
    }
}
