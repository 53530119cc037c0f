//! Core projection engine for monthly compound-growth projections

use log::debug;

use super::series::{MonthlyRow, MonthlySeries};
use super::state::ProjectionState;
use crate::error::ProjectionError;
use crate::plan::Plan;

/// Main projection engine
///
/// Holds a validated plan and produces the monthly series of cumulative
/// investment versus cumulative compounded value.
pub struct ProjectionEngine {
    plan: Plan,
}

impl ProjectionEngine {
    /// Create a new projection engine for a validated plan
    pub fn new(plan: Plan) -> Self {
        Self { plan }
    }

    /// The plan this engine projects
    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    /// Run the projection over the full horizon
    ///
    /// Produces `n_months + 1` rows: the month-0 snapshot plus one row per
    /// projected month.
    pub fn project(&self) -> MonthlySeries {
        let n_months = self.plan.n_months();
        debug!(
            "projecting {} months at monthly factor {}",
            n_months,
            self.plan.monthly_factor()
        );

        let mut series = MonthlySeries::with_capacity(n_months as usize + 1);
        let mut state = ProjectionState::from_plan(&self.plan);
        series.add_row(Self::record(&state));

        for _month in 1..=n_months {
            state.advance_month(&self.plan);
            series.add_row(Self::record(&state));
        }

        series
    }

    /// Snapshot the current state as an output row
    fn record(state: &ProjectionState) -> MonthlyRow {
        MonthlyRow {
            month_index: state.month_index,
            year_offset: state.year_offset(),
            cumulative_investment: state.cumulative_investment,
            cumulative_value: state.cumulative_value(),
        }
    }
}

/// Validate the four raw inputs and run a projection in one call
pub fn compute(
    initial_investment: f64,
    monthly_investment: f64,
    annual_rate: f64,
    n_years: u32,
) -> Result<MonthlySeries, ProjectionError> {
    let plan = Plan::new(initial_investment, monthly_investment, annual_rate, n_years)?;
    Ok(ProjectionEngine::new(plan).project())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn test_plan() -> Plan {
        Plan::new(10_000.0, 500.0, 0.07, 20).unwrap()
    }

    #[test]
    fn row_count_covers_full_horizon() {
        let series = ProjectionEngine::new(test_plan()).project();

        assert_eq!(series.len(), 241);
        assert_eq!(series.rows[0].month_index, 0);
        assert_eq!(series.rows[240].month_index, 240);
        assert_eq!(series.rows[240].year_offset, 20.0);
    }

    #[test]
    fn investment_follows_contribution_schedule() {
        let series = ProjectionEngine::new(test_plan()).project();

        assert_eq!(series.rows[0].cumulative_investment, 10_000.0);
        for row in &series.rows[1..] {
            let expected = 10_000.0 + f64::from(row.month_index) * 500.0;
            assert_abs_diff_eq!(row.cumulative_investment, expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn investment_is_monotonic() {
        let series = ProjectionEngine::new(test_plan()).project();

        for pair in series.rows.windows(2) {
            assert!(pair[1].cumulative_investment >= pair[0].cumulative_investment);
        }
    }

    #[test]
    fn zero_rate_value_tracks_investment() {
        let series = compute(1_000.0, 250.0, 0.0, 5).unwrap();

        for row in &series.rows {
            assert_eq!(row.cumulative_value, row.cumulative_investment);
        }
    }

    #[test]
    fn lump_sum_compounds_monthly() {
        let series = compute(1_000.0, 0.0, 0.12, 1).unwrap();

        let expected = 1_000.0 * 1.01_f64.powi(12);
        assert_abs_diff_eq!(series.rows[12].cumulative_value, expected, epsilon = 1e-6);
        assert_abs_diff_eq!(series.rows[12].cumulative_value, 1_126.83, epsilon = 1e-2);
    }

    #[test]
    fn contributions_only_zero_rate_totals() {
        let series = compute(0.0, 100.0, 0.0, 2).unwrap();

        let last = &series.rows[24];
        assert_eq!(last.cumulative_investment, 2_400.0);
        assert_eq!(last.cumulative_value, 2_400.0);
    }

    #[test]
    fn negative_rate_decays_value() {
        let series = compute(10_000.0, 0.0, -0.06, 3).unwrap();

        let last = series.final_row().unwrap();
        assert!(last.cumulative_value < 10_000.0);
        assert!(last.cumulative_value > 0.0);
    }

    #[test]
    fn projection_is_deterministic() {
        let first = ProjectionEngine::new(test_plan()).project();
        let second = ProjectionEngine::new(test_plan()).project();

        assert_eq!(first.len(), second.len());
        for (a, b) in first.rows.iter().zip(&second.rows) {
            assert_eq!(a.cumulative_investment.to_bits(), b.cumulative_investment.to_bits());
            assert_eq!(a.cumulative_value.to_bits(), b.cumulative_value.to_bits());
        }
    }

    #[test]
    fn compute_rejects_bad_inputs() {
        assert!(compute(1_000.0, -5.0, 0.05, 10).is_err());
        assert!(compute(1_000.0, 100.0, 0.05, 0).is_err());
    }

    #[test]
    fn year_offset_is_month_over_twelve() {
        let series = compute(0.0, 1.0, 0.0, 1).unwrap();

        assert_eq!(series.rows[6].year_offset, 0.5);
        assert_eq!(series.rows[12].year_offset, 1.0);
    }
}
