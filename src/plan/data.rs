//! Validated input parameters for a projection

use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;

/// A recurring investment plan
///
/// Validated once at construction; projection code can assume the amounts
/// are finite and non-negative and the horizon covers at least one year.
/// The annual rate is unrestricted apart from finiteness, so negative
/// (decaying) rates are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Principal invested at month 0
    pub initial_investment: f64,

    /// Amount added at the start of each subsequent month
    pub monthly_investment: f64,

    /// Nominal annual growth rate, compounded monthly
    pub annual_rate: f64,

    /// Projection horizon in whole years
    pub n_years: u32,
}

impl Plan {
    /// Validate the four raw inputs into a plan
    pub fn new(
        initial_investment: f64,
        monthly_investment: f64,
        annual_rate: f64,
        n_years: u32,
    ) -> Result<Self, ProjectionError> {
        if !initial_investment.is_finite() || initial_investment < 0.0 {
            return Err(ProjectionError::invalid_input(
                "initial_investment",
                format!("must be a non-negative amount, got {initial_investment}"),
            ));
        }
        if !monthly_investment.is_finite() || monthly_investment < 0.0 {
            return Err(ProjectionError::invalid_input(
                "monthly_investment",
                format!("must be a non-negative amount, got {monthly_investment}"),
            ));
        }
        if !annual_rate.is_finite() {
            return Err(ProjectionError::invalid_input(
                "annual_rate",
                format!("must be a finite rate, got {annual_rate}"),
            ));
        }
        if n_years == 0 {
            return Err(ProjectionError::invalid_input(
                "n_years",
                "horizon must cover at least one year",
            ));
        }

        Ok(Self {
            initial_investment,
            monthly_investment,
            annual_rate,
            n_years,
        })
    }

    /// Per-month growth multiplier under monthly compounding
    pub fn monthly_factor(&self) -> f64 {
        1.0 + self.annual_rate / 12.0
    }

    /// Number of projected months after month 0
    pub fn n_months(&self) -> u32 {
        12 * self.n_years
    }

    /// Same plan under a different annual rate
    pub fn with_annual_rate(&self, annual_rate: f64) -> Result<Self, ProjectionError> {
        Self::new(
            self.initial_investment,
            self.monthly_investment,
            annual_rate,
            self.n_years,
        )
    }
}
