//! Output records for monthly projections

use serde::{Deserialize, Serialize};

/// A single row of projection output for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRow {
    /// Projection month (0-indexed)
    pub month_index: u32,

    /// Fractional years elapsed (month_index / 12)
    pub year_offset: f64,

    /// Total principal contributed through this month
    pub cumulative_investment: f64,

    /// Compounded value of all contributions through this month
    pub cumulative_value: f64,
}

/// Complete monthly projection output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySeries {
    /// One row per month, index 0 through the full horizon
    pub rows: Vec<MonthlyRow>,
}

impl MonthlySeries {
    /// Create an empty series with room for `capacity` rows
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
        }
    }

    /// Append a row
    pub fn add_row(&mut self, row: MonthlyRow) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Final row of the projection
    pub fn final_row(&self) -> Option<&MonthlyRow> {
        self.rows.last()
    }

    /// Summary statistics from the final row
    pub fn summary(&self) -> ProjectionSummary {
        let total_invested = self.rows.last().map(|r| r.cumulative_investment).unwrap_or(0.0);
        let total_value = self.rows.last().map(|r| r.cumulative_value).unwrap_or(0.0);

        ProjectionSummary {
            total_months: self.rows.len().saturating_sub(1) as u32,
            total_invested,
            total_value,
            gain: total_value - total_invested,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    /// Months projected after month 0
    pub total_months: u32,

    /// Principal contributed over the full horizon
    pub total_invested: f64,

    /// Compounded value at the end of the horizon
    pub total_value: f64,

    /// Final value minus final investment
    pub gain: f64,
}
