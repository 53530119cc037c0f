//! Yearly aggregation of the monthly projection series

use log::debug;
use serde::{Deserialize, Serialize};

use super::series::MonthlySeries;
use crate::error::ProjectionError;

/// One row per year boundary (months 0, 12, 24, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyRow {
    /// Year boundary index (month_index / 12)
    pub year: u32,

    /// Month the boundary falls on
    pub month_index: u32,

    /// Total principal contributed through this boundary
    pub cumulative_investment: f64,

    /// Compounded value at this boundary, truncated toward zero
    pub cumulative_value: i64,

    /// Truncated value minus cumulative investment
    pub gain: f64,

    /// Difference of truncated values between consecutive boundaries
    pub yearly_return: i64,
}

/// Yearly aggregation output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearlySeries {
    pub rows: Vec<YearlyRow>,
}

impl YearlySeries {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Downsample a monthly series to one row per year boundary
///
/// The first row's `yearly_return` is 0, not missing. Values are truncated
/// before the year-over-year difference is taken, so the return column stays
/// consistent with the truncated values shown beside it.
pub fn aggregate_yearly(series: &MonthlySeries) -> Result<YearlySeries, ProjectionError> {
    if series.is_empty() {
        return Err(ProjectionError::invalid_input(
            "monthly_series",
            "cannot aggregate an empty series",
        ));
    }

    let mut rows = Vec::with_capacity(series.len() / 12 + 1);
    let mut prev_value: Option<i64> = None;

    for row in series.rows.iter().filter(|r| r.month_index % 12 == 0) {
        let truncated = row.cumulative_value.trunc() as i64;

        rows.push(YearlyRow {
            year: row.month_index / 12,
            month_index: row.month_index,
            cumulative_investment: row.cumulative_investment,
            cumulative_value: truncated,
            gain: truncated as f64 - row.cumulative_investment,
            yearly_return: prev_value.map_or(0, |prev| truncated - prev),
        });

        prev_value = Some(truncated);
    }

    debug!(
        "aggregated {} monthly rows into {} yearly rows",
        series.len(),
        rows.len()
    );

    Ok(YearlySeries { rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{compute, MonthlyRow};

    fn row(month_index: u32, invested: f64, value: f64) -> MonthlyRow {
        MonthlyRow {
            month_index,
            year_offset: f64::from(month_index) / 12.0,
            cumulative_investment: invested,
            cumulative_value: value,
        }
    }

    #[test]
    fn two_year_series_yields_three_boundaries() {
        let monthly = compute(1_000.0, 100.0, 0.05, 2).unwrap();
        assert_eq!(monthly.len(), 25);

        let yearly = aggregate_yearly(&monthly).unwrap();
        assert_eq!(yearly.len(), 3);

        let months: Vec<u32> = yearly.rows.iter().map(|r| r.month_index).collect();
        assert_eq!(months, vec![0, 12, 24]);
        assert_eq!(yearly.rows[0].yearly_return, 0);
        assert_eq!(yearly.rows[0].year, 0);
        assert_eq!(yearly.rows[2].year, 2);
    }

    #[test]
    fn value_truncates_toward_zero() {
        let monthly = compute(1_000.0, 0.0, 0.12, 1).unwrap();
        let yearly = aggregate_yearly(&monthly).unwrap();

        // 1000 * 1.01^12 = 1126.83 truncates to 1126.
        assert_eq!(yearly.rows[1].cumulative_value, 1_126);
        assert_eq!(yearly.rows[1].gain, 126.0);
    }

    #[test]
    fn yearly_return_diffs_truncated_values() {
        let series = MonthlySeries {
            rows: vec![row(0, 100.0, 100.9), row(12, 100.0, 301.2)],
        };

        let yearly = aggregate_yearly(&series).unwrap();
        // trunc(301.2) - trunc(100.9) = 201; diffing before truncation would
        // give trunc(200.3) = 200 instead.
        assert_eq!(yearly.rows[1].yearly_return, 201);
    }

    #[test]
    fn gain_is_zero_at_zero_rate() {
        let monthly = compute(500.0, 50.0, 0.0, 3).unwrap();
        let yearly = aggregate_yearly(&monthly).unwrap();

        for yr in &yearly.rows {
            assert_eq!(yr.cumulative_value, yr.cumulative_investment as i64);
            assert_eq!(yr.gain, 0.0);
        }
    }

    #[test]
    fn returns_sum_to_final_value_delta() {
        let monthly = compute(2_000.0, 150.0, 0.08, 10).unwrap();
        let yearly = aggregate_yearly(&monthly).unwrap();

        let total: i64 = yearly.rows.iter().map(|r| r.yearly_return).sum();
        let delta = yearly.rows.last().unwrap().cumulative_value - yearly.rows[0].cumulative_value;
        assert_eq!(total, delta);
    }

    #[test]
    fn empty_series_rejected() {
        let series = MonthlySeries { rows: Vec::new() };
        let err = aggregate_yearly(&series).unwrap_err();
        let ProjectionError::InvalidInput { field, .. } = err;
        assert_eq!(field, "monthly_series");
    }
}
