//! CSV export of projection output

use std::io::Write;

use crate::projection::{MonthlySeries, YearlySeries};

/// Write the monthly series as CSV with a header row
pub fn write_monthly_csv<W: Write>(series: &MonthlySeries, writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in &series.rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the yearly series as CSV with a header row
pub fn write_yearly_csv<W: Write>(series: &YearlySeries, writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in &series.rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{aggregate_yearly, compute};

    #[test]
    fn monthly_csv_has_header_and_one_line_per_row() {
        let series = compute(1_000.0, 100.0, 0.05, 1).unwrap();

        let mut buf = Vec::new();
        write_monthly_csv(&series, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "month_index,year_offset,cumulative_investment,cumulative_value"
        );
        assert_eq!(lines.len(), 1 + series.len());
        assert!(lines[1].starts_with("0,"));
    }

    #[test]
    fn yearly_csv_has_header_and_one_line_per_row() {
        let monthly = compute(1_000.0, 100.0, 0.05, 2).unwrap();
        let yearly = aggregate_yearly(&monthly).unwrap();

        let mut buf = Vec::new();
        write_yearly_csv(&yearly, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "year,month_index,cumulative_investment,cumulative_value,gain,yearly_return"
        );
        assert_eq!(lines.len(), 1 + yearly.len());
    }
}
