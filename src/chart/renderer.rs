//! Line-chart comparison of investments versus returns

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Widget},
};

use super::theme::ChartTheme;
use crate::plan::Plan;
use crate::projection::MonthlySeries;

/// Comparison chart widget
///
/// Plots the cumulative investment and cumulative value series of one
/// projection against the year-offset axis, titled with a one-line summary
/// of the plan and its outcome.
pub struct ComparisonChart<'a> {
    plan: &'a Plan,
    series: &'a MonthlySeries,
    theme: ChartTheme,
}

impl<'a> ComparisonChart<'a> {
    pub fn new(plan: &'a Plan, series: &'a MonthlySeries, theme: ChartTheme) -> Self {
        Self {
            plan,
            series,
            theme,
        }
    }

    /// Title line summarizing the plan and its outcome
    pub fn title(&self) -> String {
        let summary = self.series.summary();
        [
            format!(
                "monthly inv: {}",
                format_currency(self.plan.monthly_investment)
            ),
            format!("rate: {}", format_percent(self.plan.annual_rate)),
            format!("number of years: {}", self.plan.n_years),
            format!("total inv: {}", format_currency(summary.total_invested)),
            format!("total return: {}", format_currency(summary.total_value)),
        ]
        .join(",   ")
    }
}

impl Widget for ComparisonChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = self.title();

        let investments: Vec<(f64, f64)> = self
            .series
            .rows
            .iter()
            .map(|r| (r.year_offset, r.cumulative_investment))
            .collect();
        let returns: Vec<(f64, f64)> = self
            .series
            .rows
            .iter()
            .map(|r| (r.year_offset, r.cumulative_value))
            .collect();

        // Axis bounds with a little headroom above the curves
        let x_max = self
            .series
            .final_row()
            .map(|r| r.year_offset)
            .unwrap_or(0.0)
            .max(1.0);
        let all_values = investments.iter().chain(returns.iter()).map(|&(_, v)| v);
        let y_min = all_values.clone().fold(f64::INFINITY, f64::min).min(0.0);
        let y_max = all_values.fold(f64::NEG_INFINITY, f64::max).max(0.0);
        let y_range = y_max - y_min;
        let y_pad = if y_range > 0.0 { y_range * 0.05 } else { 100.0 };
        let y_lower = y_min - y_pad;
        let y_upper = y_max + y_pad;
        let y_mid = (y_lower + y_upper) / 2.0;

        let datasets = vec![
            Dataset::default()
                .name("investments")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(self.theme.investments))
                .data(&investments),
            Dataset::default()
                .name("returns")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(self.theme.returns))
                .data(&returns),
        ];

        let x_labels = vec![
            Span::raw("0"),
            Span::raw(format!("{}", (x_max / 2.0).round() as i64)),
            Span::raw(format!("{}", x_max.round() as i64)),
        ];
        let y_labels = vec![
            Span::raw(format_currency(y_lower)),
            Span::raw(format_currency(y_mid)),
            Span::raw(format_currency(y_upper)),
        ];

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.border))
                    .style(Style::default().bg(self.theme.background)),
            )
            .x_axis(
                Axis::default()
                    .title(Span::styled(
                        "Years",
                        Style::default().fg(self.theme.labels),
                    ))
                    .style(Style::default().fg(self.theme.axis))
                    .bounds([0.0, x_max])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .title(Span::styled(
                        "Total return",
                        Style::default().fg(self.theme.labels),
                    ))
                    .style(Style::default().fg(self.theme.axis))
                    .bounds([y_lower, y_upper])
                    .labels(y_labels),
            );

        chart.render(area, buf);
    }
}

/// Format an amount with thousands separators, no decimals, and the
/// currency suffix
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let sign = if rounded < 0 { "-" } else { "" };
    let digits = rounded.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}\u{20ac}")
}

/// Format a rate as a whole percentage
pub fn format_percent(rate: f64) -> String {
    format!("{:.0}%", rate * 100.0)
}
