//! Investment projection CLI
//!
//! Computes the monthly and yearly projections for a recurring investment
//! plan and optionally renders the comparison chart in the terminal.

use std::fs::File;
use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use investment_system::chart::format_currency;
use investment_system::{
    aggregate_yearly, export, ChartTheme, ComparisonChart, MonthlySeries, Plan, ProjectionEngine,
    YearlySeries,
};

#[derive(Debug, Parser)]
#[command(
    name = "investment_system",
    about = "Compound-growth projection for a recurring investment plan"
)]
struct Cli {
    /// Principal invested at month 0
    initial_investment: f64,

    /// Amount added at the start of each subsequent month
    monthly_investment: f64,

    /// Nominal annual growth rate, e.g. 0.07 for 7%
    #[arg(allow_negative_numbers = true)]
    annual_rate: f64,

    /// Projection horizon in whole years
    n_years: u32,

    /// Write the monthly series to a CSV file
    #[arg(long, value_name = "PATH")]
    csv: Option<String>,

    /// Write the yearly series to a CSV file
    #[arg(long, value_name = "PATH")]
    yearly_csv: Option<String>,

    /// Print the monthly series as JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Render the comparison chart in the terminal (any key exits)
    #[arg(long)]
    chart: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let plan = Plan::new(
        cli.initial_investment,
        cli.monthly_investment,
        cli.annual_rate,
        cli.n_years,
    )?;
    let series = ProjectionEngine::new(plan.clone()).project();
    let yearly = aggregate_yearly(&series)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&series)?);
    } else {
        print_monthly(&series);
        print_yearly(&yearly);
        print_summary(&series);
    }

    if let Some(path) = &cli.csv {
        let file = File::create(path).with_context(|| format!("unable to create {path}"))?;
        export::write_monthly_csv(&series, file)?;
        println!("\nMonthly series written to: {path}");
    }

    if let Some(path) = &cli.yearly_csv {
        let file = File::create(path).with_context(|| format!("unable to create {path}"))?;
        export::write_yearly_csv(&yearly, file)?;
        println!("Yearly series written to: {path}");
    }

    if cli.chart {
        show_chart(&plan, &series)?;
    }

    Ok(())
}

fn print_monthly(series: &MonthlySeries) {
    println!("Projection ({} months):", series.len().saturating_sub(1));
    println!(
        "{:>5} {:>7} {:>14} {:>14}",
        "Month", "Years", "Invested", "Value"
    );
    println!("{}", "-".repeat(44));

    for row in series.rows.iter().take(24) {
        println!(
            "{:>5} {:>7.2} {:>14.2} {:>14.2}",
            row.month_index, row.year_offset, row.cumulative_investment, row.cumulative_value
        );
    }

    if series.len() > 24 {
        println!("... ({} more months)", series.len() - 24);
    }
}

fn print_yearly(yearly: &YearlySeries) {
    println!("\nYearly summary:");
    println!(
        "{:>5} {:>14} {:>14} {:>14} {:>14}",
        "Year", "Invested", "Value", "Gain", "YoY return"
    );
    println!("{}", "-".repeat(65));

    for row in &yearly.rows {
        println!(
            "{:>5} {:>14.2} {:>14} {:>14.2} {:>14}",
            row.year, row.cumulative_investment, row.cumulative_value, row.gain, row.yearly_return
        );
    }
}

fn print_summary(series: &MonthlySeries) {
    let summary = series.summary();
    println!("\nSummary:");
    println!("  Total months: {}", summary.total_months);
    println!("  Total invested: {}", format_currency(summary.total_invested));
    println!("  Total value: {}", format_currency(summary.total_value));
    println!("  Gain: {}", format_currency(summary.gain));
}

/// One-shot chart display: draw once, block until a key, restore the screen
fn show_chart(plan: &Plan, series: &MonthlySeries) -> Result<()> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    terminal.draw(|frame| {
        let chart = ComparisonChart::new(plan, series, ChartTheme::default());
        frame.render_widget(chart, frame.area());
    })?;

    loop {
        if let Event::Key(_) = event::read()? {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
