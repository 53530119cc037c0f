//! Compare projections for one plan across several annual rates
//!
//! Usage: cargo run --bin compare_rates -- <initial> <monthly> <n_years> <rate> [<rate> ...]

use std::env;
use std::process;

use investment_system::{aggregate_yearly, Plan, ScenarioRunner};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 4 {
        eprintln!("usage: compare_rates <initial> <monthly> <n_years> <rate> [<rate> ...]");
        process::exit(2);
    }

    let initial: f64 = args[0].parse().expect("initial must be a number");
    let monthly: f64 = args[1].parse().expect("monthly must be a number");
    let n_years: u32 = args[2].parse().expect("n_years must be a whole number of years");
    let rates: Vec<f64> = args[3..]
        .iter()
        .map(|arg| arg.parse().expect("rate must be a number"))
        .collect();

    let base_plan =
        Plan::new(initial, monthly, rates[0], n_years).expect("invalid plan inputs");
    let runner = ScenarioRunner::new(base_plan);

    println!("{}", "=".repeat(60));
    println!(
        "Rate comparison: initial {:.2}, monthly {:.2}, {} years",
        initial, monthly, n_years
    );
    println!("{}", "=".repeat(60));
    println!(
        "{:>8} {:>14} {:>14} {:>14} {:>14}",
        "Rate", "Invested", "Value", "Gain", "Final YoY"
    );

    let results = runner.sweep_rates(&rates).expect("invalid rate");

    for (rate, series) in rates.iter().zip(&results) {
        let summary = series.summary();
        let yearly = aggregate_yearly(series).expect("projection is never empty");
        let final_yoy = yearly.rows.last().map(|r| r.yearly_return).unwrap_or(0);

        println!(
            "{:>7.2}% {:>14.2} {:>14.2} {:>14.2} {:>14}",
            rate * 100.0,
            summary.total_invested,
            summary.total_value,
            summary.gain,
            final_yoy
        );
    }
}
