//! Projection engine producing monthly and yearly series

mod engine;
mod series;
mod state;
mod yearly;

pub use engine::{compute, ProjectionEngine};
pub use series::{MonthlyRow, MonthlySeries, ProjectionSummary};
pub use state::ProjectionState;
pub use yearly::{aggregate_yearly, YearlyRow, YearlySeries};
