//! Investment System - Compound-growth projection engine for recurring investment plans
//!
//! This library provides:
//! - Monthly projections of cumulative investment versus compounded value
//! - Yearly aggregation with gain and year-over-year return
//! - A terminal comparison chart of investments versus returns
//! - Scenario sweeps across rate assumptions
//! - CSV export of both series

pub mod chart;
pub mod error;
pub mod export;
pub mod plan;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use chart::{ChartTheme, ComparisonChart};
pub use error::ProjectionError;
pub use plan::Plan;
pub use projection::{aggregate_yearly, compute, MonthlySeries, ProjectionEngine, YearlySeries};
pub use scenario::ScenarioRunner;
