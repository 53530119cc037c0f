//! Terminal chart rendering for projection results

mod renderer;
mod theme;

pub use renderer::{format_currency, ComparisonChart};
pub use theme::ChartTheme;
