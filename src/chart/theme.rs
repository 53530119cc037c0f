//! Theme tokens for the comparison chart

use ratatui::style::Color;

/// Color palette for the comparison chart
///
/// Always passed explicitly into the renderer, so two charts in the same
/// process can carry different palettes.
#[derive(Debug, Clone, Copy)]
pub struct ChartTheme {
    /// Chart background
    pub background: Color,
    /// "investments" series line
    pub investments: Color,
    /// "returns" series line
    pub returns: Color,
    /// Axis lines and tick labels
    pub axis: Color,
    /// Axis titles and the chart title
    pub labels: Color,
    /// Border around the chart block
    pub border: Color,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ChartTheme {
    /// Palette for dark terminals
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            investments: Color::Rgb(100, 149, 237),
            returns: Color::Rgb(0, 255, 128),
            axis: Color::Rgb(100, 100, 110),
            labels: Color::Rgb(170, 170, 170),
            border: Color::Rgb(0, 200, 200),
        }
    }

    /// Palette for light terminals
    pub fn light() -> Self {
        Self {
            background: Color::White,
            investments: Color::Blue,
            returns: Color::Rgb(0, 128, 0),
            axis: Color::DarkGray,
            labels: Color::Black,
            border: Color::DarkGray,
        }
    }
}
