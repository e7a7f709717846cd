//! Custom widget components

mod analytics;
mod charts;
mod estimator;
mod footer;
mod header;
mod result_card;

pub use analytics::AnalyticsPanel;
pub use charts::{BhkDistributionChart, TopLocationsChart};
pub use estimator::EstimatorForm;
pub use footer::Footer;
pub use header::MainHeader;
pub use result_card::ValuationCard;

/// Braille spinner frames for loading indicators
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner glyph for animation frame `frame`
pub fn spinner(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}
