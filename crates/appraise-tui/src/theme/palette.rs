//! Color palette.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Charts ---
/// Bar colour of the top-locations chart
pub const CHART_BAR: Color = Color::Rgb(69, 115, 103);

/// Proportional-series palette, indexed by position modulo its length
pub const CHART_SERIES: [Color; appraise_app::analytics::CHART_PALETTE_LEN] = [
    Color::Rgb(0x45, 0x73, 0x67),
    Color::Rgb(0xB0, 0x8E, 0x6F),
    Color::Rgb(0x76, 0x41, 0x37),
    Color::Rgb(0x64, 0x74, 0x8b),
    Color::Rgb(0x2c, 0x3e, 0x50),
];

/// Colour for palette slot `slot`
pub fn series_color(slot: usize) -> Color {
    CHART_SERIES[slot % CHART_SERIES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_color_wraps() {
        assert_eq!(series_color(0), CHART_SERIES[0]);
        assert_eq!(series_color(5), CHART_SERIES[0]);
        assert_eq!(series_color(7), CHART_SERIES[2]);
    }
}
