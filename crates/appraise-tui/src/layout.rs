//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header height: top border + title row + tabs row + bottom border
pub const HEADER_HEIGHT: u16 = 4;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// App title and view tabs
    pub header: Rect,

    /// The live view
    pub content: Rect,

    /// Key hints and dataset note; zero-height when hidden
    pub footer: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect, show_footer: bool) -> ScreenAreas {
    let footer_height = if show_footer { 1 } else { 0 };

    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(footer_height),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        content: chunks[1],
        footer: chunks[2],
    }
}

/// Split `area` into two columns, left one `left_percent` wide
pub fn columns(area: Rect, left_percent: u16) -> (Rect, Rect) {
    let chunks = Layout::horizontal([
        Constraint::Percentage(left_percent),
        Constraint::Percentage(100 - left_percent.min(100)),
    ])
    .split(area);
    (chunks[0], chunks[1])
}
