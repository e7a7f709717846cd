//! Test utilities for TUI rendering verification
//!
//! Provides helpers for testing widgets and full-screen rendering
//! using ratatui's TestBackend.

use appraise_app::config::Settings;
use appraise_app::state::{AppState, ViewKind};
use appraise_app::Message;
use appraise_core::{AnalyticsSnapshot, BhkPrice, LocationCatalog, LocationPrice};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 100;
pub const TEST_HEIGHT: u16 = 36;

/// Compact terminal for testing small layouts
pub const COMPACT_WIDTH: u16 = 40;
pub const COMPACT_HEIGHT: u16 = 12;

/// Test utility wrapper around ratatui's TestBackend terminal.
pub struct TestTerminal {
    /// The underlying ratatui terminal with TestBackend.
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Create a new test terminal with standard dimensions
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    /// Create a new test terminal with compact dimensions (40x12)
    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    /// Create a new test terminal with custom dimensions
    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    /// Get the full terminal area
    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    /// Render a widget to the terminal
    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draws a frame using a custom rendering function.
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    /// Get the underlying buffer for assertions
    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere
    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    /// Check if a specific line contains text
    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        get_line_content(self.buffer(), line).contains(text)
    }

    /// Get all content as a string (for debugging)
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert buffer to string representation
fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        result.push_str(&get_line_content(buffer, y));
        result.push('\n');
    }
    result
}

/// Get content of a specific line
fn get_line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

/// Snapshot with three locations and three BHK groups
pub fn sample_snapshot() -> AnalyticsSnapshot {
    AnalyticsSnapshot {
        top_locations: vec![
            LocationPrice {
                name: "Sindhu Bhavan".into(),
                price: 15_000_000.0,
            },
            LocationPrice {
                name: "Ambli".into(),
                price: 12_500_000.0,
            },
            LocationPrice {
                name: "Bodakdev".into(),
                price: 11_000_000.0,
            },
        ],
        bhk_distribution: vec![
            BhkPrice {
                bhk: 2,
                avg_price: 4_500_000.0,
            },
            BhkPrice {
                bhk: 3,
                avg_price: 8_500_000.0,
            },
            BhkPrice {
                bhk: 4,
                avg_price: 15_000_000.0,
            },
        ],
    }
}

/// AppState with the analytics view mounted and still loading
pub fn analytics_state() -> AppState {
    AppState::new()
}

/// AppState with the analytics view holding [`sample_snapshot`]
pub fn loaded_analytics_state() -> AppState {
    let mut state = analytics_state();
    let generation = state.active_generation();
    appraise_app::handler::update(
        &mut state,
        Message::AnalyticsLoaded {
            generation,
            snapshot: sample_snapshot(),
        },
    );
    state
}

/// AppState with the estimator mounted and a two-name catalog loaded
pub fn estimator_state() -> AppState {
    let mut settings = Settings::default();
    settings.ui.default_view = ViewKind::Estimator;
    let mut state = AppState::with_settings(settings);
    let generation = state.active_generation();
    appraise_app::handler::update(
        &mut state,
        Message::LocationsLoaded {
            generation,
            catalog: LocationCatalog::from_names(["Sindhu Bhavan", "Bopal"]),
        },
    );
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_terminal_creation() {
        let term = TestTerminal::new();
        assert_eq!(term.area().width, TEST_WIDTH);
        assert_eq!(term.area().height, TEST_HEIGHT);
    }

    #[test]
    fn test_compact_terminal() {
        let term = TestTerminal::compact();
        assert_eq!(term.area().width, COMPACT_WIDTH);
        assert_eq!(term.area().height, COMPACT_HEIGHT);
    }

    #[test]
    fn test_buffer_contains() {
        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("Hello World"), term.area());

        assert!(term.buffer_contains("Hello World"));
        assert!(!term.buffer_contains("Goodbye"));
        assert!(term.line_contains(0, "Hello"));
    }

    #[test]
    fn test_fixture_states() {
        assert!(loaded_analytics_state().analytics().unwrap().snapshot().is_some());
        assert_eq!(
            estimator_state().estimator().unwrap().locations.option_count(),
            3
        );
    }
}
