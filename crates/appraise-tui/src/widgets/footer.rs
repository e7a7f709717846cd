//! Footer with key hints and the dataset note

use appraise_app::state::ViewKind;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

/// Provenance note shown on every screen
pub const DATASET_NOTE: &str = "Based on 2024-25 listing dataset";

pub struct Footer {
    active: ViewKind,
}

impl Footer {
    pub fn new(active: ViewKind) -> Self {
        Self { active }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.active {
            ViewKind::Analytics => &[
                ("F2", "predictor"),
                ("r", "reload"),
                ("q", "quit"),
            ],
            ViewKind::Estimator => &[
                ("F1", "analytics"),
                ("Enter", "next"),
                ("Tab", "focus"),
                ("^R", "retry"),
                ("Esc", "quit"),
            ],
        }
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        for (key, label) in self.hints() {
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {label}  "), styles::text_muted()));
        }
        let hints = Line::from(spans);
        let hints_width = hints.width() as u16;
        buf.set_line(area.x, area.y, &hints, area.width);

        let note_width = DATASET_NOTE.width() as u16 + 1;
        if hints_width + note_width <= area.width {
            let x = area.x + area.width - note_width;
            buf.set_line(
                x,
                area.y,
                &Line::from(Span::styled(DATASET_NOTE, styles::text_muted())),
                note_width,
            );
        }
    }
}
