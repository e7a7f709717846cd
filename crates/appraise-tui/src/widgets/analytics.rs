//! Market analytics panel
//!
//! While the snapshot is loading only a spinner is drawn. Once it resolves the
//! panel shows the headline facts and both charts; a failed read leaves the
//! chart panels empty with a short note.

use appraise_app::analytics::{
    axis_ticks, bar_series, proportion_series, AnalyticsView, SUMMARY_FACTS,
};
use appraise_core::{AnalyticsSnapshot, FetchStatus};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::layout;
use crate::theme::styles;

use super::{spinner, BhkDistributionChart, TopLocationsChart};

pub const LOADING_MESSAGE: &str = "Gathering market data...";
pub const NO_DATA_MESSAGE: &str = "No market data";
pub const TOP_LOCATIONS_TITLE: &str = "Top 10 Expensive Locations";
pub const BHK_TITLE: &str = "Price Distribution by BHK";

/// Number of value ticks under the bar chart
const AXIS_TICKS: usize = 5;

pub struct AnalyticsPanel<'a> {
    view: &'a AnalyticsView,
    market: &'a str,
    spinner_frame: usize,
}

impl<'a> AnalyticsPanel<'a> {
    pub fn new(view: &'a AnalyticsView, market: &'a str, spinner_frame: usize) -> Self {
        Self {
            view,
            market,
            spinner_frame,
        }
    }

    fn render_loading(&self, area: Rect, buf: &mut Buffer) {
        let y = area.y + area.height / 2;
        let line = Line::from(vec![
            Span::styled(spinner(self.spinner_frame), styles::accent()),
            Span::styled(format!(" {LOADING_MESSAGE}"), styles::text_secondary()),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(Rect::new(area.x, y, area.width, 1), buf);
    }

    fn render_heading(&self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width < 2 {
            return;
        }
        let mut spans = vec![Span::styled(
            format!("{} Market Overview", self.market),
            styles::text_bright_bold(),
        )];
        if let Some(at) = self.view.fetched_at {
            spans.push(Span::styled(
                format!("  updated {}", at.format("%H:%M:%S")),
                styles::text_muted(),
            ));
        }
        buf.set_line(area.x + 1, area.y, &Line::from(spans), area.width.saturating_sub(1));
    }

    fn render_facts(&self, area: Rect, buf: &mut Buffer) {
        let cells = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(area);
        for (fact, cell) in SUMMARY_FACTS.iter().zip(cells.iter()) {
            Paragraph::new(vec![
                Line::styled(fact.label, styles::text_muted()),
                Line::styled(fact.value, styles::accent_bold()),
            ])
            .block(styles::glass_block(false))
            .render(*cell, buf);
        }
    }

    fn render_charts(&self, snapshot: Option<&AnalyticsSnapshot>, area: Rect, buf: &mut Buffer) {
        let (left, right) = layout::columns(area, 60);

        let bars_block = styles::titled_block(TOP_LOCATIONS_TITLE, false);
        let bars_area = bars_block.inner(left);
        bars_block.render(left, buf);

        let pie_block = styles::titled_block(BHK_TITLE, false);
        let pie_area = pie_block.inner(right);
        pie_block.render(right, buf);

        let Some(snapshot) = snapshot else {
            for inner in [bars_area, pie_area] {
                Paragraph::new(Line::styled(NO_DATA_MESSAGE, styles::text_muted()))
                    .alignment(Alignment::Center)
                    .render(inner, buf);
            }
            return;
        };

        let points = bar_series(snapshot);
        let ticks = axis_ticks(&points, AXIS_TICKS);
        TopLocationsChart::new(&points, &ticks).render(bars_area, buf);

        let slices = proportion_series(snapshot);
        BhkDistributionChart::new(&slices).render(pie_area, buf);
    }
}

impl Widget for AnalyticsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        if self.view.is_loading() {
            self.render_loading(area, buf);
            return;
        }

        let [heading, facts, charts] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Min(3),
        ])
        .areas(area);

        self.render_heading(heading, buf);
        self.render_facts(facts, buf);

        let snapshot = match &self.view.status {
            FetchStatus::Loaded(snapshot) => Some(snapshot),
            _ => None,
        };
        self.render_charts(snapshot, charts, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{analytics_state, loaded_analytics_state, TestTerminal};
    use appraise_app::state::ViewGeneration;

    fn render(view: &AnalyticsView) -> TestTerminal {
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(AnalyticsPanel::new(view, "Ahmedabad", 0), area);
        term
    }

    #[test]
    fn test_loading_shows_only_placeholder() {
        let state = analytics_state();
        let term = render(state.analytics().unwrap());

        assert!(term.buffer_contains(LOADING_MESSAGE));
        assert!(!term.buffer_contains(TOP_LOCATIONS_TITLE));
        assert!(!term.buffer_contains("Market Trend"));
    }

    #[test]
    fn test_loaded_shows_facts_and_charts() {
        let state = loaded_analytics_state();
        let term = render(state.analytics().unwrap());

        assert!(term.buffer_contains("Ahmedabad Market Overview"));
        assert!(term.buffer_contains("Market Trend"));
        assert!(term.buffer_contains("Bullish (+4.2%)"));
        assert!(term.buffer_contains("Hottest Area"));
        assert!(term.buffer_contains("Avg. 3BHK Price"));
        assert!(term.buffer_contains(TOP_LOCATIONS_TITLE));
        assert!(term.buffer_contains(BHK_TITLE));
        assert!(term.buffer_contains("Bodakdev"));
        assert!(term.buffer_contains("3 BHK"));
        assert!(!term.buffer_contains(LOADING_MESSAGE));
    }

    #[test]
    fn test_failed_read_shows_empty_panels() {
        let mut view = AnalyticsView::new(ViewGeneration(1));
        view.apply_failed("connection refused");
        let term = render(&view);

        assert!(term.buffer_contains(NO_DATA_MESSAGE));
        assert!(term.buffer_contains(TOP_LOCATIONS_TITLE));
        assert!(!term.buffer_contains(LOADING_MESSAGE));
        assert!(!term.buffer_contains("connection refused"));
    }
}
