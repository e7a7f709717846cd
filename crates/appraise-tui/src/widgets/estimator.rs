//! Estimator form widget
//!
//! Three inputs, the inline error and the submit control. Focus is drawn with
//! an active border; the submit control greys out while a request is in
//! flight.

use appraise_app::estimator::{EstimatorView, FocusTarget};
use appraise_core::FetchStatus;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

use super::spinner;

pub const AREA_LABEL: &str = "Total Area (sqft)";
pub const BHK_LABEL: &str = "Bedrooms (BHK)";
pub const LOCATION_LABEL: &str = "Preferred Location";
pub const SUBMIT_LABEL: &str = "Calculate Estimate";
pub const SUBMITTING_LABEL: &str = "Analyzing...";

const CURSOR: &str = "▏";

pub struct EstimatorForm<'a> {
    view: &'a EstimatorView,
    spinner_frame: usize,
}

impl<'a> EstimatorForm<'a> {
    pub fn new(view: &'a EstimatorView, spinner_frame: usize) -> Self {
        Self {
            view,
            spinner_frame,
        }
    }

    fn focused(&self, target: FocusTarget) -> bool {
        self.view.focus == target
    }

    fn render_text_field(
        &self,
        target: FocusTarget,
        label: &str,
        value: &str,
        hint: &str,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let focused = self.focused(target);
        let content = if value.is_empty() && !focused {
            Line::styled(hint.to_string(), styles::text_muted())
        } else if focused {
            Line::from(vec![
                Span::styled(value.to_string(), styles::text_primary()),
                Span::styled(CURSOR, styles::accent()),
            ])
        } else {
            Line::styled(value.to_string(), styles::text_primary())
        };
        Paragraph::new(content)
            .block(styles::titled_block(label, focused))
            .render(area, buf);
    }

    fn location_line(&self) -> Line<'static> {
        let selector = &self.view.locations;
        match &selector.status {
            FetchStatus::Loading => Line::from(vec![
                Span::styled(spinner(self.spinner_frame), styles::accent()),
                Span::styled(" Loading locations...", styles::text_muted()),
            ]),
            FetchStatus::Failed { .. } => Line::from(vec![
                Span::styled(selector.selected_label().to_string(), styles::text_muted()),
                Span::styled("  (unavailable, Ctrl+R to retry)", styles::status_red()),
            ]),
            FetchStatus::Loaded(_) => {
                let label_style = if selector.selected_location().is_some() {
                    styles::text_primary()
                } else {
                    styles::text_muted()
                };
                Line::from(vec![
                    Span::styled("‹ ", styles::accent()),
                    Span::styled(selector.selected_label().to_string(), label_style),
                    Span::styled(" ›", styles::accent()),
                    Span::styled(
                        format!(
                            "  {}/{}",
                            selector.selected_index(),
                            selector.option_count() - 1
                        ),
                        styles::text_muted(),
                    ),
                ])
            }
        }
    }

    fn render_submit(&self, area: Rect, buf: &mut Buffer) {
        let loading = self.view.is_loading();
        let focused = self.focused(FocusTarget::Submit);
        let (label, style) = if loading {
            (
                format!("{} {}", spinner(self.spinner_frame), SUBMITTING_LABEL),
                styles::disabled(),
            )
        } else if focused {
            (SUBMIT_LABEL.to_string(), styles::focused_selected())
        } else {
            (SUBMIT_LABEL.to_string(), styles::text_bright_bold())
        };

        Paragraph::new(Line::styled(format!(" {label} "), style))
            .alignment(Alignment::Center)
            .block(styles::glass_block(focused && !loading))
            .render(area, buf);
    }
}

impl Widget for EstimatorForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_block("Property Details", false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 3 || inner.width < 10 {
            return;
        }

        let [area_row, bhk_row, location_row, error_row, submit_row] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .areas(inner);

        let form = &self.view.form;
        self.render_text_field(
            FocusTarget::Area,
            AREA_LABEL,
            &form.area,
            "e.g. 1500",
            area_row,
            buf,
        );
        self.render_text_field(
            FocusTarget::Bhk,
            BHK_LABEL,
            &form.bhk,
            "e.g. 3",
            bhk_row,
            buf,
        );
        Paragraph::new(self.location_line())
            .block(styles::titled_block(
                LOCATION_LABEL,
                self.focused(FocusTarget::Location),
            ))
            .render(location_row, buf);

        if !form.error.is_empty() {
            Paragraph::new(Line::styled(form.error.clone(), styles::status_red()))
                .render(error_row, buf);
        }

        self.render_submit(submit_row, buf);
    }
}
