//! Main render/view function (View in TEA pattern)


use appraise_app::state::{ActiveView, AppState};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::theme::palette;
use crate::{layout, widgets};

/// Width share of the form column in the estimator view
const FORM_COLUMN_PERCENT: u16 = 55;

/// Render the complete UI (View function in TEA)
///
/// Pure rendering: reads the state, never changes it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let ui = &state.settings.ui;
    let areas = layout::create(area, ui.show_footer);

    frame.render_widget(
        widgets::MainHeader::new(&ui.market_name, state.active_kind()),
        areas.header,
    );

    match &state.active {
        ActiveView::Analytics(view) => {
            frame.render_widget(
                widgets::AnalyticsPanel::new(view, &ui.market_name, state.spinner_frame),
                areas.content,
            );
        }
        ActiveView::Estimator(view) => {
            let (form_area, result_area) = layout::columns(areas.content, FORM_COLUMN_PERCENT);
            frame.render_widget(
                widgets::EstimatorForm::new(view, state.spinner_frame),
                form_area,
            );
            let valuation = view.valuation();
            frame.render_widget(widgets::ValuationCard::new(valuation.as_ref()), result_area);
        }
    }

    if ui.show_footer {
        frame.render_widget(widgets::Footer::new(state.active_kind()), areas.footer);
    }
}
