//! Valuation result card

use appraise_app::estimator::Valuation;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

/// Text shown before the first successful estimate
pub const RESULT_PLACEHOLDER: &str =
    "Enter property details to generate an instant AI-powered valuation.";

pub struct ValuationCard<'a> {
    valuation: Option<&'a Valuation>,
}

impl<'a> ValuationCard<'a> {
    pub fn new(valuation: Option<&'a Valuation>) -> Self {
        Self { valuation }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let Some(valuation) = self.valuation else {
            return vec![
                Line::raw(""),
                Line::styled(RESULT_PLACEHOLDER, styles::text_muted()),
            ];
        };

        let mut lines = vec![
            Line::raw(""),
            Line::styled("Estimated Market Value", styles::text_secondary()),
            Line::raw(""),
            Line::styled(valuation.estimated_value.clone(), styles::accent_bold()),
            Line::raw(""),
            Line::styled(
                format!("Based on recent sales in {}", valuation.location),
                styles::text_secondary(),
            ),
        ];
        if let Some(per_sqft) = &valuation.price_per_sqft {
            lines.push(Line::raw(""));
            lines.push(Line::from(vec![
                Span::styled("Price per sqft: ", styles::text_muted()),
                Span::styled(per_sqft.clone(), styles::status_green()),
            ]));
        }
        lines
    }
}

impl Widget for ValuationCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_block("Valuation", self.valuation.is_some());
        Paragraph::new(self.lines())
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
