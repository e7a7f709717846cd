//! Header bar widget
//!
//! App title on the first row, one tab per view on the second.

use appraise_app::state::ViewKind;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

/// Main header showing the app title and the view tabs
pub struct MainHeader<'a> {
    market: &'a str,
    active: ViewKind,
}

impl<'a> MainHeader<'a> {
    pub fn new(market: &'a str, active: ViewKind) -> Self {
        Self { market, active }
    }

    fn title(&self) -> String {
        format!("{} Flat Price Predictor", self.market)
    }

    fn tabs_line(&self) -> Line<'static> {
        let mut spans = vec![Span::raw(" ")];
        for kind in ViewKind::ALL {
            let label = format!(" F{} {} ", kind.shortcut(), kind.title());
            let style = if kind == self.active {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled("◆", styles::accent()),
            Span::raw(" "),
            Span::styled(self.title(), styles::accent_bold()),
        ]);
        buf.set_line(inner.x, inner.y, &title, inner.width);

        if inner.height >= 2 {
            buf.set_line(inner.x, inner.y + 1, &self.tabs_line(), inner.width);
        }
    }
}
