//! Chart widgets for the analytics view
//!
//! Both charts draw straight into the buffer from the series prepared by
//! `appraise_app::analytics`; they hold no state of their own.

use appraise_app::analytics::{BarPoint, Slice};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::{palette, styles};

const BAR_GLYPH: &str = "█";

/// Cut `text` to at most `width` display columns
fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    if width > 0 {
        out.push('…');
    }
    out
}

/// Horizontal bars, one row per location, with a value axis underneath
pub struct TopLocationsChart<'a> {
    points: &'a [BarPoint],
    ticks: &'a [String],
}

impl<'a> TopLocationsChart<'a> {
    pub fn new(points: &'a [BarPoint], ticks: &'a [String]) -> Self {
        Self { points, ticks }
    }
}

impl Widget for TopLocationsChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 8 || area.height == 0 || self.points.is_empty() {
            return;
        }

        let max = self.points.iter().map(|p| p.value).fold(0.0, f64::max);
        let label_width = self
            .points
            .iter()
            .map(|p| p.label.width())
            .max()
            .unwrap_or(0)
            .min(area.width as usize / 3)
            .max(1);
        let value_width = self
            .points
            .iter()
            .map(|p| p.tooltip.width())
            .max()
            .unwrap_or(0);
        let bar_x = area.x + label_width as u16 + 1;
        let bar_width = (area.width as usize).saturating_sub(label_width + value_width + 2);

        // leave the last row for the axis when there is room
        let rows = if self.points.len() < area.height as usize {
            self.points.len()
        } else {
            area.height as usize
        };

        for (i, point) in self.points.iter().take(rows).enumerate() {
            let y = area.y + i as u16;
            buf.set_stringn(
                area.x,
                y,
                truncate(&point.label, label_width),
                label_width,
                styles::text_secondary(),
            );

            let len = if max > 0.0 && bar_width > 0 {
                ((point.value / max) * bar_width as f64).round().max(1.0) as usize
            } else {
                0
            };
            buf.set_stringn(
                bar_x,
                y,
                BAR_GLYPH.repeat(len),
                bar_width,
                Style::default().fg(palette::CHART_BAR),
            );
            buf.set_stringn(
                bar_x + len as u16 + 1,
                y,
                &point.tooltip,
                value_width,
                styles::text_primary(),
            );
        }

        if rows < area.height as usize && bar_width > 0 && !self.ticks.is_empty() {
            let y = area.y + rows as u16;
            let span = bar_width.saturating_sub(1);
            let last = self.ticks.len().saturating_sub(1).max(1);
            let limit = area.x + area.width;
            for (i, tick) in self.ticks.iter().enumerate() {
                let offset = span * i / last;
                let x = (bar_x + offset as u16).min(limit.saturating_sub(tick.width() as u16));
                buf.set_stringn(
                    x,
                    y,
                    tick,
                    (limit - x) as usize,
                    styles::text_muted(),
                );
            }
        }
    }
}

/// Proportional bar with a colour legend
pub struct BhkDistributionChart<'a> {
    slices: &'a [Slice],
}

impl<'a> BhkDistributionChart<'a> {
    pub fn new(slices: &'a [Slice]) -> Self {
        Self { slices }
    }

    /// Column span of each slice across `width` cells
    fn segments(&self, width: u16) -> Vec<(u16, u16)> {
        let mut cumulative = 0.0;
        self.slices
            .iter()
            .map(|slice| {
                let start = (cumulative * width as f64).round() as u16;
                cumulative += slice.share;
                let end = (cumulative * width as f64).round().min(width as f64) as u16;
                (start, end.max(start))
            })
            .collect()
    }
}

impl Widget for BhkDistributionChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 || self.slices.is_empty() {
            return;
        }

        for (slice, (start, end)) in self.slices.iter().zip(self.segments(area.width)) {
            let style = Style::default().fg(palette::series_color(slice.palette_slot));
            for x in start..end {
                buf.set_string(area.x + x, area.y, BAR_GLYPH, style);
            }
        }

        for (i, slice) in self.slices.iter().enumerate() {
            let y = area.y + 2 + i as u16;
            if y >= area.y + area.height {
                break;
            }
            let legend = Line::from(vec![
                Span::styled(
                    "■ ",
                    Style::default().fg(palette::series_color(slice.palette_slot)),
                ),
                Span::styled(format!("{:<7}", slice.label), styles::text_secondary()),
                Span::styled(slice.tooltip.clone(), styles::text_primary()),
                Span::styled(
                    format!("  {:.0}%", slice.share * 100.0),
                    styles::text_muted(),
                ),
            ]);
            buf.set_line(area.x, y, &legend, area.width);
        }
    }
}
