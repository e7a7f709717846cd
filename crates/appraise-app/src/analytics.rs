//! Market analytics view state and chart datasets
//!
//! The view issues one analytics read when mounted. Until it resolves only a
//! loading placeholder is shown; afterwards the snapshot is held unchanged
//! until the view is dropped. The chart datasets below are derived from the
//! snapshot on demand and never cached.

use appraise_core::{format_crore, format_lakh, format_lakh_tick, AnalyticsSnapshot, FetchStatus};
use chrono::{DateTime, Local};

use crate::state::ViewGeneration;

/// Number of colours in the proportional-series palette
pub const CHART_PALETTE_LEN: usize = 5;

/// Static headline fact shown above the charts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryFact {
    pub label: &'static str,
    pub value: &'static str,
}

/// Headline facts. Display values only, not derived from the snapshot.
pub const SUMMARY_FACTS: [SummaryFact; 3] = [
    SummaryFact {
        label: "Market Trend",
        value: "Bullish (+4.2%)",
    },
    SummaryFact {
        label: "Hottest Area",
        value: "Sindhu Bhavan",
    },
    SummaryFact {
        label: "Avg. 3BHK Price",
        value: "₹85.0 Lac",
    },
];

/// Analytics view instance
#[derive(Debug, Clone)]
pub struct AnalyticsView {
    pub generation: ViewGeneration,
    pub status: FetchStatus<AnalyticsSnapshot>,
    pub fetched_at: Option<DateTime<Local>>,
}

impl AnalyticsView {
    pub fn new(generation: ViewGeneration) -> Self {
        Self {
            generation,
            status: FetchStatus::Loading,
            fetched_at: None,
        }
    }

    pub fn apply_loaded(&mut self, snapshot: AnalyticsSnapshot) {
        self.status = FetchStatus::Loaded(snapshot);
        self.fetched_at = Some(Local::now());
    }

    /// Clear loading and keep no data
    pub fn apply_failed(&mut self, reason: impl Into<String>) {
        self.status = FetchStatus::Failed {
            reason: reason.into(),
        };
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn snapshot(&self) -> Option<&AnalyticsSnapshot> {
        self.status.loaded()
    }
}

/// One bar of the top-locations series
#[derive(Debug, Clone, PartialEq)]
pub struct BarPoint {
    /// Location name (the series key)
    pub label: String,
    pub value: f64,
    /// Coarse value in crore
    pub tooltip: String,
}

/// Top-locations bars, in received order
pub fn bar_series(snapshot: &AnalyticsSnapshot) -> Vec<BarPoint> {
    snapshot
        .top_locations
        .iter()
        .map(|loc| BarPoint {
            label: loc.name.clone(),
            value: loc.price,
            tooltip: format_crore(loc.price),
        })
        .collect()
}

/// Evenly spaced value-axis labels from zero up to the largest bar.
///
/// Intermediate ticks are rounded to whole lakh.
pub fn axis_ticks(points: &[BarPoint], count: usize) -> Vec<String> {
    let max = points.iter().map(|p| p.value).fold(0.0, f64::max);
    if count < 2 || max <= 0.0 {
        return vec![format_lakh_tick(0.0)];
    }

    let step = max / (count - 1) as f64;
    (0..count)
        .map(|i| {
            let value = if i == count - 1 {
                max
            } else {
                ((i as f64 * step) / 100_000.0).round() * 100_000.0
            };
            format_lakh_tick(value)
        })
        .collect()
}

/// One segment of the BHK proportional series
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    /// "{bhk} BHK"
    pub label: String,
    pub value: f64,
    /// Fraction of the series total, 0.0..=1.0
    pub share: f64,
    /// Palette colour index, reused cyclically
    pub palette_slot: usize,
    /// Value in lakh
    pub tooltip: String,
}

/// BHK distribution as proportional segments, in received order
pub fn proportion_series(snapshot: &AnalyticsSnapshot) -> Vec<Slice> {
    let total = snapshot.bhk_total();
    snapshot
        .bhk_distribution
        .iter()
        .enumerate()
        .map(|(index, entry)| Slice {
            label: format!("{} BHK", entry.bhk),
            value: entry.avg_price,
            share: if total > 0.0 {
                entry.avg_price / total
            } else {
                0.0
            },
            palette_slot: index % CHART_PALETTE_LEN,
            tooltip: format_lakh(entry.avg_price),
        })
        .collect()
}
