//! Core domain type definitions

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Application Phase
// ─────────────────────────────────────────────────────────────────────────────

/// Lifecycle phase of the client shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

// ─────────────────────────────────────────────────────────────────────────────
// Market Analytics
// ─────────────────────────────────────────────────────────────────────────────

/// Average price for one of the most expensive locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationPrice {
    pub name: String,
    pub price: f64,
}

/// Average price for a given bedroom count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BhkPrice {
    pub bhk: u32,
    pub avg_price: f64,
}

/// Precomputed market summary returned by the analytics endpoint.
///
/// Held immutably for the lifetime of the view that fetched it; a new fetch
/// replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    pub top_locations: Vec<LocationPrice>,
    pub bhk_distribution: Vec<BhkPrice>,
}

impl AnalyticsSnapshot {
    /// Highest location price, used to scale the bar series
    pub fn max_location_price(&self) -> f64 {
        self.top_locations
            .iter()
            .map(|l| l.price)
            .fold(0.0, f64::max)
    }

    /// Sum of all BHK averages, used for proportional shares
    pub fn bhk_total(&self) -> f64 {
        self.bhk_distribution.iter().map(|b| b.avg_price).sum()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Location Catalog
// ─────────────────────────────────────────────────────────────────────────────

/// Authoritative list of valid location names, in server order.
///
/// Never re-sorted. Repeated names keep their first position only.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct LocationCatalog {
    names: Vec<String>,
}

impl LocationCatalog {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        Self { names: unique }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}

impl<'de> Deserialize<'de> for LocationCatalog {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let names = Vec::<String>::deserialize(deserializer)?;
        Ok(Self::from_names(names))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Estimate Request
// ─────────────────────────────────────────────────────────────────────────────

/// Property features sent to the estimation endpoint.
///
/// Values are transmitted exactly as typed; the backend does the numeric
/// parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateRequest {
    pub area: String,
    pub bhk: String,
    pub location: String,
}

impl EstimateRequest {
    /// Entered area as a number, if it parses and is positive
    pub fn area_sqft(&self) -> Option<f64> {
        self.area
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite() && *a > 0.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Background Fetch Status
// ─────────────────────────────────────────────────────────────────────────────

/// Status of a one-shot background read (analytics, location catalog).
///
/// Failures are kept observable here even though the UI degrades silently.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchStatus<T> {
    #[default]
    Loading,
    Loaded(T),
    Failed {
        reason: String,
    },
}

impl<T> FetchStatus<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchStatus::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchStatus::Failed { .. })
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            FetchStatus::Loaded(value) => Some(value),
            _ => None,
        }
    }
}
