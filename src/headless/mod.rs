//! Headless mode - NDJSON event output without the TUI
//!
//! Each subcommand performs one backend operation and reports it on stdout as
//! newline-delimited JSON, one event per line. Every event carries an "event"
//! field naming its type and a millisecond timestamp.
//!
//! # Example Output
//!
//! ```json
//! {"event":"started","base_url":"http://localhost:5000/","timestamp":1704700001000}
//! {"event":"estimate_submitted","area":"1500","bhk":"3","location":"Bopal","timestamp":1704700001002}
//! {"event":"estimate","price":8500000.0,"estimated_value":"₹85,00,000","price_per_sqft":"₹5,667","location":"Bopal","timestamp":1704700001210}
//! ```

pub mod runner;

use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

pub use runner::{run_headless, HeadlessCommand};

/// One bar of the top-locations series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationEntry {
    pub name: String,
    pub price: f64,
    pub display: String,
}

/// One segment of the BHK distribution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BhkEntry {
    pub label: String,
    pub avg_price: f64,
    pub display: String,
    pub share: f64,
}

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Backend address resolved, about to issue the request
    Started { base_url: String, timestamp: i64 },

    /// Health probe answered
    Pong { message: String, timestamp: i64 },

    /// Location catalog, in server order
    Locations {
        count: usize,
        locations: Vec<String>,
        timestamp: i64,
    },

    /// Market snapshot with chart-ready values
    Analytics {
        top_locations: Vec<LocationEntry>,
        bhk_distribution: Vec<BhkEntry>,
        timestamp: i64,
    },

    /// Form passed validation and the request was sent
    EstimateSubmitted {
        area: String,
        bhk: String,
        location: String,
        timestamp: i64,
    },

    /// Estimate returned
    Estimate {
        price: f64,
        estimated_value: String,
        price_per_sqft: Option<String>,
        location: String,
        timestamp: i64,
    },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        // Write to stdout with newline (NDJSON format)
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    /// Event type name as it appears on the wire
    pub fn name(&self) -> &'static str {
        match self {
            HeadlessEvent::Started { .. } => "started",
            HeadlessEvent::Pong { .. } => "pong",
            HeadlessEvent::Locations { .. } => "locations",
            HeadlessEvent::Analytics { .. } => "analytics",
            HeadlessEvent::EstimateSubmitted { .. } => "estimate_submitted",
            HeadlessEvent::Estimate { .. } => "estimate",
            HeadlessEvent::Error { .. } => "error",
        }
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn started(base_url: &str) -> Self {
        Self::Started {
            base_url: base_url.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn pong(message: String) -> Self {
        Self::Pong {
            message,
            timestamp: Self::now(),
        }
    }

    pub fn locations(locations: Vec<String>) -> Self {
        Self::Locations {
            count: locations.len(),
            locations,
            timestamp: Self::now(),
        }
    }

    pub fn analytics(top_locations: Vec<LocationEntry>, bhk_distribution: Vec<BhkEntry>) -> Self {
        Self::Analytics {
            top_locations,
            bhk_distribution,
            timestamp: Self::now(),
        }
    }

    pub fn estimate_submitted(area: &str, bhk: &str, location: &str) -> Self {
        Self::EstimateSubmitted {
            area: area.to_string(),
            bhk: bhk.to_string(),
            location: location.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn estimate(
        price: f64,
        estimated_value: String,
        price_per_sqft: Option<String>,
        location: String,
    ) -> Self {
        Self::Estimate {
            price,
            estimated_value,
            price_per_sqft,
            location,
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }
}
