//! Backend operations consumed by the application layer

use appraise_core::prelude::*;
use appraise_core::{AnalyticsSnapshot, EstimateRequest, LocationCatalog};

/// Operations offered by the valuation backend.
///
/// The TUI, the headless commands and the tests all go through this trait,
/// so the application never depends on the HTTP transport directly.
#[trait_variant::make(ValuationBackend: Send)]
pub trait LocalValuationBackend {
    /// Fetch the precomputed market summary
    async fn fetch_analytics(&self) -> Result<AnalyticsSnapshot>;

    /// Fetch the list of valid location names, in server order
    async fn fetch_locations(&self) -> Result<LocationCatalog>;

    /// Request a price estimate for the given features
    async fn predict(&self, request: &EstimateRequest) -> Result<f64>;

    /// Probe the backend root; returns its greeting text
    async fn ping(&self) -> Result<String>;
}
