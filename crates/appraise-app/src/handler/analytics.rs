//! Analytics fetch result handlers

use appraise_core::AnalyticsSnapshot;
use tracing::{debug, info, warn};

use crate::state::{AppState, ViewGeneration};

use super::UpdateResult;

pub fn handle_loaded(
    state: &mut AppState,
    generation: ViewGeneration,
    snapshot: AnalyticsSnapshot,
) -> UpdateResult {
    match state.analytics_for(generation) {
        Some(view) => {
            info!(
                "Analytics loaded for {}: {} locations, {} BHK groups",
                generation,
                snapshot.top_locations.len(),
                snapshot.bhk_distribution.len()
            );
            view.apply_loaded(snapshot);
        }
        None => debug!("Discarding analytics for unmounted view {}", generation),
    }
    UpdateResult::none()
}

pub fn handle_failed(
    state: &mut AppState,
    generation: ViewGeneration,
    reason: String,
) -> UpdateResult {
    warn!("Analytics fetch failed for {}: {}", generation, reason);
    match state.analytics_for(generation) {
        Some(view) => view.apply_failed(reason),
        None => debug!("Discarding analytics failure for unmounted view {}", generation),
    }
    UpdateResult::none()
}
