//! Estimator form, catalog and estimate result handlers

use appraise_core::LocationCatalog;
use tracing::{debug, info, warn};

use crate::estimator::{EstimateFailure, EstimatorView};
use crate::state::{AppState, ViewGeneration};

use super::{UpdateAction, UpdateResult};

/// Apply a local edit to the live estimator, if there is one
pub fn with_view(state: &mut AppState, f: impl FnOnce(&mut EstimatorView)) -> UpdateResult {
    if let Some(view) = state.estimator_mut() {
        f(view);
    }
    UpdateResult::none()
}

pub fn handle_locations_loaded(
    state: &mut AppState,
    generation: ViewGeneration,
    catalog: LocationCatalog,
) -> UpdateResult {
    match state.estimator_for(generation) {
        Some(view) => {
            info!("Loaded {} locations for {}", catalog.len(), generation);
            view.apply_locations(catalog);
        }
        None => debug!("Discarding locations for unmounted view {}", generation),
    }
    UpdateResult::none()
}

pub fn handle_locations_failed(
    state: &mut AppState,
    generation: ViewGeneration,
    reason: String,
) -> UpdateResult {
    warn!("Location catalog fetch failed for {}: {}", generation, reason);
    match state.estimator_for(generation) {
        Some(view) => view.apply_locations_failed(reason),
        None => debug!("Discarding locations failure for unmounted view {}", generation),
    }
    UpdateResult::none()
}

pub fn handle_reload_locations(state: &mut AppState) -> UpdateResult {
    let Some(view) = state.estimator_mut() else {
        return UpdateResult::none();
    };
    if !view.begin_locations_reload() {
        return UpdateResult::none();
    }
    UpdateResult::action(UpdateAction::FetchLocations {
        generation: view.generation,
    })
}

pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    let Some(view) = state.estimator_mut() else {
        return UpdateResult::none();
    };
    let generation = view.generation;

    match view.begin_submit() {
        Ok(Some(request)) => {
            debug!("Submitting estimate for {}: {:?}", generation, request);
            UpdateResult::action(UpdateAction::SubmitEstimate {
                generation,
                request,
            })
        }
        Ok(None) => {
            debug!("Estimate already in flight for {}, ignoring submit", generation);
            UpdateResult::none()
        }
        Err(e) => {
            debug!("Estimate not sent: {}", e);
            UpdateResult::none()
        }
    }
}

pub fn handle_estimate_succeeded(
    state: &mut AppState,
    generation: ViewGeneration,
    price: f64,
) -> UpdateResult {
    match state.estimator_for(generation) {
        Some(view) => {
            info!("Estimate for {}: {}", generation, price);
            view.resolve_success(price);
        }
        None => debug!("Discarding estimate for unmounted view {}", generation),
    }
    UpdateResult::none()
}

pub fn handle_estimate_failed(
    state: &mut AppState,
    generation: ViewGeneration,
    failure: EstimateFailure,
) -> UpdateResult {
    warn!("Estimate failed for {}: {:?}", generation, failure);
    match state.estimator_for(generation) {
        Some(view) => view.resolve_failure(&failure),
        None => debug!("Discarding estimate failure for unmounted view {}", generation),
    }
    UpdateResult::none()
}
