//! Main update function - handles state transitions (TEA pattern)

use appraise_core::AppPhase;
use tracing::debug;

use crate::message::Message;
use crate::state::{AppState, ViewKind};

use super::{analytics, estimator, keys::handle_key, mount_action, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::SwitchView(kind) => switch_view(state, kind),
        Message::NextView => {
            let next = state.active_kind().next();
            switch_view(state, next)
        }
        Message::ReloadView => {
            let kind = state.active_kind();
            remount(state, kind)
        }

        // ─────────────────────────────────────────────────────────
        // Analytics Messages
        // ─────────────────────────────────────────────────────────
        Message::AnalyticsLoaded {
            generation,
            snapshot,
        } => analytics::handle_loaded(state, generation, snapshot),
        Message::AnalyticsFetchFailed { generation, reason } => {
            analytics::handle_failed(state, generation, reason)
        }

        // ─────────────────────────────────────────────────────────
        // Location Catalog Messages
        // ─────────────────────────────────────────────────────────
        Message::ReloadLocations => estimator::handle_reload_locations(state),
        Message::LocationsLoaded {
            generation,
            catalog,
        } => estimator::handle_locations_loaded(state, generation, catalog),
        Message::LocationsFetchFailed { generation, reason } => {
            estimator::handle_locations_failed(state, generation, reason)
        }

        // ─────────────────────────────────────────────────────────
        // Estimator Form Messages
        // ─────────────────────────────────────────────────────────
        Message::FieldInput(c) => estimator::with_view(state, |view| {
            view.input_char(c);
        }),
        Message::FieldBackspace => estimator::with_view(state, |view| view.backspace()),
        Message::FieldClear => estimator::with_view(state, |view| view.clear_field()),
        Message::ConfirmField => estimator::with_view(state, |view| view.confirm_field()),
        Message::FocusNext => estimator::with_view(state, |view| view.focus_next()),
        Message::FocusPrev => estimator::with_view(state, |view| view.focus_prev()),
        Message::SelectLocationNext => {
            estimator::with_view(state, |view| view.select_location_next())
        }
        Message::SelectLocationPrev => {
            estimator::with_view(state, |view| view.select_location_prev())
        }
        Message::SelectLocationByInitial(c) => {
            estimator::with_view(state, |view| view.select_location_by_initial(c))
        }

        Message::SubmitEstimate => estimator::handle_submit(state),
        Message::EstimateSucceeded { generation, price } => {
            estimator::handle_estimate_succeeded(state, generation, price)
        }
        Message::EstimateFailed {
            generation,
            failure,
        } => estimator::handle_estimate_failed(state, generation, failure),
    }
}

/// Mount `kind` unless it is already the live view
fn switch_view(state: &mut AppState, kind: ViewKind) -> UpdateResult {
    if state.active_kind() == kind {
        return UpdateResult::none();
    }
    remount(state, kind)
}

fn remount(state: &mut AppState, kind: ViewKind) -> UpdateResult {
    let previous = state.active_generation();
    let generation = state.mount(kind);
    debug!(
        "Mounted {:?} view {} (dropped {})",
        kind, generation, previous
    );
    UpdateResult::action(mount_action(state))
}
