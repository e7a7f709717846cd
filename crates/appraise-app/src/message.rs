//! Message types for the application (TEA pattern)

use appraise_core::{AnalyticsSnapshot, LocationCatalog};

use crate::estimator::EstimateFailure;
use crate::input_key::InputKey;
use crate::state::{ViewGeneration, ViewKind};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit immediately (Ctrl+C, Esc, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Unmount the live view and mount `ViewKind`
    SwitchView(ViewKind),
    /// Switch to the next view in tab order
    NextView,
    /// Remount the live view (fresh state, fresh fetch)
    ReloadView,

    // ─────────────────────────────────────────────────────────
    // Analytics Messages
    // ─────────────────────────────────────────────────────────
    AnalyticsLoaded {
        generation: ViewGeneration,
        snapshot: AnalyticsSnapshot,
    },
    AnalyticsFetchFailed {
        generation: ViewGeneration,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────
    // Location Catalog Messages
    // ─────────────────────────────────────────────────────────
    /// Retry the catalog read after a failure
    ReloadLocations,
    LocationsLoaded {
        generation: ViewGeneration,
        catalog: LocationCatalog,
    },
    LocationsFetchFailed {
        generation: ViewGeneration,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────
    // Estimator Form Messages
    // ─────────────────────────────────────────────────────────
    /// Character typed into the focused field
    FieldInput(char),
    FieldBackspace,
    FieldClear,
    /// Confirm key pressed in a field (focus chain step)
    ConfirmField,
    FocusNext,
    FocusPrev,
    SelectLocationNext,
    SelectLocationPrev,
    SelectLocationByInitial(char),

    /// Activate the submit control
    SubmitEstimate,
    EstimateSucceeded {
        generation: ViewGeneration,
        price: f64,
    },
    EstimateFailed {
        generation: ViewGeneration,
        failure: EstimateFailure,
    },
}
