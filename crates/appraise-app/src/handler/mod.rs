//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per view and focus
//! - `analytics`: Analytics fetch result handlers
//! - `estimator`: Estimator form and result handlers

pub(crate) mod analytics;
pub(crate) mod estimator;
pub(crate) mod keys;
pub(crate) mod update;


use appraise_core::EstimateRequest;

use crate::message::Message;
use crate::state::{ActiveView, AppState, ViewGeneration};

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Read the analytics snapshot for the analytics view `generation`
    FetchAnalytics { generation: ViewGeneration },

    /// Read the location catalog for the estimator view `generation`
    FetchLocations { generation: ViewGeneration },

    /// Send one estimate request on behalf of the estimator view `generation`
    SubmitEstimate {
        generation: ViewGeneration,
        request: EstimateRequest,
    },
}

impl UpdateAction {
    /// Generation of the view the result belongs to
    pub fn generation(&self) -> ViewGeneration {
        match self {
            UpdateAction::FetchAnalytics { generation }
            | UpdateAction::FetchLocations { generation }
            | UpdateAction::SubmitEstimate { generation, .. } => *generation,
        }
    }
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}

/// The one-shot read a freshly mounted view issues
pub fn mount_action(state: &AppState) -> UpdateAction {
    match &state.active {
        ActiveView::Analytics(view) => UpdateAction::FetchAnalytics {
            generation: view.generation,
        },
        ActiveView::Estimator(view) => UpdateAction::FetchLocations {
            generation: view.generation,
        },
    }
}
