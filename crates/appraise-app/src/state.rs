//! Application state (Model in TEA pattern)
//!
//! The shell holds exactly one live view at a time in [`ActiveView`]. Mounting
//! a view drops the previous one together with all of its transient state and
//! stamps the new one with a fresh [`ViewGeneration`]; async results carry the
//! generation of the view that asked for them so late arrivals can be told
//! apart from current ones.

use std::fmt;

use appraise_core::AppPhase;
use serde::{Deserialize, Serialize};

use crate::analytics::AnalyticsView;
use crate::config::Settings;
use crate::estimator::EstimatorView;

/// The two mutually exclusive client views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    #[default]
    Analytics,
    Estimator,
}

impl ViewKind {
    /// All views in tab order
    pub const ALL: [ViewKind; 2] = [ViewKind::Analytics, ViewKind::Estimator];

    /// Navigation label shown in the tab bar
    pub fn title(&self) -> &'static str {
        match self {
            ViewKind::Analytics => "Analytics Hub",
            ViewKind::Estimator => "Price Predictor",
        }
    }

    /// Next view in tab order (wraps)
    pub fn next(self) -> Self {
        match self {
            ViewKind::Analytics => ViewKind::Estimator,
            ViewKind::Estimator => ViewKind::Analytics,
        }
    }

    /// Function key that switches to this view
    pub fn shortcut(&self) -> u8 {
        match self {
            ViewKind::Analytics => 1,
            ViewKind::Estimator => 2,
        }
    }
}

/// Identity of one mounted view instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewGeneration(pub u64);

impl fmt::Display for ViewGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The currently mounted view and its state
#[derive(Debug, Clone)]
pub enum ActiveView {
    Analytics(AnalyticsView),
    Estimator(EstimatorView),
}

impl ActiveView {
    fn mount(kind: ViewKind, generation: ViewGeneration) -> Self {
        match kind {
            ViewKind::Analytics => ActiveView::Analytics(AnalyticsView::new(generation)),
            ViewKind::Estimator => ActiveView::Estimator(EstimatorView::new(generation)),
        }
    }

    pub fn kind(&self) -> ViewKind {
        match self {
            ActiveView::Analytics(_) => ViewKind::Analytics,
            ActiveView::Estimator(_) => ViewKind::Estimator,
        }
    }

    pub fn generation(&self) -> ViewGeneration {
        match self {
            ActiveView::Analytics(view) => view.generation,
            ActiveView::Estimator(view) => view.generation,
        }
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Shell lifecycle phase
    pub phase: AppPhase,

    /// The one live view
    pub active: ActiveView,

    /// Loaded settings
    pub settings: Settings,

    /// Animation frame for loading indicators
    pub spinner_frame: usize,

    last_generation: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create state with the configured default view mounted
    pub fn with_settings(settings: Settings) -> Self {
        let generation = ViewGeneration(1);
        Self {
            phase: AppPhase::Running,
            active: ActiveView::mount(settings.ui.default_view, generation),
            settings,
            spinner_frame: 0,
            last_generation: generation.0,
        }
    }

    /// Tear down the live view and mount a fresh `kind` view.
    ///
    /// Returns the new view's generation.
    pub fn mount(&mut self, kind: ViewKind) -> ViewGeneration {
        self.last_generation += 1;
        let generation = ViewGeneration(self.last_generation);
        self.active = ActiveView::mount(kind, generation);
        generation
    }

    pub fn active_kind(&self) -> ViewKind {
        self.active.kind()
    }

    pub fn active_generation(&self) -> ViewGeneration {
        self.active.generation()
    }

    pub fn analytics(&self) -> Option<&AnalyticsView> {
        match &self.active {
            ActiveView::Analytics(view) => Some(view),
            _ => None,
        }
    }

    pub fn estimator(&self) -> Option<&EstimatorView> {
        match &self.active {
            ActiveView::Estimator(view) => Some(view),
            _ => None,
        }
    }

    pub fn estimator_mut(&mut self) -> Option<&mut EstimatorView> {
        match &mut self.active {
            ActiveView::Estimator(view) => Some(view),
            _ => None,
        }
    }

    /// The analytics view, only if it is the instance with `generation`
    pub fn analytics_for(&mut self, generation: ViewGeneration) -> Option<&mut AnalyticsView> {
        match &mut self.active {
            ActiveView::Analytics(view) if view.generation == generation => Some(view),
            _ => None,
        }
    }

    /// The estimator view, only if it is the instance with `generation`
    pub fn estimator_for(&mut self, generation: ViewGeneration) -> Option<&mut EstimatorView> {
        match &mut self.active {
            ActiveView::Estimator(view) if view.generation == generation => Some(view),
            _ => None,
        }
    }

    pub fn tick(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
