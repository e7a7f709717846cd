//! Price estimator view
//!
//! Owns the form, the focus position and the location selector for one
//! mounted estimator instance. All mutation goes through the methods here so
//! the form's location always mirrors the selector.

pub mod catalog;
pub mod focus;
pub mod form;

pub use catalog::{LocationSelector, LOCATION_PLACEHOLDER};
pub use focus::{FocusTarget, FOCUS_CHAIN};
pub use form::{
    accepts_numeric_char, EstimateFailure, EstimatorPhase, FormState, Valuation,
    FALLBACK_ERROR_MESSAGE, MISSING_FIELDS_MESSAGE,
};

use appraise_core::{EstimateRequest, LocationCatalog, Result};

use crate::state::ViewGeneration;

/// Estimator view instance
#[derive(Debug, Clone)]
pub struct EstimatorView {
    pub generation: ViewGeneration,
    pub form: FormState,
    pub focus: FocusTarget,
    pub locations: LocationSelector,
    /// The request that produced the current price
    pub submitted: Option<EstimateRequest>,
    in_flight: Option<EstimateRequest>,
}

impl EstimatorView {
    pub fn new(generation: ViewGeneration) -> Self {
        Self {
            generation,
            form: FormState::new(),
            focus: FocusTarget::default(),
            locations: LocationSelector::new(),
            submitted: None,
            in_flight: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.form.loading
    }

    // ─────────────────────────────────────────────────────────
    // Location catalog
    // ─────────────────────────────────────────────────────────

    pub fn apply_locations(&mut self, catalog: LocationCatalog) {
        self.locations.apply_loaded(catalog);
        self.sync_location();
    }

    pub fn apply_locations_failed(&mut self, reason: impl Into<String>) {
        self.locations.apply_failed(reason);
        self.sync_location();
    }

    /// Reset the selector for a retry; only allowed after a failed load
    pub fn begin_locations_reload(&mut self) -> bool {
        if !self.locations.status.is_failed() {
            return false;
        }
        self.locations.begin_reload();
        self.sync_location();
        true
    }

    fn sync_location(&mut self) {
        self.form.location = self
            .locations
            .selected_location()
            .unwrap_or_default()
            .to_string();
    }

    pub fn select_location_next(&mut self) {
        self.locations.select_next();
        self.sync_location();
    }

    pub fn select_location_prev(&mut self) {
        self.locations.select_prev();
        self.sync_location();
    }

    pub fn select_location_by_initial(&mut self, initial: char) {
        if self.locations.select_by_initial(initial) {
            self.sync_location();
        }
    }

    // ─────────────────────────────────────────────────────────
    // Text fields
    // ─────────────────────────────────────────────────────────

    fn focused_field_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FocusTarget::Area => Some(&mut self.form.area),
            FocusTarget::Bhk => Some(&mut self.form.bhk),
            FocusTarget::Location | FocusTarget::Submit => None,
        }
    }

    /// Type into the focused numeric field. Returns false if rejected.
    pub fn input_char(&mut self, c: char) -> bool {
        match self.focused_field_mut() {
            Some(field) if accepts_numeric_char(field.as_str(), c) => {
                field.push(c);
                true
            }
            _ => false,
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_field_mut() {
            field.pop();
        }
    }

    /// Clear the focused field, or reset the selector to the placeholder
    pub fn clear_field(&mut self) {
        match self.focus {
            FocusTarget::Area | FocusTarget::Bhk => {
                if let Some(field) = self.focused_field_mut() {
                    field.clear();
                }
            }
            FocusTarget::Location => {
                while self.locations.selected_index() > 0 {
                    self.locations.select_prev();
                }
                self.sync_location();
            }
            FocusTarget::Submit => {}
        }
    }

    // ─────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────

    /// Confirm key in a field: move along the chain without submitting
    pub fn confirm_field(&mut self) {
        self.focus = self.focus.confirmed();
    }

    pub fn focus_next(&mut self) {
        self.focus = FocusTarget::from_index(focus::cycle_next(self.focus.index()));
    }

    pub fn focus_prev(&mut self) {
        self.focus = FocusTarget::from_index(focus::cycle_prev(self.focus.index()));
    }

    // ─────────────────────────────────────────────────────────
    // Submission
    // ─────────────────────────────────────────────────────────

    /// Validate and start a submission.
    ///
    /// Returns `Ok(None)` while a request is already in flight; the submit
    /// control is disabled then.
    pub fn begin_submit(&mut self) -> Result<Option<EstimateRequest>> {
        if self.form.loading {
            return Ok(None);
        }
        match self.form.begin_submit() {
            Ok(request) => {
                self.in_flight = Some(request.clone());
                Ok(Some(request))
            }
            Err(e) => {
                self.submitted = None;
                Err(e)
            }
        }
    }

    pub fn resolve_success(&mut self, price: f64) {
        self.form.resolve_success(price);
        self.submitted = self.in_flight.take();
    }

    pub fn resolve_failure(&mut self, failure: &EstimateFailure) {
        self.form.resolve_failure(failure);
        self.in_flight = None;
        self.submitted = None;
    }

    /// Display values for the current price, if any
    pub fn valuation(&self) -> Option<Valuation> {
        let price = self.form.price?;
        let submitted = self.submitted.as_ref()?;
        Some(Valuation::derive(price, submitted))
    }
}
