//! Estimate form state machine
//!
//! ```text
//! Idle/Success/Failed --submit--> Validating
//! Validating --missing field--> Failed("Please fill in all fields")
//! Validating --pass--> Submitting --ok--> Success
//!                                 --err--> Failed(server message | fallback)
//! ```
//!
//! Validating is synchronous and lives inside [`FormState::begin_submit`].
//! Editing a field never leaves Success or Failed; only a new submission does.

use appraise_core::{format_currency, EstimateRequest, Error, Result};

/// Inline message for a submission with an empty field
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields";

/// Inline message when the backend gave no usable explanation
pub const FALLBACK_ERROR_MESSAGE: &str = "Error predicting price. Ensure backend is running.";

/// Observable phase of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimatorPhase {
    Idle,
    Submitting,
    Success,
    Failed,
}

/// Why an estimate request did not produce a price
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EstimateFailure {
    /// The backend answered with an explanation
    Rejected { message: String },
    /// The request failed to complete or the answer was unusable
    Unavailable { reason: String },
}

impl EstimateFailure {
    /// Text shown under the form
    pub fn user_message(&self) -> &str {
        match self {
            EstimateFailure::Rejected { message } => message,
            EstimateFailure::Unavailable { .. } => FALLBACK_ERROR_MESSAGE,
        }
    }
}

impl From<&Error> for EstimateFailure {
    fn from(err: &Error) -> Self {
        match err.rejection_message().filter(|m| !m.trim().is_empty()) {
            Some(message) => EstimateFailure::Rejected {
                message: message.to_string(),
            },
            None => EstimateFailure::Unavailable {
                reason: err.to_string(),
            },
        }
    }
}

/// Whether `c` may be typed into a numeric field currently holding `current`.
///
/// Digits and a single decimal point are accepted.
pub fn accepts_numeric_char(current: &str, c: char) -> bool {
    c.is_ascii_digit() || (c == '.' && !current.contains('.'))
}

/// Values and outcome of the estimate form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub area: String,
    pub bhk: String,
    /// Selected location name, empty while the placeholder is selected
    pub location: String,
    pub price: Option<f64>,
    pub loading: bool,
    pub error: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> EstimatorPhase {
        if self.loading {
            EstimatorPhase::Submitting
        } else if !self.error.is_empty() {
            EstimatorPhase::Failed
        } else if self.price.is_some() {
            EstimatorPhase::Success
        } else {
            EstimatorPhase::Idle
        }
    }

    /// Request built from the fields exactly as typed
    pub fn request(&self) -> EstimateRequest {
        EstimateRequest {
            area: self.area.clone(),
            bhk: self.bhk.clone(),
            location: self.location.clone(),
        }
    }

    fn has_missing_field(&self) -> bool {
        self.area.is_empty() || self.bhk.is_empty() || self.location.is_empty()
    }

    /// Validate and, on success, enter Submitting.
    ///
    /// A missing field moves to Failed and no request is produced. Any price
    /// from an earlier submission is dropped in that case.
    pub fn begin_submit(&mut self) -> Result<EstimateRequest> {
        if self.has_missing_field() {
            self.price = None;
            self.loading = false;
            self.error = MISSING_FIELDS_MESSAGE.to_string();
            return Err(Error::validation(MISSING_FIELDS_MESSAGE));
        }

        self.error.clear();
        self.loading = true;
        Ok(self.request())
    }

    pub fn resolve_success(&mut self, price: f64) {
        self.price = Some(price);
        self.error.clear();
        self.loading = false;
    }

    pub fn resolve_failure(&mut self, failure: &EstimateFailure) {
        self.price = None;
        self.loading = false;
        self.error = failure.user_message().to_string();
    }

    /// Loading excludes an error; a price and an error never coexist
    pub fn invariants_hold(&self) -> bool {
        let loading_ok = !self.loading || self.error.is_empty();
        let exclusive = !(self.price.is_some() && !self.error.is_empty());
        loading_ok && exclusive
    }
}

/// Display values derived from a returned price
#[derive(Debug, Clone, PartialEq)]
pub struct Valuation {
    pub estimated_value: String,
    /// `None` when the submitted area is not a positive number
    pub price_per_sqft: Option<String>,
    pub location: String,
}

impl Valuation {
    /// Derive display values from `price` and the submission that produced it
    pub fn derive(price: f64, submitted: &EstimateRequest) -> Self {
        Self {
            estimated_value: format_currency(price),
            price_per_sqft: submitted
                .area_sqft()
                .map(|area| format_currency(price / area)),
            location: submitted.location.clone(),
        }
    }
}
