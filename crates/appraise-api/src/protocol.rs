//! Wire types and endpoint paths for the valuation backend

use serde::{Deserialize, Serialize};

/// Analytics summary resource
pub const ANALYTICS_PATH: &str = "api/analytics";

/// Location catalog resource
pub const LOCATIONS_PATH: &str = "api/locations";

/// Estimate computation resource
pub const PREDICT_PATH: &str = "predict";

/// Backend root, answers with a plain-text greeting
pub const HEALTH_PATH: &str = "";

/// Body of a successful estimate response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub predicted_price: f64,
}

/// Body of a rejected request
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Extract the backend's error message from a non-2xx body.
///
/// Returns `None` unless the body is a JSON object with a non-blank string
/// `error` field.
pub fn rejection_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.trim().is_empty())
}
