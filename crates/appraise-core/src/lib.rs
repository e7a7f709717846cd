//! # appraise-core - Core Domain Types
//!
//! Foundation crate for appraise. Provides domain types, error handling,
//! logging bootstrap and currency formatting.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`AnalyticsSnapshot`] - Precomputed market summary (top locations, BHK distribution)
//! - [`LocationCatalog`] - Server-ordered list of valid location names
//! - [`EstimateRequest`] - Property features exactly as entered by the user
//! - [`FetchStatus`] - Observable status of a background fetch
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ### Formatting (`currency`)
//! - [`format_currency()`] - Whole-rupee en-IN rendering (`₹85,00,000`)
//! - [`format_crore()`], [`format_lakh()`], [`format_lakh_tick()`] - Coarse chart units
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use appraise_core::prelude::*;
//! ```

pub mod currency;
pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all appraise crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use currency::{format_crore, format_currency, format_lakh, format_lakh_tick};
pub use error::{Error, Result, ResultExt};
pub use types::{
    AnalyticsSnapshot, AppPhase, BhkPrice, EstimateRequest, FetchStatus, LocationCatalog,
    LocationPrice,
};
