//! # appraise-api - Backend Contract
//!
//! Everything needed to talk to the valuation backend: the JSON wire types,
//! the [`ValuationBackend`] trait consumed by the application layer, and the
//! reqwest-based [`ApiClient`] that implements it over HTTP.
//!
//! ## Public API
//!
//! - [`ValuationBackend`] - Async backend operations (analytics, catalog, estimate, health)
//! - [`ApiClient`] - HTTP implementation bound to one base address
//! - [`protocol`] - Request/response bodies and endpoint paths
//!
//! With the `test-helpers` feature, [`test_utils::FakeBackend`] provides a
//! scripted in-memory backend for tests in downstream crates.

pub mod backend;
pub mod client;
pub mod protocol;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use backend::{LocalValuationBackend, ValuationBackend};
pub use client::ApiClient;
pub use protocol::{ErrorBody, PredictResponse};
