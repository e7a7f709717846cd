//! Scripted in-memory backend for tests
//!
//! Available to downstream crates through the `test-helpers` feature.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use appraise_core::prelude::*;
use appraise_core::{AnalyticsSnapshot, BhkPrice, EstimateRequest, LocationCatalog, LocationPrice};
use tokio::sync::Notify;

use crate::backend::ValuationBackend;

/// Canned outcome for one backend operation
#[derive(Debug, Clone)]
pub enum Scripted<T> {
    Ok(T),
    /// Request never completes (connection refused)
    Transport(String),
    /// Non-2xx with a JSON `error` payload
    Rejected { status: u16, message: String },
    /// Non-2xx without a payload
    Status(u16),
}

impl<T: Clone> Scripted<T> {
    fn to_result(&self) -> Result<T> {
        match self {
            Scripted::Ok(value) => Ok(value.clone()),
            Scripted::Transport(message) => Err(Error::transport(message.clone())),
            Scripted::Rejected { status, message } => {
                Err(Error::server_rejection(*status, message.clone()))
            }
            Scripted::Status(status) => Err(Error::unexpected_status(*status)),
        }
    }
}

struct Inner {
    analytics: Mutex<Scripted<AnalyticsSnapshot>>,
    locations: Mutex<Scripted<LocationCatalog>>,
    predict: Mutex<Scripted<f64>>,
    analytics_calls: AtomicUsize,
    locations_calls: AtomicUsize,
    predict_calls: AtomicUsize,
    predict_requests: Mutex<Vec<EstimateRequest>>,
    predict_gate: Option<Notify>,
}

/// In-memory [`ValuationBackend`] with scripted responses and call counters.
///
/// Clones share the same script and counters.
#[derive(Clone)]
pub struct FakeBackend {
    inner: Arc<Inner>,
}

impl FakeBackend {
    /// Backend answering every operation successfully with sample data
    pub fn new() -> Self {
        Self::build(false)
    }

    /// Like [`FakeBackend::new`], but `predict` waits for [`FakeBackend::release_predict`]
    pub fn gated() -> Self {
        Self::build(true)
    }

    fn build(gated: bool) -> Self {
        Self {
            inner: Arc::new(Inner {
                analytics: Mutex::new(Scripted::Ok(sample_snapshot())),
                locations: Mutex::new(Scripted::Ok(sample_catalog())),
                predict: Mutex::new(Scripted::Ok(8_500_000.0)),
                analytics_calls: AtomicUsize::new(0),
                locations_calls: AtomicUsize::new(0),
                predict_calls: AtomicUsize::new(0),
                predict_requests: Mutex::new(Vec::new()),
                predict_gate: gated.then(Notify::new),
            }),
        }
    }

    pub fn with_analytics(self, outcome: Scripted<AnalyticsSnapshot>) -> Self {
        *lock(&self.inner.analytics) = outcome;
        self
    }

    pub fn with_locations(self, outcome: Scripted<LocationCatalog>) -> Self {
        *lock(&self.inner.locations) = outcome;
        self
    }

    pub fn with_predict(self, outcome: Scripted<f64>) -> Self {
        *lock(&self.inner.predict) = outcome;
        self
    }

    /// Let one gated `predict` call complete
    pub fn release_predict(&self) {
        if let Some(gate) = &self.inner.predict_gate {
            gate.notify_one();
        }
    }

    pub fn analytics_calls(&self) -> usize {
        self.inner.analytics_calls.load(Ordering::SeqCst)
    }

    pub fn locations_calls(&self) -> usize {
        self.inner.locations_calls.load(Ordering::SeqCst)
    }

    pub fn predict_calls(&self) -> usize {
        self.inner.predict_calls.load(Ordering::SeqCst)
    }

    /// Every estimate request received, in arrival order
    pub fn predict_requests(&self) -> Vec<EstimateRequest> {
        lock(&self.inner.predict_requests).clone()
    }
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ValuationBackend for FakeBackend {
    async fn fetch_analytics(&self) -> Result<AnalyticsSnapshot> {
        self.inner.analytics_calls.fetch_add(1, Ordering::SeqCst);
        let outcome = lock(&self.inner.analytics).clone();
        outcome.to_result()
    }

    async fn fetch_locations(&self) -> Result<LocationCatalog> {
        self.inner.locations_calls.fetch_add(1, Ordering::SeqCst);
        let outcome = lock(&self.inner.locations).clone();
        outcome.to_result()
    }

    async fn predict(&self, request: &EstimateRequest) -> Result<f64> {
        self.inner.predict_calls.fetch_add(1, Ordering::SeqCst);
        lock(&self.inner.predict_requests).push(request.clone());

        if let Some(gate) = &self.inner.predict_gate {
            gate.notified().await;
        }

        let outcome = lock(&self.inner.predict).clone();
        outcome.to_result()
    }

    async fn ping(&self) -> Result<String> {
        Ok("Server is up and running!".to_string())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Snapshot matching the shape the production backend serves
pub fn sample_snapshot() -> AnalyticsSnapshot {
    let top = [
        ("Ambli", 12_500_000.0),
        ("Bodakdev", 11_000_000.0),
        ("Science City", 9_500_000.0),
        ("Sindhu Bhavan", 15_000_000.0),
        ("Bopal", 6_000_000.0),
    ];
    let bhk = [
        (1, 2_500_000.0),
        (2, 4_500_000.0),
        (3, 8_500_000.0),
        (4, 18_000_000.0),
        (5, 35_000_000.0),
        (6, 52_000_000.0),
    ];

    AnalyticsSnapshot {
        top_locations: top
            .iter()
            .map(|(name, price)| LocationPrice {
                name: name.to_string(),
                price: *price,
            })
            .collect(),
        bhk_distribution: bhk
            .iter()
            .map(|(bhk, avg_price)| BhkPrice {
                bhk: *bhk,
                avg_price: *avg_price,
            })
            .collect(),
    }
}

pub fn sample_catalog() -> LocationCatalog {
    LocationCatalog::from_names(["Sindhu Bhavan", "Bopal"])
}
