//! Headless mode runner - one backend operation per invocation
//!
//! Commands report through an event sink so the same code path writes NDJSON
//! to stdout in production and collects events in tests.

use appraise_api::ValuationBackend;
use appraise_app::analytics::{bar_series, proportion_series};
use appraise_app::estimator::{EstimateFailure, FormState, Valuation};
use appraise_core::prelude::*;

use super::{BhkEntry, HeadlessEvent, LocationEntry};

/// Operation requested on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadlessCommand {
    /// Probe the backend health endpoint
    Ping,
    /// Print the location catalog
    Locations,
    /// Print the market snapshot
    Analytics,
    /// Submit one estimate, values as typed
    Estimate {
        area: String,
        bhk: String,
        location: String,
    },
}

/// Run `command` against `backend`, writing events to stdout
pub async fn run_headless<B>(backend: &B, base_url: &str, command: HeadlessCommand) -> Result<()>
where
    B: ValuationBackend,
{
    info!("Headless command {:?} against {}", command, base_url);
    let mut emit = |event: HeadlessEvent| event.emit();
    execute(backend, base_url, command, &mut emit).await
}

/// Run `command`, handing every event to `emit`.
///
/// A failed operation emits a fatal `error` event and returns the error.
pub async fn execute<B, F>(
    backend: &B,
    base_url: &str,
    command: HeadlessCommand,
    emit: &mut F,
) -> Result<()>
where
    B: ValuationBackend,
    F: FnMut(HeadlessEvent),
{
    emit(HeadlessEvent::started(base_url));

    let result = match command {
        HeadlessCommand::Ping => ping(backend, emit).await,
        HeadlessCommand::Locations => locations(backend, emit).await,
        HeadlessCommand::Analytics => analytics(backend, emit).await,
        HeadlessCommand::Estimate {
            area,
            bhk,
            location,
        } => {
            let form = FormState {
                area,
                bhk,
                location,
                ..FormState::default()
            };
            estimate(backend, form, emit).await
        }
    };

    if let Err(ref e) = result {
        error!("Headless command failed: {}", e);
    }
    result
}

async fn ping<B, F>(backend: &B, emit: &mut F) -> Result<()>
where
    B: ValuationBackend,
    F: FnMut(HeadlessEvent),
{
    match backend.ping().await {
        Ok(message) => {
            emit(HeadlessEvent::pong(message));
            Ok(())
        }
        Err(e) => {
            emit(HeadlessEvent::error(e.to_string(), true));
            Err(e)
        }
    }
}

async fn locations<B, F>(backend: &B, emit: &mut F) -> Result<()>
where
    B: ValuationBackend,
    F: FnMut(HeadlessEvent),
{
    match backend.fetch_locations().await {
        Ok(catalog) => {
            emit(HeadlessEvent::locations(catalog.names().to_vec()));
            Ok(())
        }
        Err(e) => {
            emit(HeadlessEvent::error(e.to_string(), true));
            Err(e)
        }
    }
}

async fn analytics<B, F>(backend: &B, emit: &mut F) -> Result<()>
where
    B: ValuationBackend,
    F: FnMut(HeadlessEvent),
{
    let snapshot = match backend.fetch_analytics().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            emit(HeadlessEvent::error(e.to_string(), true));
            return Err(e);
        }
    };

    let top_locations = bar_series(&snapshot)
        .into_iter()
        .map(|point| LocationEntry {
            name: point.label,
            price: point.value,
            display: point.tooltip,
        })
        .collect();
    let bhk_distribution = proportion_series(&snapshot)
        .into_iter()
        .map(|slice| BhkEntry {
            label: slice.label,
            avg_price: slice.value,
            display: slice.tooltip,
            share: slice.share,
        })
        .collect();

    emit(HeadlessEvent::analytics(top_locations, bhk_distribution));
    Ok(())
}

/// Validate through the form state machine and submit once.
///
/// On failure the event carries the same inline message the TUI would show.
async fn estimate<B, F>(backend: &B, mut form: FormState, emit: &mut F) -> Result<()>
where
    B: ValuationBackend,
    F: FnMut(HeadlessEvent),
{
    let request = match form.begin_submit() {
        Ok(request) => request,
        Err(e) => {
            emit(HeadlessEvent::error(form.error.clone(), true));
            return Err(e);
        }
    };

    emit(HeadlessEvent::estimate_submitted(
        &request.area,
        &request.bhk,
        &request.location,
    ));

    match backend.predict(&request).await {
        Ok(price) => {
            let valuation = Valuation::derive(price, &request);
            info!("Estimate for {}: {}", request.location, valuation.estimated_value);
            emit(HeadlessEvent::estimate(
                price,
                valuation.estimated_value,
                valuation.price_per_sqft,
                valuation.location,
            ));
            Ok(())
        }
        Err(e) => {
            form.resolve_failure(&EstimateFailure::from(&e));
            emit(HeadlessEvent::error(form.error.clone(), true));
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use appraise_api::test_utils::{FakeBackend, Scripted};
    use appraise_app::estimator::{FALLBACK_ERROR_MESSAGE, MISSING_FIELDS_MESSAGE};

    async fn run(backend: &FakeBackend, command: HeadlessCommand) -> (Result<()>, Vec<HeadlessEvent>) {
        let mut events = Vec::new();
        let mut sink = |event: HeadlessEvent| events.push(event);
        let result = execute(backend, "http://localhost:5000/", command, &mut sink).await;
        (result, events)
    }

    fn estimate_command(area: &str, bhk: &str, location: &str) -> HeadlessCommand {
        HeadlessCommand::Estimate {
            area: area.into(),
            bhk: bhk.into(),
            location: location.into(),
        }
    }

    fn names(events: &[HeadlessEvent]) -> Vec<&'static str> {
        events.iter().map(HeadlessEvent::name).collect()
    }

    #[tokio::test]
    async fn test_ping_reports_backend_message() {
        let backend = FakeBackend::new();
        let (result, events) = run(&backend, HeadlessCommand::Ping).await;

        assert!(result.is_ok());
        assert_eq!(names(&events), ["started", "pong"]);
        assert!(matches!(
            &events[1],
            HeadlessEvent::Pong { message, .. } if message == "Server is up and running!"
        ));
    }

    #[tokio::test]
    async fn test_locations_keep_server_order() {
        let backend = FakeBackend::new().with_locations(Scripted::Ok(
            appraise_core::LocationCatalog::from_names(["Thaltej", "Ambli", "Thaltej"]),
        ));
        let (result, events) = run(&backend, HeadlessCommand::Locations).await;

        assert!(result.is_ok());
        match &events[1] {
            HeadlessEvent::Locations {
                count, locations, ..
            } => {
                assert_eq!(*count, 2);
                assert_eq!(locations, &["Thaltej".to_string(), "Ambli".to_string()]);
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_analytics_carries_display_values() {
        let backend = FakeBackend::new();
        let (result, events) = run(&backend, HeadlessCommand::Analytics).await;

        assert!(result.is_ok());
        match &events[1] {
            HeadlessEvent::Analytics {
                top_locations,
                bhk_distribution,
                ..
            } => {
                assert_eq!(top_locations[0].name, "Ambli");
                assert_eq!(top_locations[0].display, "₹1.25 Cr");
                assert_eq!(bhk_distribution[1].label, "2 BHK");
                assert_eq!(bhk_distribution[1].display, "₹45.0 Lac");
                let total: f64 = bhk_distribution.iter().map(|b| b.share).sum();
                assert!((total - 1.0).abs() < 1e-9);
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_analytics_failure_is_fatal() {
        let backend = FakeBackend::new().with_analytics(Scripted::Status(500));
        let (result, events) = run(&backend, HeadlessCommand::Analytics).await;

        assert!(result.is_err());
        assert_eq!(names(&events), ["started", "error"]);
    }

    #[tokio::test]
    async fn test_estimate_derives_values() {
        let backend = FakeBackend::new();
        let (result, events) = run(&backend, estimate_command("1500", "3", "Bopal")).await;

        assert!(result.is_ok());
        assert_eq!(names(&events), ["started", "estimate_submitted", "estimate"]);
        match &events[2] {
            HeadlessEvent::Estimate {
                estimated_value,
                price_per_sqft,
                location,
                ..
            } => {
                assert_eq!(estimated_value, "₹85,00,000");
                assert_eq!(price_per_sqft.as_deref(), Some("₹5,667"));
                assert_eq!(location, "Bopal");
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_estimate_with_missing_field_sends_nothing() {
        let backend = FakeBackend::new();
        let (result, events) = run(&backend, estimate_command("1500", "", "Bopal")).await;

        assert!(result.is_err());
        assert_eq!(backend.predict_calls(), 0);
        assert!(matches!(
            &events[1],
            HeadlessEvent::Error { message, fatal: true, .. } if message == MISSING_FIELDS_MESSAGE
        ));
    }

    #[tokio::test]
    async fn test_estimate_values_sent_as_typed() {
        let backend = FakeBackend::new();
        let _ = run(&backend, estimate_command("1200.50", "2", "Sindhu Bhavan")).await;

        let sent = backend.predict_requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].area, "1200.50");
        assert_eq!(sent[0].bhk, "2");
        assert_eq!(sent[0].location, "Sindhu Bhavan");
    }

    #[tokio::test]
    async fn test_estimate_rejection_is_verbatim() {
        let backend = FakeBackend::new().with_predict(Scripted::Rejected {
            status: 400,
            message: "Location not found".into(),
        });
        let (result, events) = run(&backend, estimate_command("1500", "3", "Nowhere")).await;

        assert!(result.is_err());
        assert!(matches!(
            events.last(),
            Some(HeadlessEvent::Error { message, .. }) if message == "Location not found"
        ));
    }

    #[tokio::test]
    async fn test_estimate_unreachable_uses_fallback() {
        let backend = FakeBackend::new().with_predict(Scripted::Transport("refused".into()));
        let (_, events) = run(&backend, estimate_command("1500", "3", "Bopal")).await;

        assert!(matches!(
            events.last(),
            Some(HeadlessEvent::Error { message, .. }) if message == FALLBACK_ERROR_MESSAGE
        ));
    }

    #[tokio::test]
    async fn test_estimate_blank_rejection_uses_fallback() {
        let backend = FakeBackend::new().with_predict(Scripted::Rejected {
            status: 400,
            message: String::new(),
        });
        let (result, events) = run(&backend, estimate_command("1500", "3", "Bopal")).await;

        assert!(result.is_err());
        assert!(matches!(
            events.last(),
            Some(HeadlessEvent::Error { message, .. }) if message == FALLBACK_ERROR_MESSAGE
        ));
    }
}
