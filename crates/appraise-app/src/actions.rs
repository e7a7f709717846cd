//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every action becomes one tokio task that talks to the backend and reports
//! back with a generation-tagged [`Message`]. Tasks are never cancelled; the
//! update function drops results whose view is gone.

use appraise_api::ValuationBackend;
use appraise_core::{EstimateRequest, ResultExt};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::estimator::EstimateFailure;
use crate::message::Message;
use crate::state::ViewGeneration;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action<B>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, backend: B)
where
    B: ValuationBackend + Clone + Send + Sync + 'static,
{
    match action {
        UpdateAction::FetchAnalytics { generation } => {
            tokio::spawn(async move {
                fetch_analytics(generation, msg_tx, backend).await;
            });
        }

        UpdateAction::FetchLocations { generation } => {
            tokio::spawn(async move {
                fetch_locations(generation, msg_tx, backend).await;
            });
        }

        UpdateAction::SubmitEstimate {
            generation,
            request,
        } => {
            tokio::spawn(async move {
                submit_estimate(generation, request, msg_tx, backend).await;
            });
        }
    }
}

async fn fetch_analytics<B: ValuationBackend>(
    generation: ViewGeneration,
    msg_tx: mpsc::Sender<Message>,
    backend: B,
) {
    debug!("Fetching analytics for {}", generation);
    let message = match backend
        .fetch_analytics()
        .await
        .with_context(|| format!("Analytics fetch for {} failed", generation))
    {
        Ok(snapshot) => Message::AnalyticsLoaded {
            generation,
            snapshot,
        },
        Err(e) => Message::AnalyticsFetchFailed {
            generation,
            reason: e.to_string(),
        },
    };
    send(&msg_tx, message).await;
}

async fn fetch_locations<B: ValuationBackend>(
    generation: ViewGeneration,
    msg_tx: mpsc::Sender<Message>,
    backend: B,
) {
    debug!("Fetching location catalog for {}", generation);
    let message = match backend
        .fetch_locations()
        .await
        .with_context(|| format!("Location catalog fetch for {} failed", generation))
    {
        Ok(catalog) => Message::LocationsLoaded {
            generation,
            catalog,
        },
        Err(e) => Message::LocationsFetchFailed {
            generation,
            reason: e.to_string(),
        },
    };
    send(&msg_tx, message).await;
}

async fn submit_estimate<B: ValuationBackend>(
    generation: ViewGeneration,
    request: EstimateRequest,
    msg_tx: mpsc::Sender<Message>,
    backend: B,
) {
    debug!("Requesting estimate for {}", generation);
    let message = match backend
        .predict(&request)
        .await
        .with_context(|| format!("Estimate for {} failed", generation))
    {
        Ok(price) => Message::EstimateSucceeded { generation, price },
        Err(e) => Message::EstimateFailed {
            generation,
            failure: EstimateFailure::from(&e),
        },
    };
    send(&msg_tx, message).await;
}

async fn send(msg_tx: &mpsc::Sender<Message>, message: Message) {
    if msg_tx.send(message).await.is_err() {
        warn!("Message channel closed, dropping backend result");
    }
}
