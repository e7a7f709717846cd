//! Message processing
//!
//! Runs a message and its follow-ups through the TEA update function and
//! dispatches every resulting action against the backend.

use appraise_api::ValuationBackend;
use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<B>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    backend: &B,
) where
    B: ValuationBackend + Clone + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), backend.clone());
        }

        msg = result.message;
    }
}
