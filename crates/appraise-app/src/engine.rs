//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the application state, the message channel and the
//! backend handle. Frontends feed it input messages and drain backend results
//! through it; neither touches the backend directly.

use appraise_api::ValuationBackend;
use tokio::sync::mpsc;
use tracing::info;

use crate::config::Settings;
use crate::handler::mount_action;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Capacity of the unified message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for the valuation client.
///
/// Encapsulates all shared state between TUI and headless runners:
/// - TEA state management
/// - Message channel
/// - Backend handle used by background actions
pub struct Engine<B> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, key reader).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    backend: B,
}

impl<B> Engine<B>
where
    B: ValuationBackend + Clone + Send + Sync + 'static,
{
    /// Create an engine with the configured default view mounted.
    ///
    /// Nothing is fetched until [`Engine::start`].
    pub fn new(settings: Settings, backend: B) -> Self {
        let state = AppState::with_settings(settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);

        signals::spawn_signal_handler(msg_tx.clone());

        Self {
            state,
            msg_tx,
            msg_rx,
            backend,
        }
    }

    /// Issue the mount read of the initial view
    pub fn start(&mut self) {
        info!(
            "Starting with {:?} view {}",
            self.state.active_kind(),
            self.state.active_generation()
        );
        let action = mount_action(&self.state);
        crate::actions::handle_action(action, self.msg_tx.clone(), self.backend.clone());
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(&mut self.state, msg, &self.msg_tx, &self.backend);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. Used by the TUI runner
    /// which needs to drain all pending messages before rendering.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message and process it.
    ///
    /// Returns false once the channel is closed.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::{EstimatorPhase, FALLBACK_ERROR_MESSAGE};
    use crate::input_key::InputKey;
    use crate::state::ViewKind;
    use appraise_api::test_utils::{FakeBackend, Scripted};

    fn estimator_settings() -> Settings {
        let mut settings = Settings::default();
        settings.ui.default_view = ViewKind::Estimator;
        settings
    }

    async fn started(backend: FakeBackend, settings: Settings) -> Engine<FakeBackend> {
        let mut engine = Engine::new(settings, backend);
        engine.start();
        assert!(engine.process_next().await);
        engine
    }

    fn press(engine: &mut Engine<FakeBackend>, key: InputKey) {
        engine.process_message(Message::Key(key));
    }

    fn fill_and_focus_submit(engine: &mut Engine<FakeBackend>) {
        for c in "1500".chars() {
            press(engine, InputKey::Char(c));
        }
        press(engine, InputKey::Enter);
        press(engine, InputKey::Char('3'));
        press(engine, InputKey::Enter);
        press(engine, InputKey::Down);
        press(engine, InputKey::Enter);
    }

    #[tokio::test]
    async fn test_start_loads_analytics_once() {
        let backend = FakeBackend::new();
        let engine = started(backend.clone(), Settings::default()).await;

        let view = engine.state.analytics().unwrap();
        assert!(view.snapshot().is_some());
        assert_eq!(backend.analytics_calls(), 1);
        assert_eq!(backend.locations_calls(), 0);
    }

    #[tokio::test]
    async fn test_analytics_network_failure_degrades_quietly() {
        let backend = FakeBackend::new().with_analytics(Scripted::Transport("refused".into()));
        let engine = started(backend, Settings::default()).await;

        let view = engine.state.analytics().unwrap();
        assert!(!view.is_loading());
        assert!(view.snapshot().is_none());
        assert!(!engine.should_quit());
    }

    #[tokio::test]
    async fn test_slow_backend_sees_exactly_one_estimate() {
        let backend = FakeBackend::gated();
        let mut engine = started(backend.clone(), estimator_settings()).await;
        fill_and_focus_submit(&mut engine);

        press(&mut engine, InputKey::Enter);
        press(&mut engine, InputKey::Enter);
        engine.process_message(Message::SubmitEstimate);

        for _ in 0..5 {
            tokio::task::yield_now().await;
        }
        assert_eq!(backend.predict_calls(), 1);
        assert_eq!(
            engine.state.estimator().unwrap().form.phase(),
            EstimatorPhase::Submitting
        );

        backend.release_predict();
        assert!(engine.process_next().await);

        let view = engine.state.estimator().unwrap();
        assert_eq!(view.form.phase(), EstimatorPhase::Success);
        let valuation = view.valuation().unwrap();
        assert_eq!(valuation.estimated_value, "₹85,00,000");
        assert_eq!(valuation.price_per_sqft.as_deref(), Some("₹5,667"));
        assert_eq!(backend.predict_calls(), 1);
    }

    #[tokio::test]
    async fn test_result_after_unmount_is_discarded() {
        let backend = FakeBackend::gated();
        let mut engine = started(backend.clone(), estimator_settings()).await;
        fill_and_focus_submit(&mut engine);
        press(&mut engine, InputKey::Enter);

        // leave and come back: a fresh estimator instance
        press(&mut engine, InputKey::F(1));
        press(&mut engine, InputKey::F(2));

        backend.release_predict();
        let mut seen = 0;
        while seen < 3 {
            assert!(engine.process_next().await);
            seen += 1;
        }

        let view = engine.state.estimator().unwrap();
        assert_eq!(view.form.price, None);
        assert_eq!(view.form.phase(), EstimatorPhase::Idle);
        assert_eq!(view.form.area, "");
    }

    #[tokio::test]
    async fn test_unreachable_backend_shows_fallback() {
        let backend =
            FakeBackend::new().with_predict(Scripted::Transport("connection refused".into()));
        let mut engine = started(backend, estimator_settings()).await;
        fill_and_focus_submit(&mut engine);
        press(&mut engine, InputKey::Enter);
        assert!(engine.process_next().await);

        let form = &engine.state.estimator().unwrap().form;
        assert_eq!(form.error, FALLBACK_ERROR_MESSAGE);
        assert_eq!(form.price, None);
    }
}
