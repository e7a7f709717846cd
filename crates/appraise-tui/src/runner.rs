//! Main TUI runner - entry point and event loop

use appraise_api::ValuationBackend;
use appraise_app::config::Settings;
use appraise_app::Engine;
use appraise_core::prelude::*;

use crate::{event, render, terminal};

/// Run the interactive client against `backend`
pub async fn run<B>(settings: Settings, backend: B) -> Result<()>
where
    B: ValuationBackend + Clone + Send + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    info!(
        "Starting TUI: market={}, default view={:?}",
        settings.ui.market_name, settings.ui.default_view
    );

    let mut term = ratatui::init();

    let mut engine = Engine::new(settings, backend);
    engine.start();

    let result = run_loop(&mut term, &mut engine);

    ratatui::restore();

    info!("TUI exiting");
    result
}

/// Main event loop
fn run_loop<B>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<B>) -> Result<()>
where
    B: ValuationBackend + Clone + Send + Sync + 'static,
{
    while !engine.should_quit() {
        // Backend results and signals
        engine.drain_pending_messages();

        terminal
            .draw(|frame| render::view(frame, &engine.state))
            .map_err(|e| Error::terminal(e.to_string()))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
