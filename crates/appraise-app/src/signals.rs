//! Quit on SIGINT/SIGTERM (Ctrl+C on Windows)
//!
//! The TUI reads keys in raw mode, so a terminal Ctrl+C arrives as a key
//! press; these signals come from outside the process (`kill`, a closing
//! terminal, a supervisor).

use std::future::Future;

use appraise_core::prelude::*;
use tokio::sync::mpsc;

use crate::message::Message;

/// Listen for termination signals in the background and post `Message::Quit`
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(quit_on(termination_signal(), tx));
}

/// Post a single `Message::Quit` once `signal` resolves successfully
async fn quit_on<F>(signal: F, tx: mpsc::Sender<Message>)
where
    F: Future<Output = Result<&'static str>>,
{
    match signal.await {
        Ok(name) => {
            info!("{} received, shutting down", name);
            if tx.send(Message::Quit).await.is_err() {
                debug!("Engine already gone, quit not delivered");
            }
        }
        Err(e) => error!("Cannot listen for termination signals: {}", e),
    }
}

#[cfg(unix)]
async fn termination_signal() -> Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;

    Ok(tokio::select! {
        _ = interrupt.recv() => "SIGINT",
        _ = terminate.recv() => "SIGTERM",
    })
}

#[cfg(windows)]
async fn termination_signal() -> Result<&'static str> {
    tokio::signal::ctrl_c().await?;
    Ok("Ctrl+C")
}
