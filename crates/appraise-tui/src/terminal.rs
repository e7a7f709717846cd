//! Panic handling for the alternate screen

use std::any::Any;
use std::panic::Location;

/// Leave raw mode before the previous hook prints the panic.
///
/// The panic is also written to the log file, which otherwise ends without a
/// trace when the UI dies.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        tracing::error!("{}", describe_panic(info.payload(), info.location()));
        previous(info);
    }));
}

fn describe_panic(payload: &(dyn Any + Send), location: Option<&Location<'_>>) -> String {
    let message = panic_message(payload);
    match location {
        Some(at) => format!("UI panicked at {}:{}: {}", at.file(), at.line(), message),
        None => format!("UI panicked: {}", message),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "non-string panic payload"
    }
}
