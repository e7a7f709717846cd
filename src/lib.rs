//! appraise - terminal client for the property valuation backend
//!
//! The binary wires settings, logging and the HTTP client together and then
//! hands off to either the TUI (`appraise-tui`) or a headless subcommand.

pub mod headless;

// Re-export main entry points
pub use appraise_tui::run;
pub use headless::{run_headless, HeadlessCommand, HeadlessEvent};
