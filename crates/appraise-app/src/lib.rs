//! appraise-app - Application state and orchestration for appraise
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management:
//! the two client views (market analytics and the valuation estimator), the
//! messages that drive them, the update function, the actions that reach the
//! backend, and the Engine that ties them to a message channel.

pub mod actions;
pub mod analytics;
pub mod config;
pub mod engine;
pub mod estimator;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{ActiveView, AppState, ViewGeneration, ViewKind};
