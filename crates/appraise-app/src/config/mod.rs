//! Configuration file parsing for appraise
//!
//! Supports `<config_dir>/appraise/config.toml` plus the `APPRAISE_API_URL`
//! override for the backend origin.

pub mod settings;
pub mod types;

pub use settings::{
    default_config_dir, init_config_dir, load_settings, resolve_base_url, API_URL_ENV,
};
pub use types::*;
