//! Settings loader for `config.toml` and base-address resolution

use super::types::Settings;
use appraise_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "appraise";

/// Environment variable overriding the configured backend address
pub const API_URL_ENV: &str = "APPRAISE_API_URL";

/// Default configuration directory (`~/.config/appraise` on Linux)
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Load settings from `<config_dir>/config.toml`.
///
/// A missing file yields defaults; an unreadable or invalid file is logged
/// and also yields defaults.
pub fn load_settings(config_dir: &Path) -> Settings {
    let config_path = config_dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create the config directory with a commented default `config.toml`
pub fn init_config_dir(config_dir: &Path) -> Result<()> {
    if !config_dir.exists() {
        std::fs::create_dir_all(config_dir)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    let config_path = config_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# appraise configuration

[api]
# Origin of the valuation backend. Overridden by APPRAISE_API_URL or --api-url.
base_url = "http://localhost:5000"

[ui]
# View shown at startup: "analytics" or "estimator"
default_view = "analytics"
market_name = "Ahmedabad"
show_footer = true
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(())
}

/// Resolve the backend origin once for the whole process.
///
/// Priority: command-line flag, then `APPRAISE_API_URL`, then the config
/// file value.
pub fn resolve_base_url(cli_override: Option<&str>, settings: &Settings) -> String {
    if let Some(url) = cli_override.filter(|u| !u.trim().is_empty()) {
        debug!("Backend address from command line: {}", url);
        return url.trim().to_string();
    }

    if let Ok(url) = std::env::var(API_URL_ENV) {
        if !url.trim().is_empty() {
            debug!("Backend address from {}: {}", API_URL_ENV, url);
            return url.trim().to_string();
        }
    }

    settings.api.base_url.clone()
}
