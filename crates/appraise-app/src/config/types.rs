//! Configuration types for appraise

use serde::{Deserialize, Serialize};

use crate::state::ViewKind;

/// Application settings (`config.toml`)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Backend connection settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Origin shared by every backend request
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// View shown at startup
    #[serde(default)]
    pub default_view: ViewKind,

    /// City shown in titles ("Ahmedabad Market Overview")
    #[serde(default = "default_market_name")]
    pub market_name: String,

    /// Show the key-hint footer
    #[serde(default = "default_true")]
    pub show_footer: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            default_view: ViewKind::default(),
            market_name: default_market_name(),
            show_footer: true,
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_market_name() -> String {
    "Ahmedabad".to_string()
}

fn default_true() -> bool {
    true
}
