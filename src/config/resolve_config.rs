use serde::{Deserialize, Serialize};

use crate::types::{non_empty, LogLevel, DEFAULT_TICKER};

pub const NETWORKS_ROUTE: &str = "/settings/networks";

/// Class names on the dropdown's own toggle controls. Clicks landing on these
/// are not "outside" the dropdown.
pub const TOGGLE_CLASS_NAMES: [&str; 5] = [
    "menu-icon",
    "network-name",
    "network-indicator",
    "network-caret",
    "network-component",
];

fn default_ticker() -> String {
    DEFAULT_TICKER.to_string()
}

fn default_networks_route() -> String {
    NETWORKS_ROUTE.to_string()
}

fn default_telemetry() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionConfig {
    #[serde(default)]
    pub log_level: LogLevel,
    /// Ticker used for custom endpoints that do not carry one
    #[serde(default = "default_ticker")]
    pub default_ticker: String,
    /// Route of the networks settings screen
    #[serde(default = "default_networks_route")]
    pub networks_route: String,
    /// Whether network switches emit a telemetry event
    #[serde(default = "default_telemetry")]
    pub telemetry: bool,
    /// Overrides the built-in toggle class allow-list
    #[serde(default)]
    pub toggle_class_names: Option<Vec<String>>,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            default_ticker: default_ticker(),
            networks_route: default_networks_route(),
            telemetry: default_telemetry(),
            toggle_class_names: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NormalizedConfig {
    /// Level for the controller's operational messages
    pub log_level: LogLevel,
    pub default_ticker: String,
    pub networks_route: String,
    pub telemetry: bool,
    pub toggle_class_names: Vec<String>,
}

impl Default for NormalizedConfig {
    fn default() -> Self {
        resolve_config(SelectionConfig::default())
    }
}

pub fn resolve_config(config: SelectionConfig) -> NormalizedConfig {
    NormalizedConfig {
        log_level: config.log_level,
        default_ticker: non_empty(Some(config.default_ticker.trim()))
            .unwrap_or(DEFAULT_TICKER)
            .to_string(),
        networks_route: non_empty(Some(config.networks_route.trim()))
            .unwrap_or(NETWORKS_ROUTE)
            .to_string(),
        telemetry: config.telemetry,
        toggle_class_names: config
            .toggle_class_names
            .unwrap_or_else(|| TOGGLE_CLASS_NAMES.iter().map(|c| c.to_string()).collect()),
    }
}
