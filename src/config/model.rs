//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use crate::app::route::Route;
use crate::forms::personal::UF_LIST;
use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Route shown first, like a router's initial history entry.
    #[serde(default = "default_start_route")]
    pub start_route: Route,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub personal: PersonalConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            start_route: default_start_route(),
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
            personal: PersonalConfig::default(),
        }
    }
}

fn default_start_route() -> Route {
    Route::Home
}

/// Terminal UI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Interval between tick events, in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Show key binding hints in the status bar.
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// How many ticks a status message stays on screen.
    #[serde(default = "default_status_ticks")]
    pub status_ticks: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            show_key_hints: true,
            status_ticks: default_status_ticks(),
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_status_ticks() -> u64 {
    80
}

fn default_true() -> bool {
    true
}

/// Diagnostic log file settings.
///
/// The log never goes to the terminal; it is written to
/// `<log_dir>/formwizard_<date>.log`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Directory for log files. Supports `~` for the home directory.
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_dir: default_log_dir(),
            level: default_level(),
        }
    }
}

fn default_log_dir() -> String {
    "~/.local/share/formwizard/logs".to_string()
}

fn default_level() -> String {
    "info".to_string()
}

/// Personal form settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalConfig {
    /// Options of the `Estado` select, in display order.
    #[serde(default = "default_uf_options")]
    pub uf_options: Vec<String>,
}

impl Default for PersonalConfig {
    fn default() -> Self {
        Self {
            uf_options: default_uf_options(),
        }
    }
}

fn default_uf_options() -> Vec<String> {
    UF_LIST.iter().map(|s| s.to_string()).collect()
}
