//! Diagnostic logging to disk.
//!
//! The terminal belongs to the UI, so `tracing` output is written to a daily
//! log file named `formwizard_<date>.log` in the configured log directory
//! (default: `~/.local/share/formwizard/logs/`). If the file cannot be opened
//! the subscriber is installed without a writer and logs are dropped.

use crate::config::LoggingConfig;
use chrono::NaiveDate;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Expand a leading `~` to the home directory.
pub fn expand_log_dir(log_dir: &str) -> PathBuf {
    if let Some(rest) = log_dir.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    } else if log_dir == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(log_dir)
}

pub fn log_file_path(config: &LoggingConfig, date: NaiveDate) -> PathBuf {
    expand_log_dir(&config.log_dir).join(format!("formwizard_{}.log", date.format("%Y-%m-%d")))
}

fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Returns the log file path when one is in use.
pub fn init_tracing(config: &LoggingConfig) -> Option<PathBuf> {
    if !config.enabled {
        return None;
    }

    let path = log_file_path(config, chrono::Local::now().date_naive());
    let file = path
        .parent()
        .map_or(Ok(()), fs::create_dir_all)
        .and_then(|_| OpenOptions::new().create(true).append(true).open(&path));

    match file {
        Ok(file) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(env_filter(config))
                .init();
            tracing::info!(path = %path.display(), "Logging initialized");
            Some(path)
        }
        Err(_) => {
            tracing_subscriber::registry().with(env_filter(config)).init();
            None
        }
    }
}
