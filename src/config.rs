//! Runtime configuration.
//!
//! Values come from the process environment, which `main` seeds from a
//! `.env` file via `dotenvy`. Command line flags override them.

use std::path::PathBuf;
use tracing::warn;

pub const DEFAULT_DATA_PATH: &str = "public/data/Summer-Olympic-medals-1976-to-2008.csv";
pub const DEFAULT_TOP_LIMIT: usize = 10;
pub const DEFAULT_LOG_FILE: &str = "logs/olympic_medals.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Medal table CSV (`OLYMPICS_DATA_PATH`).
    pub data_path: PathBuf,
    /// Length of top-N lists (`OLYMPICS_TOP_LIMIT`).
    pub top_limit: usize,
    /// JSON log file (`LOG_FILE_PATH`).
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            top_limit: DEFAULT_TOP_LIMIT,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl AppConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Unset keys use defaults; a limit
    /// that is not a positive integer is ignored with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let top_limit = match lookup("OLYMPICS_TOP_LIMIT") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    warn!(value = %raw, "Invalid OLYMPICS_TOP_LIMIT, using default");
                    defaults.top_limit
                }
            },
            None => defaults.top_limit,
        };

        Self {
            data_path: lookup("OLYMPICS_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            top_limit,
            log_file: lookup("LOG_FILE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_file),
        }
    }

    /// Applies command line overrides.
    pub fn with_overrides(mut self, data_path: Option<PathBuf>, top_limit: Option<usize>) -> Self {
        if let Some(path) = data_path {
            self.data_path = path;
        }
        if let Some(limit) = top_limit {
            self.top_limit = limit;
        }
        self
    }
}
