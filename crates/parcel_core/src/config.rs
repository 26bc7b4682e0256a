//! Runtime configuration for embedding the parcel tracker.
//!
//! Values come from `PARCEL_DB_PATH`, `PARCEL_LOG_LEVEL` and `PARCEL_LOG_DIR`;
//! unset or blank variables fall back to defaults.

use crate::db::{open_db, DbResult};
use crate::logging::{default_log_level, init_logging, LoggingError};
use rusqlite::Connection;
use std::path::PathBuf;

pub const DEFAULT_DB_FILE_NAME: &str = "tracker.db";

pub const ENV_DB_PATH: &str = "PARCEL_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "PARCEL_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "PARCEL_LOG_DIR";

/// Database and logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// SQLite database file holding the `parcel` table.
    pub db_path: PathBuf,
    pub log_level: String,
    /// File logging stays off when `None`.
    pub log_dir: Option<PathBuf>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl TrackerConfig {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };

        let defaults = Self::default();
        Self {
            db_path: value(ENV_DB_PATH).map_or(defaults.db_path, PathBuf::from),
            log_level: value(ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
            log_dir: value(ENV_LOG_DIR).map(PathBuf::from),
        }
    }

    /// Starts file logging when a log directory is configured.
    pub fn init_logging(&self) -> Result<(), LoggingError> {
        match &self.log_dir {
            Some(dir) => init_logging(&self.log_level, dir),
            None => Ok(()),
        }
    }
}

/// Opens the configured database file with the parcel schema in place.
pub fn open_store_db(config: &TrackerConfig) -> DbResult<Connection> {
    open_db(&config.db_path)
}
