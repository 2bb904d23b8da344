//! Runtime configuration assembled from `PROBLEM_TRACKER_*` environment variables.

use std::path::PathBuf;

use chrono::Weekday;

use crate::env_config::parse_with_default;
use crate::{
    DEFAULT_DB_PATH, DEFAULT_DB_POOL_SIZE, DEFAULT_EXPORT_HOUR, DEFAULT_EXPORT_MINUTE,
    DEFAULT_EXPORT_PATH, DEFAULT_UPLOAD_DIR, ExportSchedule,
};

pub const ENV_DB_PATH: &str = "PROBLEM_TRACKER_DB_PATH";
pub const ENV_UPLOAD_DIR: &str = "PROBLEM_TRACKER_UPLOAD_DIR";
pub const ENV_EXPORT_PATH: &str = "PROBLEM_TRACKER_EXPORT_PATH";
pub const ENV_EXPORT_WEEKDAY: &str = "PROBLEM_TRACKER_EXPORT_WEEKDAY";
pub const ENV_EXPORT_HOUR: &str = "PROBLEM_TRACKER_EXPORT_HOUR";
pub const ENV_EXPORT_MINUTE: &str = "PROBLEM_TRACKER_EXPORT_MINUTE";
pub const ENV_DB_POOL_SIZE: &str = "PROBLEM_TRACKER_DB_POOL_SIZE";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_path: PathBuf,
    /// Media directory for uploaded images, created on startup if missing
    pub upload_dir: PathBuf,
    /// Spreadsheet location, overwritten by every export
    pub export_path: PathBuf,
    pub schedule: ExportSchedule,
    pub db_pool_size: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            upload_dir: PathBuf::from(DEFAULT_UPLOAD_DIR),
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
            schedule: ExportSchedule::default(),
            db_pool_size: DEFAULT_DB_POOL_SIZE,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable source; unset or empty values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = |var: &str, default: &str| {
            lookup(var).filter(|v| !v.trim().is_empty()).map_or_else(|| PathBuf::from(default), PathBuf::from)
        };

        let weekday = parse_with_default(ENV_EXPORT_WEEKDAY, lookup(ENV_EXPORT_WEEKDAY), Weekday::Sun);
        let hour = parse_with_default(ENV_EXPORT_HOUR, lookup(ENV_EXPORT_HOUR), DEFAULT_EXPORT_HOUR);
        let minute =
            parse_with_default(ENV_EXPORT_MINUTE, lookup(ENV_EXPORT_MINUTE), DEFAULT_EXPORT_MINUTE);
        let schedule = ExportSchedule::new(weekday, hour, minute).unwrap_or_else(|| {
            tracing::warn!(hour, minute, "invalid export time, using default schedule");
            ExportSchedule::default()
        });

        Self {
            db_path: path(ENV_DB_PATH, DEFAULT_DB_PATH),
            upload_dir: path(ENV_UPLOAD_DIR, DEFAULT_UPLOAD_DIR),
            export_path: path(ENV_EXPORT_PATH, DEFAULT_EXPORT_PATH),
            schedule,
            db_pool_size: parse_with_default(
                ENV_DB_POOL_SIZE,
                lookup(ENV_DB_POOL_SIZE),
                DEFAULT_DB_POOL_SIZE,
            )
            .max(1),
        }
    }
}
