//! Shared constants for problem-tracker.

/// Priority assigned when a record carries none, also the column default.
pub const DEFAULT_PRIORITY: &str = "Medium";

/// Format of the server-stamped `date` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const DEFAULT_DB_PATH: &str = "database.db";

pub const DEFAULT_UPLOAD_DIR: &str = "static/uploads";

pub const DEFAULT_EXPORT_PATH: &str = "problem_report.xlsx";

/// Weekly export slot: Sunday 23:00 server-local time.
pub const DEFAULT_EXPORT_HOUR: u32 = 23;

pub const DEFAULT_EXPORT_MINUTE: u32 = 0;

pub const DEFAULT_DB_POOL_SIZE: u32 = 4;
