#![allow(
    clippy::redundant_pub_crate,
    reason = "migrations module is private, pub(crate) is intentional"
)]

mod column_helpers;
mod v1;

pub(crate) use column_helpers::column_names;
use column_helpers::add_column_if_not_exists;
use rusqlite::Connection;

pub const SCHEMA_VERSION: i32 = 2;

/// Bring the schema up to date. Safe to run on every process start.
///
/// Both steps are guarded by existence checks rather than only by
/// `user_version`, so a database created before versioning (no `priority`
/// column, `user_version = 0`) is upgraded in place with its rows intact.
///
/// Connection pragmas are left to the pool's init hook.
pub fn run_migrations(conn: &Connection) -> Result<(), rusqlite::Error> {
    let current_version: i32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    tracing::info!("Database schema version: {} (target: {})", current_version, SCHEMA_VERSION);

    if current_version < 1i32 {
        tracing::info!("Running migration v1: problems table");
        conn.execute_batch(v1::SQL)?;
    }

    if current_version < 2i32 {
        tracing::info!("Running migration v2: priority column on problems");
        add_column_if_not_exists(conn, "problems", "priority", "TEXT DEFAULT 'Medium'")?;
    }

    conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    tracing::info!("Database schema up to date (version {})", SCHEMA_VERSION);

    Ok(())
}
