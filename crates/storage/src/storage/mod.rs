//! `SQLite` record store backed by an r2d2 connection pool.
//!
//! All methods are synchronous and issue a single statement each.

mod problems;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::path::Path;

use problem_tracker_core::DEFAULT_DB_POOL_SIZE;

use crate::error::Result;
use crate::migrations;

/// Type alias for pooled connection
pub(crate) type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Main storage struct wrapping `SQLite` connection pool
#[derive(Clone, Debug)]
pub struct Storage {
    pub(crate) pool: Pool<SqliteConnectionManager>,
}

/// Get a connection from the pool
pub(crate) fn get_conn(pool: &Pool<SqliteConnectionManager>) -> Result<PooledConn> {
    Ok(pool.get()?)
}

fn init_connection(conn: &mut Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "PRAGMA busy_timeout = 30000;
         PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;",
    )?;
    Ok(())
}

impl Storage {
    /// Open storage with the default pool size.
    pub fn new(db_path: &Path) -> Result<Self> {
        Self::with_pool_size(db_path, DEFAULT_DB_POOL_SIZE)
    }

    /// Open storage and bring the schema up to date before returning.
    pub fn with_pool_size(db_path: &Path, pool_size: u32) -> Result<Self> {
        let manager = SqliteConnectionManager::file(db_path).with_init(init_connection);
        let pool = Pool::builder().max_size(pool_size).build(manager)?;

        // Run migrations on first connection
        let conn = pool.get()?;
        migrations::run_migrations(&conn)?;
        drop(conn);

        tracing::info!(pool_size = pool_size, path = %db_path.display(), "Storage initialized with connection pool");

        Ok(Self { pool })
    }

    /// Column names of the `problems` table, in schema order.
    pub fn problem_columns(&self) -> Result<Vec<String>> {
        let conn = get_conn(&self.pool)?;
        Ok(migrations::column_names(&conn, "problems")?)
    }
}
