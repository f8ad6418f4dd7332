//! Database connection manager backed by an r2d2 SQLite pool.

use std::path::{Path, PathBuf};

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use shopsync_domain::{Result, ShopSyncError};
use tracing::info;

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Database manager that wraps an r2d2 pool of SQLite connections.
pub struct DbManager {
    pool: Pool<SqliteConnectionManager>,
    path: PathBuf,
}

impl DbManager {
    /// Create a new manager with the given pool size.
    pub fn new<P: AsRef<Path>>(db_path: P, pool_size: u32) -> Result<Self> {
        let path = db_path.as_ref().to_path_buf();
        let manager = SqliteConnectionManager::file(&path);
        let pool = Pool::builder().max_size(pool_size.max(1)).build(manager).map_err(|err| {
            ShopSyncError::Persistence(format!("failed to build connection pool: {err}"))
        })?;

        info!(
            db_path = %path.display(),
            max_connections = pool.max_size(),
            "sqlite pool initialised"
        );

        Ok(Self { pool, path })
    }

    /// Acquire a connection from the pool.
    pub fn get_connection(&self) -> Result<PooledConnection<SqliteConnectionManager>> {
        self.pool.get().map_err(|err| {
            ShopSyncError::Persistence(format!("connection unavailable: {err}"))
        })
    }

    /// Ensure the full schema exists on the current database.
    pub fn run_migrations(&self) -> Result<()> {
        let conn = self.get_connection()?;
        conn.execute_batch(SCHEMA_SQL)
            .map_err(|err| ShopSyncError::Persistence(format!("migration failed: {err}")))?;
        Ok(())
    }

    /// Return the configured database path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Verify database connectivity with a trivial query.
    pub fn health_check(&self) -> Result<()> {
        let conn = self.get_connection()?;
        conn.query_row("SELECT 1", [], |_| Ok(()))
            .map_err(|err| ShopSyncError::Persistence(format!("health check failed: {err}")))?;
        Ok(())
    }
}
