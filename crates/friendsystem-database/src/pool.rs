//! Connection pool over the relationship database.
//!
//! Coordinator calls arrive from arbitrarily many threads at once; an
//! r2d2-managed pool multiplexes them onto a bounded set of SQLite
//! connections. The database runs in WAL mode, so friend-list reads proceed
//! while a coordinator transaction holds the write lock.

use crate::{migrations, StoreError, StoreResult};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Configuration for the database pool.
///
/// Defaults mirror the tuning the embedding front end historically used:
/// at most 10 connections, one kept idle, 10 second acquisition timeout.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Maximum connections in the pool.
    pub max_size: u32,
    /// Minimum idle connections to maintain.
    pub min_idle: Option<u32>,
    /// Connection acquisition timeout.
    pub connection_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_size: 10,
            min_idle: Some(1),
            connection_timeout: Duration::from_secs(10),
        }
    }
}

/// Pool statistics for monitoring.
#[derive(Debug, Clone)]
pub struct PoolState {
    /// Total connections (active + idle).
    pub connections: u32,
    /// Currently idle connections.
    pub idle_connections: u32,
}

/// Bounded connection pool for the relationship store.
///
/// Constructed once by the embedding front end and injected into the
/// coordinator; opening the pool also bootstraps the relation schema.
pub struct DatabasePool {
    pool: Pool<SqliteConnectionManager>,
    path: String,
}

impl DatabasePool {
    /// Open the relationship database at the given path.
    ///
    /// Creates the file (and parent directory) if missing, applies the WAL
    /// and busy-timeout pragmas to every pooled connection, runs pending
    /// schema migrations, and builds the pool.
    pub fn open(path: &Path, config: PoolConfig) -> StoreResult<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let path_str = path.to_string_lossy().to_string();

        let manager = SqliteConnectionManager::file(path).with_init(|conn| {
            conn.execute_batch(
                "
                PRAGMA journal_mode = WAL;
                PRAGMA synchronous = NORMAL;
                PRAGMA foreign_keys = ON;
                PRAGMA temp_store = MEMORY;
                PRAGMA busy_timeout = 5000;
            ",
            )?;
            Ok(())
        });

        let pool = Pool::builder()
            .max_size(config.max_size)
            .min_idle(config.min_idle)
            .connection_timeout(config.connection_timeout)
            .build(manager)
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        info!(
            path = %path_str,
            max_size = config.max_size,
            "Database pool created"
        );

        // Run migrations on a dedicated connection
        {
            let conn = pool
                .get()
                .map_err(|e| StoreError::Unavailable(e.to_string()))?;
            migrations::run_migrations(&conn)?;
        }

        Ok(Self {
            pool,
            path: path_str,
        })
    }

    /// Acquire a connection from the pool.
    ///
    /// Blocks until one is free or the acquisition timeout elapses; the
    /// connection returns to the pool when dropped.
    pub fn get(&self) -> StoreResult<PooledConnection<SqliteConnectionManager>> {
        self.pool
            .get()
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    /// Get pool statistics for monitoring.
    pub fn state(&self) -> PoolState {
        let state = self.pool.state();
        PoolState {
            connections: state.connections,
            idle_connections: state.idle_connections,
        }
    }

    /// Get the database path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Acquire a connection and run a trivial statement to verify the pool
    /// is usable.
    pub fn health_check(&self) -> StoreResult<()> {
        let conn = self.get()?;
        conn.execute_batch("SELECT 1")?;
        debug!("Database pool health check passed");
        Ok(())
    }
}
