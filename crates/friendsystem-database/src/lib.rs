//! SQLite storage layer for the friend system.
//!
//! This crate provides:
//! - A thread-safe connection pool with WAL mode
//! - Versioned migrations creating the two relation tables
//! - Relation-shaped store operations over any `Connection`
//!
//! The store exposes no raw query surface: callers work with edges
//! (unordered friendship pairs) and pending requests (directed pairs).
//! Mutating operations run inside whatever transaction the caller
//! supplies, so the same functions serve both the coordinator's
//! transactional paths and the single-statement paths.

mod error;
mod migrations;
mod pool;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use migrations::{run_migrations, CURRENT_VERSION};
pub use pool::{DatabasePool, PoolConfig, PoolState};
