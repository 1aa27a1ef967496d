//! Database migrations.
//!
//! This module contains all SQL migrations for the database schema.
//! Migrations are run in order and tracked in the `migrations` table.

use crate::StoreResult;
use rusqlite::Connection;
use tracing::{debug, info};

/// Current schema version.
pub const CURRENT_VERSION: i32 = 1;

/// Run all pending migrations.
pub fn run_migrations(conn: &Connection) -> StoreResult<()> {
    // Create migrations tracking table
    conn.execute(
        "CREATE TABLE IF NOT EXISTS migrations (
            version INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        )",
        [],
    )?;

    let current_version: i32 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM migrations",
            [],
            |row| row.get(0),
        )
        .unwrap_or(0);

    info!(current_version, target_version = CURRENT_VERSION, "Running migrations");

    if current_version < 1 {
        migrate_v1_relations(conn)?;
    }

    info!("Migrations complete");
    Ok(())
}

fn record_migration(conn: &Connection, version: i32, name: &str) -> StoreResult<()> {
    conn.execute(
        "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
        rusqlite::params![version, name],
    )?;
    debug!(version, name, "Migration applied");
    Ok(())
}

/// V1: The two relation tables - friendship edges and pending requests.
///
/// Each table carries a stored generated canonical-key column with a unique
/// index over it. The edge key is order-independent (`min || '-' || max`), so
/// at most one row can ever represent a pair. The request key is
/// direction-sensitive (`requester || '-' || requested`): one row per
/// direction may coexist until the coordinator collapses them, but the same
/// directed request can never be inserted twice. The unique indexes hold
/// regardless of what the coordinator read before writing, so a racing insert
/// surfaces as a constraint violation instead of a duplicate row.
fn migrate_v1_relations(conn: &Connection) -> StoreResult<()> {
    info!("Applying migration v1: relation tables");

    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS friend_edges (
            person1 TEXT NOT NULL,
            person2 TEXT NOT NULL,
            pair_key TEXT GENERATED ALWAYS AS (
                min(person1, person2) || '-' || max(person1, person2)
            ) STORED
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_friend_edges_pair_key
            ON friend_edges(pair_key);
        CREATE INDEX IF NOT EXISTS idx_friend_edges_person1
            ON friend_edges(person1);
        CREATE INDEX IF NOT EXISTS idx_friend_edges_person2
            ON friend_edges(person2);
        ",
    )?;

    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS friend_requests (
            requester TEXT NOT NULL,
            requested TEXT NOT NULL,
            pair_key TEXT GENERATED ALWAYS AS (
                requester || '-' || requested
            ) STORED
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_friend_requests_pair_key
            ON friend_requests(pair_key);
        CREATE INDEX IF NOT EXISTS idx_friend_requests_requester
            ON friend_requests(requester);
        CREATE INDEX IF NOT EXISTS idx_friend_requests_requested
            ON friend_requests(requested);
        ",
    )?;

    record_migration(conn, 1, "relations")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    #[test]
    fn migrations_record_current_version() {
        let conn = test_conn();
        let version: i32 = conn
            .query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(version, CURRENT_VERSION);
    }

    #[test]
    fn migrations_are_idempotent() {
        let conn = test_conn();
        run_migrations(&conn).unwrap();
        run_migrations(&conn).unwrap();

        let count: i32 = conn
            .query_row("SELECT COUNT(*) FROM migrations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, CURRENT_VERSION);
    }

    #[test]
    fn edge_pair_key_is_unique_regardless_of_order() {
        let conn = test_conn();
        conn.execute(
            "INSERT INTO friend_edges (person1, person2) VALUES ('a', 'b')",
            [],
        )
        .unwrap();

        let reversed = conn.execute(
            "INSERT INTO friend_edges (person1, person2) VALUES ('b', 'a')",
            [],
        );
        assert!(reversed.is_err());
    }

    #[test]
    fn request_pair_key_permits_one_row_per_direction() {
        let conn = test_conn();
        conn.execute(
            "INSERT INTO friend_requests (requester, requested) VALUES ('a', 'b')",
            [],
        )
        .unwrap();

        // Opposite direction is a distinct key
        conn.execute(
            "INSERT INTO friend_requests (requester, requested) VALUES ('b', 'a')",
            [],
        )
        .unwrap();

        // Same direction is not
        let duplicate = conn.execute(
            "INSERT INTO friend_requests (requester, requested) VALUES ('a', 'b')",
            [],
        );
        assert!(duplicate.is_err());
    }
}
