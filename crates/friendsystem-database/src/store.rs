//! Relation store operations that work with any Connection.
//!
//! Each function takes a `&Connection` as its first parameter, so the same
//! operations run inside a coordinator transaction or on a bare pooled
//! connection. No session state is held between calls.
//!
//! Identity parameters are bound as their lowercase hyphenated text form;
//! the canonical pair key computed in Rust therefore matches the stored
//! generated `pair_key` column byte for byte.

use crate::StoreResult;
use friendsystem_core::{canonical_pair_key, PendingRequest, PlayerId};
use rusqlite::{params, Connection};

// ==========================================
// Friendship edges
// ==========================================

/// Check whether a friendship edge exists between the two players.
pub fn edge_exists(conn: &Connection, a: PlayerId, b: PlayerId) -> StoreResult<bool> {
    let mut stmt = conn.prepare_cached("SELECT 1 FROM friend_edges WHERE pair_key = ?1")?;
    Ok(stmt.exists(params![canonical_pair_key(a, b)])?)
}

/// Insert a friendship edge.
///
/// The unique canonical-key index rejects a second edge for the same pair,
/// surfacing as `ConstraintViolation` even if the caller's prior read said
/// none existed.
pub fn insert_edge(conn: &Connection, a: PlayerId, b: PlayerId) -> StoreResult<usize> {
    let mut stmt =
        conn.prepare_cached("INSERT INTO friend_edges (person1, person2) VALUES (?1, ?2)")?;
    Ok(stmt.execute(params![a.to_string(), b.to_string()])?)
}

/// Delete the friendship edge between the two players, if any.
///
/// Returns the number of rows removed (0 or 1); deleting a missing edge is
/// not an error.
pub fn delete_edge(conn: &Connection, a: PlayerId, b: PlayerId) -> StoreResult<usize> {
    let mut stmt = conn.prepare_cached("DELETE FROM friend_edges WHERE pair_key = ?1")?;
    Ok(stmt.execute(params![canonical_pair_key(a, b)])?)
}

/// List all friends of a player.
///
/// The player may appear on either side of an edge; each row is mapped to
/// the other participant.
pub fn list_friends(conn: &Connection, id: PlayerId) -> StoreResult<Vec<PlayerId>> {
    let mut stmt = conn.prepare_cached(
        "SELECT person1, person2 FROM friend_edges WHERE person1 = ?1 OR person2 = ?1",
    )?;

    let me = id.to_string();
    let friends = stmt
        .query_map(params![me], |row| {
            let person1: String = row.get(0)?;
            let person2: String = row.get(1)?;
            if person1 == me {
                parse_player_id(1, person2)
            } else {
                parse_player_id(0, person1)
            }
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(friends)
}

// ==========================================
// Pending requests
// ==========================================

/// Check whether a pending request exists in this exact direction.
pub fn request_exists(
    conn: &Connection,
    requester: PlayerId,
    requested: PlayerId,
) -> StoreResult<bool> {
    let mut stmt = conn
        .prepare_cached("SELECT 1 FROM friend_requests WHERE requester = ?1 AND requested = ?2")?;
    Ok(stmt.exists(params![requester.to_string(), requested.to_string()])?)
}

/// Check whether a pending request exists in either direction between the two players.
pub fn request_exists_between(conn: &Connection, a: PlayerId, b: PlayerId) -> StoreResult<bool> {
    let mut stmt = conn.prepare_cached(
        "SELECT 1 FROM friend_requests
         WHERE min(requester, requested) || '-' || max(requester, requested) = ?1",
    )?;
    Ok(stmt.exists(params![canonical_pair_key(a, b)])?)
}

/// Insert a pending request from `requester` to `requested`.
///
/// The unique canonical-key index rejects a duplicate row for the same
/// direction; the opposite direction remains insertable.
pub fn insert_request(
    conn: &Connection,
    requester: PlayerId,
    requested: PlayerId,
) -> StoreResult<usize> {
    let mut stmt = conn
        .prepare_cached("INSERT INTO friend_requests (requester, requested) VALUES (?1, ?2)")?;
    Ok(stmt.execute(params![requester.to_string(), requested.to_string()])?)
}

/// Delete the pending request in this exact direction, if any (withdraw path).
pub fn delete_request(
    conn: &Connection,
    requester: PlayerId,
    requested: PlayerId,
) -> StoreResult<usize> {
    let mut stmt = conn
        .prepare_cached("DELETE FROM friend_requests WHERE requester = ?1 AND requested = ?2")?;
    Ok(stmt.execute(params![requester.to_string(), requested.to_string()])?)
}

/// Delete any pending request between the two players, in either direction
/// (accept path).
pub fn delete_requests_between(conn: &Connection, a: PlayerId, b: PlayerId) -> StoreResult<usize> {
    let mut stmt = conn.prepare_cached(
        "DELETE FROM friend_requests
         WHERE min(requester, requested) || '-' || max(requester, requested) = ?1",
    )?;
    Ok(stmt.execute(params![canonical_pair_key(a, b)])?)
}

/// List all pending requests where the player appears on either side.
pub fn list_requests(conn: &Connection, id: PlayerId) -> StoreResult<Vec<PendingRequest>> {
    let mut stmt = conn.prepare_cached(
        "SELECT requester, requested FROM friend_requests WHERE requester = ?1 OR requested = ?1",
    )?;

    let requests = stmt
        .query_map(params![id.to_string()], |row| {
            Ok(PendingRequest {
                requester: parse_player_id(0, row.get(0)?)?,
                requested: parse_player_id(1, row.get(1)?)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(requests)
}

fn parse_player_id(column: usize, value: String) -> rusqlite::Result<PlayerId> {
    value.parse().map_err(|e: uuid::Error| {
        rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(e))
    })
}
