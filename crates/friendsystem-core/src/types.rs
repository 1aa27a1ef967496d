//! Core types for the friend system.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (128-bit UUID).
///
/// Stored in SQL as the lowercase hyphenated text form. That form compares
/// bytewise exactly like the underlying 128-bit value, so SQL `MIN`/`MAX`
/// over the text columns and `Ord` on this type agree on which side of a
/// pair is "smaller".
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub Uuid);

impl PlayerId {
    /// Creates a new random player ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a player ID from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PlayerId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl From<Uuid> for PlayerId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// A directed, unconfirmed friend request from one player to another.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct PendingRequest {
    pub requester: PlayerId,
    pub requested: PlayerId,
}

/// Order-independent key for an unordered pair of players.
///
/// Matches the stored generated column on the edge table
/// (`min(person1, person2) || '-' || max(person1, person2)`), so it can be
/// bound directly against `pair_key` in lookups and deletes.
pub fn canonical_pair_key(a: PlayerId, b: PlayerId) -> String {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    format!("{lo}-{hi}")
}
