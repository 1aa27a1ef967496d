//! Shared identity and relation types for the friend system.

mod types;

pub use types::{canonical_pair_key, PendingRequest, PlayerId};
