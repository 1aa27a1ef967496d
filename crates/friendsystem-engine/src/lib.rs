//! # Friend engine
//!
//! The transactional coordinator for the friend system: the only component
//! that orchestrates multi-step reads and writes against the relationship
//! store.
//!
//! ## Non-negotiable principles
//!
//! - **One transaction per operation** - each call acquires one pooled
//!   connection, opens one immediate-mode transaction, reads, decides,
//!   writes, commits. A concurrent observer never sees a half-applied
//!   transition.
//! - **Opposite requests always collapse** - two pending requests for the
//!   same pair never coexist; the second send commits as an acceptance of
//!   the first.
//! - **Callers receive values, never errors** - every storage failure is
//!   rolled back, logged, and mapped to [`RequestResult::Failed`] (or an
//!   empty result for listings).
//!
//! ## Example
//!
//! ```ignore
//! let pool = DatabasePool::open(&path, PoolConfig::default())?;
//! let engine = FriendEngine::new(pool);
//!
//! let alice = PlayerId::new();
//! let bob = PlayerId::new();
//!
//! assert_eq!(engine.send_request(alice, bob), RequestResult::SentRequest);
//! assert_eq!(
//!     engine.send_request(bob, alice),
//!     RequestResult::AcceptedOutstandingRequest
//! );
//! assert_eq!(engine.list_friends(alice), vec![bob]);
//! ```

mod engine;
mod result;

#[cfg(test)]
mod tests;

pub use engine::FriendEngine;
pub use result::RequestResult;
