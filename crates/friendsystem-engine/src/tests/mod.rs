//! Integration tests for the friend engine.
//!
//! Test organization:
//!
//! - `state_machine.rs` - send/accept transitions and outcome tags
//! - `idempotency.rs`   - remove/withdraw no-op semantics, round trips
//! - `listing.rs`       - friend-list and request-list mapping
//! - `concurrency.rs`   - racing operations over one shared pool
//! - `failures.rs`      - broken storage maps to Failed / empty listings

mod state_machine;

use friendsystem_core::PlayerId;
use friendsystem_database::{DatabasePool, PoolConfig};
use tempfile::TempDir;

use crate::{FriendEngine, RequestResult};

/// Opens an engine over a fresh file-backed database.
///
/// The `TempDir` must be kept alive for the lifetime of the engine.
pub(crate) fn test_engine() -> (FriendEngine, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let pool = DatabasePool::open(&dir.path().join("friends.db"), PoolConfig::default()).unwrap();
    (FriendEngine::new(pool), dir)
}

/// Basic workflow test demonstrating core functionality.
#[test]
fn basic_workflow() {
    let (engine, _dir) = test_engine();
    let alice = PlayerId::new();
    let bob = PlayerId::new();

    // Send a request
    assert_eq!(engine.send_request(alice, bob), RequestResult::SentRequest);
    assert_eq!(engine.list_requests(bob).len(), 1);
    assert!(engine.list_friends(alice).is_empty());

    // Accept it (direction-agnostic)
    assert_eq!(
        engine.accept_request(bob, alice),
        RequestResult::AcceptedOutstandingRequest
    );
    assert_eq!(engine.list_friends(alice), vec![bob]);
    assert_eq!(engine.list_friends(bob), vec![alice]);
    assert!(engine.list_requests(alice).is_empty());

    // Remove the friendship
    engine.remove_friend(alice, bob);
    assert!(engine.list_friends(alice).is_empty());
    assert!(engine.list_friends(bob).is_empty());
}
