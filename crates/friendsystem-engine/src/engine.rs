//! The friend engine - the transactional request coordinator.
//!
//! Every mutating operation follows the same discipline:
//!
//! 1. Acquire one pooled connection
//! 2. `BEGIN IMMEDIATE` - take the SQLite writer lock before the first read,
//!    so two racing operations on any pair are fully serialized
//! 3. Read the current relation state for the pair
//! 4. Decide the transition and write the resulting rows
//! 5. Commit; any early return or error drops the transaction, which rolls
//!    it back
//!
//! The canonical-key unique indexes back this up: even against a second
//! coordinator instance on the same database file, a racing insert surfaces
//! as a constraint violation rather than a duplicate row.

use friendsystem_core::{PendingRequest, PlayerId};
use friendsystem_database::{store, DatabasePool, StoreError, StoreResult};
use rusqlite::TransactionBehavior;
use tracing::{error, info, warn};

use crate::RequestResult;

/// The transactional state machine over friendship edges and pending
/// requests.
///
/// Holds an injected [`DatabasePool`]; no global or lazily-initialized
/// state. The engine is `Send + Sync` and is called from arbitrarily many
/// threads at once - coordination correctness is delegated entirely to the
/// database's transaction semantics.
pub struct FriendEngine {
    pool: DatabasePool,
}

impl FriendEngine {
    /// Creates an engine over an already-opened pool.
    ///
    /// The pool has run the schema migrations; the engine itself never
    /// touches schema.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    // ==========================================
    // Public surface
    // ==========================================

    /// Send a friend request from `requester` to `requested`.
    ///
    /// State machine per unordered pair:
    /// - already friends        -> [`RequestResult::AlreadyFriends`]
    /// - same direction pending -> [`RequestResult::AlreadySent`]
    /// - opposite pending       -> collapse into an edge,
    ///   [`RequestResult::AcceptedOutstandingRequest`]
    /// - nothing                -> insert pending row, [`RequestResult::SentRequest`]
    pub fn send_request(&self, requester: PlayerId, requested: PlayerId) -> RequestResult {
        if requester == requested {
            warn!(player = %requester, "Rejected self-targeted friend request");
            return RequestResult::Failed;
        }

        match self.try_send_request(requester, requested) {
            Ok(result) => result,
            Err(e) => {
                error!(
                    requester = %requester,
                    requested = %requested,
                    error = %e,
                    "Failed to send friend request"
                );
                RequestResult::Failed
            }
        }
    }

    /// Accept the pending request between `a` and `b`, whichever direction
    /// it is in.
    ///
    /// Returns [`RequestResult::NoOutstandingRequest`] when there is nothing
    /// to accept.
    pub fn accept_request(&self, a: PlayerId, b: PlayerId) -> RequestResult {
        match self.try_accept_request(a, b) {
            Ok(result) => result,
            Err(e) => {
                error!(a = %a, b = %b, error = %e, "Failed to accept friend request");
                RequestResult::Failed
            }
        }
    }

    /// Remove the friendship between `a` and `b`.
    ///
    /// Idempotent: removing a friendship that does not exist is a no-op.
    pub fn remove_friend(&self, a: PlayerId, b: PlayerId) {
        match self.try_remove_friend(a, b) {
            Ok(removed) => {
                if removed > 0 {
                    info!(a = %a, b = %b, "Friendship removed");
                }
            }
            Err(e) => {
                error!(a = %a, b = %b, error = %e, "Failed to remove friend");
            }
        }
    }

    /// Withdraw the pending request from `requester` to `requested`.
    ///
    /// Direction-sensitive and idempotent: only the exact directed row is
    /// removed, and withdrawing a missing request is a no-op.
    pub fn withdraw_request(&self, requester: PlayerId, requested: PlayerId) {
        match self.try_withdraw_request(requester, requested) {
            Ok(removed) => {
                if removed > 0 {
                    info!(
                        requester = %requester,
                        requested = %requested,
                        "Friend request withdrawn"
                    );
                }
            }
            Err(e) => {
                error!(
                    requester = %requester,
                    requested = %requested,
                    error = %e,
                    "Failed to withdraw friend request"
                );
            }
        }
    }

    /// List all friends of a player. Order is unspecified.
    ///
    /// On storage failure this logs and returns an empty list.
    pub fn list_friends(&self, id: PlayerId) -> Vec<PlayerId> {
        match self.try_list_friends(id) {
            Ok(friends) => friends,
            Err(e) => {
                error!(player = %id, error = %e, "Failed to list friends");
                Vec::new()
            }
        }
    }

    /// List all pending requests where the player appears on either side.
    ///
    /// On storage failure this logs and returns an empty list.
    pub fn list_requests(&self, id: PlayerId) -> Vec<PendingRequest> {
        match self.try_list_requests(id) {
            Ok(requests) => requests,
            Err(e) => {
                error!(player = %id, error = %e, "Failed to list friend requests");
                Vec::new()
            }
        }
    }

    // ==========================================
    // Transactional internals
    // ==========================================

    fn try_send_request(
        &self,
        requester: PlayerId,
        requested: PlayerId,
    ) -> StoreResult<RequestResult> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        if store::edge_exists(&tx, requester, requested)? {
            return Ok(RequestResult::AlreadyFriends);
        }

        if store::request_exists(&tx, requester, requested)? {
            return Ok(RequestResult::AlreadySent);
        }

        if store::request_exists(&tx, requested, requester)? {
            // Symmetric auto-accept: collapse the opposite pending request
            // into a friendship instead of keeping two pending rows.
            let removed = store::delete_requests_between(&tx, requester, requested)?;
            if removed == 0 {
                return Err(StoreError::ConsistencyViolation(format!(
                    "pending request between {requester} and {requested} vanished mid-transaction"
                )));
            }
            store::insert_edge(&tx, requester, requested)?;
            tx.commit()?;
            info!(
                requester = %requester,
                requested = %requested,
                "Opposite request pending, accepted as friendship"
            );
            return Ok(RequestResult::AcceptedOutstandingRequest);
        }

        store::insert_request(&tx, requester, requested)?;
        tx.commit()?;
        info!(requester = %requester, requested = %requested, "Friend request sent");
        Ok(RequestResult::SentRequest)
    }

    fn try_accept_request(&self, a: PlayerId, b: PlayerId) -> StoreResult<RequestResult> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        if !store::request_exists_between(&tx, a, b)? {
            return Ok(RequestResult::NoOutstandingRequest);
        }

        let removed = store::delete_requests_between(&tx, a, b)?;
        if removed == 0 {
            return Err(StoreError::ConsistencyViolation(format!(
                "pending request between {a} and {b} vanished mid-transaction"
            )));
        }
        store::insert_edge(&tx, a, b)?;
        tx.commit()?;
        info!(a = %a, b = %b, "Friend request accepted");
        Ok(RequestResult::AcceptedOutstandingRequest)
    }

    fn try_remove_friend(&self, a: PlayerId, b: PlayerId) -> StoreResult<usize> {
        let conn = self.pool.get()?;
        store::delete_edge(&conn, a, b)
    }

    fn try_withdraw_request(&self, requester: PlayerId, requested: PlayerId) -> StoreResult<usize> {
        let conn = self.pool.get()?;
        store::delete_request(&conn, requester, requested)
    }

    fn try_list_friends(&self, id: PlayerId) -> StoreResult<Vec<PlayerId>> {
        let conn = self.pool.get()?;
        store::list_friends(&conn, id)
    }

    fn try_list_requests(&self, id: PlayerId) -> StoreResult<Vec<PendingRequest>> {
        let conn = self.pool.get()?;
        store::list_requests(&conn, id)
    }
}
