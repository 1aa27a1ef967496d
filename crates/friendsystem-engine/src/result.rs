//! Operation outcomes returned to callers.

/// Outcome of a friend-request operation.
///
/// A closed enumeration: call sites branch exhaustively and cannot silently
/// ignore an unrecognized outcome. Carries no payload beyond its tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestResult {
    /// The two players are already friends; nothing changed.
    AlreadyFriends,
    /// The same directed request is already pending; nothing changed.
    AlreadySent,
    /// A new pending request was created.
    SentRequest,
    /// A request in the opposite direction was pending; it was collapsed
    /// into a friendship instead of a second pending row.
    AcceptedOutstandingRequest,
    /// No pending request exists in either direction; nothing changed.
    NoOutstandingRequest,
    /// The operation was rolled back: invalid input, storage unavailable,
    /// or a consistency anomaly between read and write.
    Failed,
}
