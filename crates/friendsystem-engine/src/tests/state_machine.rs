//! Send/accept state transitions and their outcome tags.

use friendsystem_core::PlayerId;

use super::test_engine;
use crate::RequestResult;

#[test]
fn full_send_scenario() {
    let (engine, _dir) = test_engine();
    let a = PlayerId::new();
    let b = PlayerId::new();

    assert_eq!(engine.send_request(a, b), RequestResult::SentRequest);
    assert_eq!(engine.send_request(a, b), RequestResult::AlreadySent);
    assert_eq!(
        engine.send_request(b, a),
        RequestResult::AcceptedOutstandingRequest
    );
    assert_eq!(engine.send_request(a, b), RequestResult::AlreadyFriends);
}

#[test]
fn opposite_requests_collapse_into_one_edge() {
    let (engine, _dir) = test_engine();
    let a = PlayerId::new();
    let b = PlayerId::new();

    assert_eq!(engine.send_request(a, b), RequestResult::SentRequest);
    assert_eq!(
        engine.send_request(b, a),
        RequestResult::AcceptedOutstandingRequest
    );

    assert_eq!(engine.list_friends(a), vec![b]);
    assert_eq!(engine.list_friends(b), vec![a]);
    assert!(engine.list_requests(a).is_empty());
    assert!(engine.list_requests(b).is_empty());
}

#[test]
fn repeated_send_leaves_one_pending_row() {
    let (engine, _dir) = test_engine();
    let a = PlayerId::new();
    let b = PlayerId::new();

    assert_eq!(engine.send_request(a, b), RequestResult::SentRequest);
    assert_eq!(engine.send_request(a, b), RequestResult::AlreadySent);
    assert_eq!(engine.list_requests(a).len(), 1);
    assert_eq!(engine.list_requests(b).len(), 1);
}

#[test]
fn accept_is_direction_agnostic() {
    let (engine, _dir) = test_engine();
    let a = PlayerId::new();
    let b = PlayerId::new();

    engine.send_request(a, b);
    // The requested party accepts by naming the pair in either order
    assert_eq!(
        engine.accept_request(a, b),
        RequestResult::AcceptedOutstandingRequest
    );
    assert_eq!(engine.list_friends(b), vec![a]);
}

#[test]
fn accept_without_request_is_no_outstanding_request() {
    let (engine, _dir) = test_engine();
    let a = PlayerId::new();
    let b = PlayerId::new();

    assert_eq!(
        engine.accept_request(a, b),
        RequestResult::NoOutstandingRequest
    );
    assert!(engine.list_friends(a).is_empty());
    assert!(engine.list_requests(a).is_empty());
}

#[test]
fn accept_after_friendship_is_no_outstanding_request() {
    let (engine, _dir) = test_engine();
    let a = PlayerId::new();
    let b = PlayerId::new();

    engine.send_request(a, b);
    engine.accept_request(a, b);
    // The pending row is gone; a second accept has nothing to do
    assert_eq!(
        engine.accept_request(b, a),
        RequestResult::NoOutstandingRequest
    );
    assert_eq!(engine.list_friends(a), vec![b]);
}

#[test]
fn self_request_is_rejected() {
    let (engine, _dir) = test_engine();
    let a = PlayerId::new();

    assert_eq!(engine.send_request(a, a), RequestResult::Failed);
    assert!(engine.list_requests(a).is_empty());
    assert!(engine.list_friends(a).is_empty());
}
