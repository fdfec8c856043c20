//! Tests for search worker types

use super::*;
use crate::item::ItemId;

#[test]
fn test_failed_message_is_surfaced_verbatim() {
    let err = FilterError::failed("API request failed");
    assert_eq!(err.user_message(), "API request failed");
}

#[test]
fn test_empty_failure_falls_back_to_generic_message() {
    assert_eq!(FilterError::failed("").user_message(), GENERIC_FAILURE_MESSAGE);
    assert_eq!(FilterError::failed("   ").user_message(), GENERIC_FAILURE_MESSAGE);
}

#[test]
fn test_cancelled_display() {
    assert_eq!(FilterError::Cancelled.to_string(), "Search cancelled");
}

#[test]
fn test_response_request_id() {
    let success = SearchResponse::Success {
        items: vec![Item::new(ItemId::Int(1), "Apple", "apple")],
        request_id: 3,
    };
    let error = SearchResponse::Error {
        message: "boom".to_string(),
        request_id: 4,
    };
    let cancelled = SearchResponse::Cancelled { request_id: 5 };

    assert_eq!(success.request_id(), 3);
    assert_eq!(error.request_id(), 4);
    assert_eq!(cancelled.request_id(), 5);
}

#[test]
fn test_request_carries_live_token() {
    let token = CancellationToken::new();
    let request = SearchRequest {
        query: "ap".to_string(),
        request_id: 1,
        cancel_token: token.clone(),
    };

    token.cancel();

    assert!(request.cancel_token.is_cancelled());
}
