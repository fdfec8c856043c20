//! Tests for the search worker thread

use std::sync::mpsc::channel;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use super::*;
use crate::item::Item;
use crate::query::source::{StaticItems, from_async_fn, from_fn};
use crate::test_utils::test_helpers::fruit_items;

const RECV_TIMEOUT: Duration = Duration::from_secs(5);

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

fn request(query: &str, request_id: u64) -> (SearchRequest, CancellationToken) {
    let token = CancellationToken::new();
    (
        SearchRequest {
            query: query.to_string(),
            request_id,
            cancel_token: token.clone(),
        },
        token,
    )
}

#[test]
fn test_run_request_success() {
    let source = StaticItems::new(fruit_items());
    let (req, _token) = request("cherry", 1);

    let response = runtime().block_on(run_request(&source, req));

    match response {
        SearchResponse::Success { items, request_id } => {
            assert_eq!(request_id, 1);
            assert_eq!(items[0].label, "Cherry");
        }
        other => panic!("expected success, got {:?}", other),
    }
}

#[test]
fn test_run_request_already_cancelled_skips_source() {
    let source = from_fn(|_query, _cancel| panic!("source must not run"));
    let (req, token) = request("ap", 7);
    token.cancel();

    let response = runtime().block_on(run_request(&source, req));

    assert!(matches!(response, SearchResponse::Cancelled { request_id: 7 }));
}

#[test]
fn test_run_request_failure_carries_message() {
    let source = from_fn(|_query, _cancel| Err(FilterError::failed("API request failed")));
    let (req, _token) = request("test", 2);

    let response = runtime().block_on(run_request(&source, req));

    match response {
        SearchResponse::Error {
            message,
            request_id,
        } => {
            assert_eq!(message, "API request failed");
            assert_eq!(request_id, 2);
        }
        other => panic!("expected error, got {:?}", other),
    }
}

#[test]
fn test_run_request_source_reported_cancellation_is_silent() {
    let source = from_fn(|_query, _cancel| Err(FilterError::Cancelled));
    let (req, _token) = request("ap", 3);

    let response = runtime().block_on(run_request(&source, req));

    assert!(matches!(response, SearchResponse::Cancelled { request_id: 3 }));
}

#[test]
fn test_run_request_cancel_while_pending() {
    let source = from_async_fn(|_query: String, _cancel| async move {
        // Ignores its signal entirely
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(Vec::<Item>::new())
    });
    let (req, token) = request("ap", 4);

    let rt = runtime();
    let response = rt.block_on(async {
        let handle = tokio::spawn(async move { run_request(&source, req).await });
        tokio::task::yield_now().await;
        token.cancel();
        handle.await.unwrap()
    });

    assert!(matches!(response, SearchResponse::Cancelled { request_id: 4 }));
}

#[test]
fn test_worker_round_trip() {
    let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
    let (response_tx, response_rx) = channel();
    spawn_worker(
        Arc::new(StaticItems::new(fruit_items())),
        request_rx,
        response_tx,
    );

    let (req, _token) = request("banana", 1);
    request_tx.send(req).unwrap();

    let response = response_rx.recv_timeout(RECV_TIMEOUT).unwrap();
    match response {
        SearchResponse::Success { items, request_id } => {
            assert_eq!(request_id, 1);
            assert_eq!(items[0].label, "Banana");
        }
        other => panic!("expected success, got {:?}", other),
    }
}

#[test]
fn test_worker_runs_requests_concurrently() {
    let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
    let (response_tx, response_rx) = channel();
    let source = from_async_fn(|query: String, _cancel| async move {
        let delay = if query == "slow" { 300 } else { 0 };
        tokio::time::sleep(Duration::from_millis(delay)).await;
        Ok(vec![Item::new(query.clone(), query, "")])
    });
    spawn_worker(Arc::new(source), request_rx, response_tx);

    let (slow, _slow_token) = request("slow", 1);
    let (fast, _fast_token) = request("fast", 2);
    request_tx.send(slow).unwrap();
    request_tx.send(fast).unwrap();

    let first = response_rx.recv_timeout(RECV_TIMEOUT).unwrap();
    let second = response_rx.recv_timeout(RECV_TIMEOUT).unwrap();

    assert_eq!(first.request_id(), 2);
    assert_eq!(second.request_id(), 1);
}

#[test]
fn test_worker_exits_when_senders_dropped() {
    let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel::<SearchRequest>();
    let (response_tx, response_rx) = channel();
    spawn_worker(
        Arc::new(StaticItems::new(fruit_items())),
        request_rx,
        response_tx,
    );

    drop(request_tx);

    // Every sender clone lives in the worker, so the channel disconnects
    assert!(matches!(
        response_rx.recv_timeout(RECV_TIMEOUT),
        Err(std::sync::mpsc::RecvTimeoutError::Disconnected)
    ));
}

#[test]
fn test_requests_run_on_named_worker_thread() {
    let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
    let (response_tx, response_rx) = channel();
    let source = from_fn(|_query, _cancel| {
        let name = std::thread::current().name().unwrap_or_default().to_string();
        Ok(vec![Item::new(crate::item::ItemId::Int(1), name, "")])
    });
    spawn_worker(Arc::new(source), request_rx, response_tx);

    let (req, _token) = request("ap", 1);
    request_tx.send(req).unwrap();

    match response_rx.recv_timeout(RECV_TIMEOUT).unwrap() {
        SearchResponse::Success { items, .. } => assert_eq!(items[0].label, WORKER_THREAD_NAME),
        other => panic!("expected Success, got {:?}", other),
    }
}
