//! Search Worker Thread
//!
//! Runs the injected filter source off the UI thread. A single background
//! thread owns a current-thread tokio runtime; every request becomes its own
//! task, so a slow operation never holds up a newer one and completions may
//! arrive in any order. Ordering is restored on the UI side by request id.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::mpsc::Sender;

use tokio::sync::mpsc::UnboundedReceiver;

use super::types::{FilterError, SearchRequest, SearchResponse};

pub const WORKER_THREAD_NAME: &str = "typeahead-search";
use crate::query::source::FilterItems;

/// Spawn the search worker thread
///
/// The thread exits once every request sender has been dropped. Tasks still
/// running at that point are dropped with the runtime. If the thread cannot
/// be spawned the response channel disconnects, which the UI side reports
/// like any other dead worker.
///
/// # Arguments
/// * `source` - Filter source to resolve queries with
/// * `request_rx` - Channel to receive requests
/// * `response_tx` - Channel to send responses
pub fn spawn_worker(
    source: Arc<dyn FilterItems>,
    request_rx: UnboundedReceiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) {
    let spawned = std::thread::Builder::new()
        .name(WORKER_THREAD_NAME.to_string())
        .spawn(move || {
            let panic_tx = response_tx.clone();

            let result = panic::catch_unwind(AssertUnwindSafe(|| {
                let rt = match tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                {
                    Ok(rt) => rt,
                    Err(e) => {
                        log::error!("Failed to create search runtime: {}", e);
                        let _ = response_tx.send(SearchResponse::Error {
                            message: format!("Search worker failed to start: {}", e),
                            request_id: 0,
                        });
                        return;
                    }
                };

                rt.block_on(worker_loop(source, request_rx, response_tx));
            }));

            if let Err(e) = result {
                let panic_msg = if let Some(s) = e.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = e.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                log::error!("Search worker thread panicked: {}", panic_msg);

                // Use request_id = 0 to indicate worker-level error
                let _ = panic_tx.send(SearchResponse::Error {
                    message: format!("Search worker crashed: {}", panic_msg),
                    request_id: 0,
                });
            }
        });

    if let Err(e) = spawned {
        log::error!("Failed to spawn search worker thread: {}", e);
    }
}

/// Main worker loop - processes requests until channel closes
async fn worker_loop(
    source: Arc<dyn FilterItems>,
    mut request_rx: UnboundedReceiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) {
    log::debug!("Search worker thread started");

    while let Some(request) = request_rx.recv().await {
        log::debug!(
            "Worker received request {}: {:?}",
            request.request_id,
            request.query
        );
        tokio::spawn(handle_request(
            source.clone(),
            request,
            response_tx.clone(),
        ));
    }

    log::debug!("Search worker thread shutting down");
}

/// Handle a single search request
async fn handle_request(
    source: Arc<dyn FilterItems>,
    request: SearchRequest,
    response_tx: Sender<SearchResponse>,
) {
    let response = run_request(source.as_ref(), request).await;
    let _ = response_tx.send(response);
}

/// Resolve one request into the response the UI thread will see
pub(crate) async fn run_request(source: &dyn FilterItems, request: SearchRequest) -> SearchResponse {
    let SearchRequest {
        query,
        request_id,
        cancel_token,
    } = request;

    if cancel_token.is_cancelled() {
        return SearchResponse::Cancelled { request_id };
    }

    let operation = source.filter_items(&query, cancel_token.clone());

    let outcome = tokio::select! {
        biased;
        _ = cancel_token.cancelled() => Err(FilterError::Cancelled),
        result = operation => result,
    };

    match outcome {
        Ok(items) => {
            log::debug!("Request {} resolved with {} items", request_id, items.len());
            SearchResponse::Success { items, request_id }
        }
        Err(_) if cancel_token.is_cancelled() => {
            log::debug!("Request {} was cancelled", request_id);
            SearchResponse::Cancelled { request_id }
        }
        Err(FilterError::Cancelled) => {
            log::debug!("Request {} reported cancellation", request_id);
            SearchResponse::Cancelled { request_id }
        }
        Err(e) => {
            log::debug!("Request {} failed: {}", request_id, e);
            SearchResponse::Error {
                message: e.user_message(),
                request_id,
            }
        }
    }
}

#[cfg(test)]
#[path = "thread_tests.rs"]
mod thread_tests;
