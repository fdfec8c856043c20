use std::sync::Arc;
use std::sync::mpsc::{Receiver, TryRecvError, channel};

use tokio::sync::mpsc::{UnboundedSender, unbounded_channel};
use tokio_util::sync::CancellationToken;

use crate::item::Item;
use crate::query::source::FilterItems;
use crate::query::worker::{SearchRequest, SearchResponse, spawn_worker};

pub const DISCONNECTED_MESSAGE: &str = "Search worker disconnected";

/// Search lifecycle state
///
/// Owns at most one current operation. Starting a search cancels the
/// previous one, and only a response carrying the current request id may
/// touch `filtered_items`, `error` or `is_loading`. Results of superseded
/// operations are dropped even when they arrive after newer ones.
pub struct QueryState {
    filtered_items: Vec<Item>,
    is_loading: bool,
    error: Option<String>,
    min_chars: usize,
    /// Bumped every time `filtered_items` is replaced
    items_generation: u64,

    /// Channel to send search requests to worker
    request_tx: Option<UnboundedSender<SearchRequest>>,
    /// Channel to receive search responses from worker
    response_rx: Option<Receiver<SearchResponse>>,
    /// Current request ID counter (starts at 1, 0 reserved for worker errors)
    next_request_id: u64,
    /// ID of currently in-flight request, if any
    in_flight_request_id: Option<u64>,
    /// Cancellation token for current request
    current_cancel_token: Option<CancellationToken>,
    torn_down: bool,
}

impl QueryState {
    /// Create a QueryState resolving queries through `source`
    ///
    /// Spawns a background worker thread for async search execution.
    pub fn new(source: Arc<dyn FilterItems>, min_chars: usize, default_items: Vec<Item>) -> Self {
        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = channel();

        spawn_worker(source, request_rx, response_tx);

        Self::with_channels(request_tx, response_rx, min_chars, default_items)
    }

    /// Create a QueryState over caller-owned worker channels
    pub fn with_channels(
        request_tx: UnboundedSender<SearchRequest>,
        response_rx: Receiver<SearchResponse>,
        min_chars: usize,
        default_items: Vec<Item>,
    ) -> Self {
        Self {
            filtered_items: default_items,
            is_loading: false,
            error: None,
            min_chars,
            items_generation: 0,
            request_tx: Some(request_tx),
            response_rx: Some(response_rx),
            next_request_id: 1, // Reserve 0 for worker errors
            in_flight_request_id: None,
            current_cancel_token: None,
            torn_down: false,
        }
    }

    /// Start a search for `query`
    ///
    /// Queries shorter than `min_chars` only clear the error; the source is
    /// not invoked and current results stay as they are. Returns whether a
    /// request was issued.
    pub fn search(&mut self, query: &str) -> bool {
        if self.torn_down {
            return false;
        }

        self.error = None;

        if query.chars().count() < self.min_chars {
            log::debug!("Skipping search for {:?}: below min chars", query);
            return false;
        }

        self.is_loading = true;

        // Supersede any existing request
        self.cancel_in_flight();

        let request_id = self.next_request_id;
        self.next_request_id = self.next_request_id.wrapping_add(1);

        // Skip 0 on wrap (reserved for worker errors)
        if self.next_request_id == 0 {
            self.next_request_id = 1;
        }

        let cancel_token = CancellationToken::new();
        self.current_cancel_token = Some(cancel_token.clone());
        self.in_flight_request_id = Some(request_id);

        log::debug!("Sending search request {} for query: {:?}", request_id, query);

        let Some(tx) = &self.request_tx else {
            log::error!("No request channel available");
            self.fail_current(DISCONNECTED_MESSAGE.to_string());
            return false;
        };

        let request = SearchRequest {
            query: query.to_string(),
            request_id,
            cancel_token,
        };

        if tx.send(request).is_err() {
            log::error!("Search worker disconnected - send failed");
            self.request_tx = None;
            self.response_rx = None;
            self.fail_current(DISCONNECTED_MESSAGE.to_string());
            return false;
        }

        true
    }

    fn cancel_in_flight(&mut self) {
        if let Some(token) = self.current_cancel_token.take() {
            token.cancel();
            log::debug!("Cancelled request {:?}", self.in_flight_request_id);
        }
        self.in_flight_request_id = None;
    }

    /// Poll for search responses (non-blocking)
    ///
    /// Call this in the event loop. Returns whether visible state changed.
    pub fn poll_response(&mut self) -> bool {
        let mut changed = false;

        // Take the receiver temporarily to avoid borrow checker issues
        let Some(rx) = self.response_rx.take() else {
            return false;
        };

        loop {
            match rx.try_recv() {
                Ok(response) => {
                    changed |= self.process_response(response);
                }
                Err(TryRecvError::Empty) => {
                    self.response_rx = Some(rx);
                    break;
                }
                Err(TryRecvError::Disconnected) => {
                    log::error!("Search worker disconnected in poll_response");
                    self.request_tx = None;
                    if self.in_flight_request_id.is_some() {
                        self.fail_current(DISCONNECTED_MESSAGE.to_string());
                        changed = true;
                    }
                    // Don't put receiver back - it's disconnected
                    break;
                }
            }
        }

        changed
    }

    /// Apply a single response
    ///
    /// Returns false if the response was stale (no state change).
    fn process_response(&mut self, response: SearchResponse) -> bool {
        let request_id = response.request_id();

        // Worker-level errors (request_id == 0) always apply
        if request_id != 0 && Some(request_id) != self.in_flight_request_id {
            log::debug!(
                "Ignoring stale response from request {} (current: {:?})",
                request_id,
                self.in_flight_request_id
            );
            return false;
        }

        match response {
            SearchResponse::Success { items, .. } => {
                log::debug!("Request {} won with {} items", request_id, items.len());
                self.in_flight_request_id = None;
                self.current_cancel_token = None;
                self.replace_items(items);
                self.is_loading = false;
            }
            SearchResponse::Error { message, .. } => self.fail_current(message),
            SearchResponse::Cancelled { .. } => {
                self.in_flight_request_id = None;
                self.current_cancel_token = None;
                self.is_loading = false;
            }
        }
        true
    }

    fn fail_current(&mut self, message: String) {
        log::debug!("Search failed: {}", message);
        self.in_flight_request_id = None;
        self.current_cancel_token = None;
        self.error = Some(message);
        self.replace_items(Vec::new());
        self.is_loading = false;
    }

    /// Show `items` until the next search resolves
    pub fn set_default_items(&mut self, items: Vec<Item>) {
        if self.torn_down {
            return;
        }
        self.replace_items(items);
    }

    fn replace_items(&mut self, items: Vec<Item>) {
        self.filtered_items = items;
        self.items_generation = self.items_generation.wrapping_add(1);
    }

    /// Cancel whatever is in flight and stop accepting work
    ///
    /// No state changes after this, including late responses.
    pub fn shutdown(&mut self) {
        if self.torn_down {
            return;
        }
        self.cancel_in_flight();
        self.torn_down = true;
        self.request_tx = None;
        self.response_rx = None;
        log::debug!("Search state shut down");
    }

    pub fn is_shut_down(&self) -> bool {
        self.torn_down
    }

    pub fn in_flight_request_id(&self) -> Option<u64> {
        self.in_flight_request_id
    }

    pub fn filtered_items(&self) -> &[Item] {
        &self.filtered_items
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn min_chars(&self) -> usize {
        self.min_chars
    }

    pub fn items_generation(&self) -> u64 {
        self.items_generation
    }
}

impl Drop for QueryState {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
#[path = "query_state_tests.rs"]
mod query_state_tests;
