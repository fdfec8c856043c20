//! Search Worker Types
//!
//! Type definitions for the search worker thread communication.
//! These types enable request/response pattern with cancellation support.

use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::item::Item;

/// Message shown when a source fails without describing why
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred";

/// Request to run the filter source for one query
#[derive(Debug)]
pub struct SearchRequest {
    /// Raw query text exactly as typed
    pub query: String,
    /// Unique ID for tracking this request
    pub request_id: u64,
    /// Token for cancelling this request
    pub cancel_token: CancellationToken,
}

/// Response from a search operation
#[derive(Debug)]
pub enum SearchResponse {
    /// Source resolved with a result set
    Success {
        items: Vec<Item>,
        request_id: u64,
    },
    /// Source rejected
    Error {
        message: String,
        /// Note: request_id = 0 indicates a worker-level error (applies immediately)
        request_id: u64,
    },
    /// Operation was cancelled before or while running
    Cancelled { request_id: u64 },
}

impl SearchResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            SearchResponse::Success { request_id, .. }
            | SearchResponse::Error { request_id, .. }
            | SearchResponse::Cancelled { request_id } => *request_id,
        }
    }
}

/// Failure reported by a filter source
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// The source observed its cancellation signal and gave up
    #[error("Search cancelled")]
    Cancelled,
    /// The source failed; the message is shown to the user
    #[error("{0}")]
    Failed(String),
}

impl FilterError {
    pub fn failed(message: impl Into<String>) -> Self {
        FilterError::Failed(message.into())
    }

    /// Text to surface for this failure, never empty
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_FAILURE_MESSAGE.to_string()
        } else {
            message
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
