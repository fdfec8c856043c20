//! Search Worker Module
//!
//! Resolves queries through the injected filter source on a background
//! thread so the UI loop never blocks. Requests carry a cancellation token;
//! responses carry the request id they belong to.
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::{Arc, mpsc::channel};
//! use typeahead::query::worker::{spawn_worker, SearchRequest, SearchResponse};
//! use tokio_util::sync::CancellationToken;
//!
//! let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
//! let (response_tx, response_rx) = channel();
//!
//! spawn_worker(Arc::new(source), request_rx, response_tx);
//!
//! request_tx.send(SearchRequest {
//!     query: "ap".to_string(),
//!     request_id: 1,
//!     cancel_token: CancellationToken::new(),
//! }).unwrap();
//!
//! match response_rx.recv().unwrap() {
//!     SearchResponse::Success { items, .. } => println!("{} items", items.len()),
//!     SearchResponse::Error { message, .. } => eprintln!("{}", message),
//!     SearchResponse::Cancelled { .. } => {}
//! }
//! ```

pub mod thread;
pub mod types;

pub use thread::spawn_worker;
pub use types::{FilterError, SearchRequest, SearchResponse};
