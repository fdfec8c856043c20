pub mod debouncer;
pub mod query_state;
pub mod source;
pub mod worker;

// Re-export public types
pub use debouncer::Debouncer;
pub use query_state::QueryState;
pub use source::{FilterItems, StaticItems, from_async_fn, from_fn};
pub use worker::FilterError;
