//! typeahead - debounced, cancellable autocomplete input for terminal UIs
//!
//! [`Autocomplete`] owns the query lifecycle: keystrokes are debounced,
//! every search gets a cancellation token, and only the most recent search
//! may change what the list shows. Filtering itself is delegated to a
//! host-supplied [`FilterItems`](query::FilterItems) source.

pub mod app;
pub mod autocomplete;
pub mod click_outside;
pub mod config;
pub mod error;
pub mod highlight;
pub mod item;
pub mod navigator;
pub mod query;
pub mod scroll;

#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::App;
pub use autocomplete::{Autocomplete, DisplayMode};
pub use config::{AutocompleteConfig, Config};
pub use item::{Item, ItemId};
