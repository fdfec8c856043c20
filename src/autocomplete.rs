//! Searchable input with a filtered result dropdown
//!
//! [`Autocomplete`] turns keystrokes into debounced, cancelable searches
//! against an injected [`FilterItems`](crate::query::FilterItems) source and
//! reconciles their results with keyboard focus, selection and the
//! open/closed state of the list.

mod autocomplete_events;
pub mod autocomplete_render;
mod autocomplete_state;
mod display_mode;
mod input_state;

pub use autocomplete_state::{Autocomplete, InputChangeHandler, RenderedLayout, SelectHandler};
pub use display_mode::DisplayMode;
pub use input_state::InputState;
