mod scroll_state;

pub use scroll_state::ScrollState;
