//! Keyboard focus over the current result list
//!
//! The cursor is `None` when nothing is focused and `Some(i)` for an index
//! into the list. Moving past either end lands on `None` before wrapping,
//! so a full cycle always passes through the input itself.

mod accessibility;

pub use accessibility::{AccessibilityProps, item_element_id};

/// Keys the navigator interprets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Down,
    Up,
    Enter,
    Escape,
    Tab,
}

/// What the owner should do after a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Focus moved (or stayed); nothing else to do
    Moved,
    /// Commit the item at this index as the selection
    Commit(usize),
    /// Close the list
    Close,
    /// Key had no effect
    Ignored,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusNavigator {
    focused_index: Option<usize>,
}

impl FocusNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.focused_index
    }

    /// Apply a key against a list of `len` items
    pub fn handle_key(&mut self, key: NavKey, len: usize) -> NavAction {
        // Guard against a cursor left over from a longer list
        if self.focused_index.is_some_and(|i| i >= len) {
            self.focused_index = None;
        }

        match key {
            NavKey::Down => {
                self.focus_next(len);
                NavAction::Moved
            }
            NavKey::Up => {
                self.focus_previous(len);
                NavAction::Moved
            }
            NavKey::Enter => match self.focused_index {
                Some(index) => NavAction::Commit(index),
                None => NavAction::Ignored,
            },
            NavKey::Escape | NavKey::Tab => NavAction::Close,
        }
    }

    pub fn focus_next(&mut self, len: usize) {
        self.focused_index = match self.focused_index {
            None if len > 0 => Some(0),
            Some(i) if i + 1 < len => Some(i + 1),
            _ => None,
        };
    }

    pub fn focus_previous(&mut self, len: usize) {
        self.focused_index = match self.focused_index {
            None => len.checked_sub(1),
            Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }

    pub fn reset(&mut self) {
        self.focused_index = None;
    }
}

#[cfg(test)]
#[path = "navigator_tests.rs"]
mod navigator_tests;
