use ratatui::crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use super::autocomplete_state::Autocomplete;
use crate::click_outside::contains;
use crate::navigator::{NavAction, NavKey};

/// Rows moved per mouse wheel notch
const WHEEL_SCROLL_ROWS: usize = 1;

impl Autocomplete {
    /// Handle a key press aimed at the search field
    ///
    /// Returns whether the key was consumed. Tab closes the list but is left
    /// for the host so it can move focus elsewhere.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        if !self.accepts_interaction() {
            return false;
        }

        if let Some(nav_key) = nav_key(&key) {
            return self.handle_nav_key(nav_key);
        }

        if self.input.input(key) {
            self.text_changed();
        }
        true
    }

    fn handle_nav_key(&mut self, key: NavKey) -> bool {
        if !self.is_open() {
            return false;
        }

        let len = self.visible_items().len();
        match self.navigator.handle_key(key, len) {
            NavAction::Moved => {
                self.scroll.sync_focus(self.navigator.focused_index(), true);
                true
            }
            NavAction::Commit(index) => self.select(index),
            NavAction::Close => {
                self.close();
                key != NavKey::Tab
            }
            NavAction::Ignored => false,
        }
    }

    /// Insert bracketed-paste text at the cursor
    pub fn handle_paste(&mut self, text: &str) -> bool {
        if !self.accepts_interaction() {
            return false;
        }
        if !self.input.paste(text) {
            return false;
        }
        self.text_changed();
        true
    }

    /// Handle a mouse event. Returns whether state changed.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) -> bool {
        if !self.accepts_interaction() {
            return false;
        }

        if self.click_outside.is_outside_press(&mouse, self.is_open()) {
            log::debug!("Press outside autocomplete at ({}, {})", mouse.column, mouse.row);
            self.close();
            return true;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = self.row_at(mouse.column, mouse.row) {
                    return self.select(index);
                }
                if self.is_over_input(mouse.column, mouse.row) {
                    return self.focus();
                }
                false
            }
            MouseEventKind::ScrollDown if self.is_over_list(mouse.column, mouse.row) => {
                let before = self.scroll.offset;
                self.scroll.scroll_down(WHEEL_SCROLL_ROWS);
                self.scroll.offset != before
            }
            MouseEventKind::ScrollUp if self.is_over_list(mouse.column, mouse.row) => {
                let before = self.scroll.offset;
                self.scroll.scroll_up(WHEEL_SCROLL_ROWS);
                self.scroll.offset != before
            }
            _ => false,
        }
    }

    /// Index of the item drawn at a screen position, if any
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        if !self.is_open() {
            return None;
        }
        let list = self.layout?.list?;
        if !contains(&list, column, row) {
            return None;
        }
        let index = self.scroll.offset + usize::from(row - list.y);
        (index < self.visible_items().len()).then_some(index)
    }

    fn is_over_list(&self, column: u16, row: u16) -> bool {
        self.is_open()
            && self
                .layout
                .and_then(|layout| layout.list)
                .is_some_and(|list| contains(&list, column, row))
    }

    fn is_over_input(&self, column: u16, row: u16) -> bool {
        self.layout
            .is_some_and(|layout| contains(&layout.input, column, row))
    }
}

fn nav_key(key: &KeyEvent) -> Option<NavKey> {
    match key.code {
        KeyCode::Down => Some(NavKey::Down),
        KeyCode::Up => Some(NavKey::Up),
        KeyCode::Enter => Some(NavKey::Enter),
        KeyCode::Esc => Some(NavKey::Escape),
        KeyCode::Tab => Some(NavKey::Tab),
        _ => None,
    }
}

#[cfg(test)]
#[path = "autocomplete_events_tests.rs"]
mod autocomplete_events_tests;
