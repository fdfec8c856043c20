use std::sync::Arc;
use std::time::Duration;

use crate::autocomplete::Autocomplete;
use crate::config::Config;
use crate::item::Item;
use crate::query::StaticItems;

/// Interactive picker driving one autocomplete
pub struct App {
    pub autocomplete: Autocomplete,
    /// Shown in the status line until the next key press
    pub warning: Option<String>,
    /// Item the user confirmed, printed after the terminal is restored
    pub confirmed: Option<Item>,
    pub should_quit: bool,
    dirty: bool,
}

impl App {
    /// Picker over an in-memory item list
    pub fn new(items: Vec<Item>, config: &Config) -> Self {
        let source = StaticItems::new(items)
            .with_latency(Duration::from_millis(config.picker.latency_ms));
        let autocomplete = Autocomplete::new(config.autocomplete.clone(), Arc::new(source));
        Self::with_autocomplete(autocomplete)
    }

    pub fn with_autocomplete(autocomplete: Autocomplete) -> Self {
        Self {
            autocomplete,
            warning: None,
            confirmed: None,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn show_warning(&mut self, warning: &str) {
        self.warning = Some(warning.to_string());
        self.dirty = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn should_render(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    pub fn confirmed_item(&self) -> Option<&Item> {
        self.confirmed.as_ref()
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
