//! Shared test utilities for typeahead
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Arc;

    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::app::App;
    use crate::autocomplete::Autocomplete;
    use crate::config::{AutocompleteConfig, Config};
    use crate::item::{Item, ItemId};
    use crate::query::source::{FilterItems, StaticItems};

    pub fn apple() -> Item {
        Item::new(ItemId::Int(1), "Apple", "apple")
    }

    pub fn apricot() -> Item {
        Item::new(ItemId::Int(27), "Apricot", "apricot")
    }

    /// Small fixed catalogue; "cherry" and "banana" each match one label
    pub fn fruit_items() -> Vec<Item> {
        vec![
            apple(),
            apricot(),
            Item::new(ItemId::Int(3), "Banana", "banana"),
            Item::new(ItemId::Int(4), "Blueberry", "blueberry"),
            Item::new(ItemId::Int(5), "Cherry", "cherry"),
            Item::new(ItemId::Int(6), "Grape", "grape"),
            Item::new(ItemId::Int(7), "Lemon", "lemon"),
        ]
    }

    /// Config that searches as soon as the next tick runs
    pub fn instant_config() -> AutocompleteConfig {
        AutocompleteConfig::default().with_debounce_ms(0)
    }

    /// Autocomplete over the fruit catalogue with zero debounce
    pub fn fruit_autocomplete() -> Autocomplete {
        autocomplete_with(instant_config(), Arc::new(StaticItems::new(fruit_items())))
    }

    pub fn autocomplete_with(config: AutocompleteConfig, source: Arc<dyn FilterItems>) -> Autocomplete {
        Autocomplete::new(config, source)
    }

    /// Picker over the fruit catalogue with zero debounce
    pub fn test_app() -> App {
        let config = Config {
            autocomplete: instant_config(),
            ..Config::default()
        };
        App::new(fruit_items(), &config)
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Type `text` one character at a time
    pub fn type_text(autocomplete: &mut Autocomplete, text: &str) {
        for ch in text.chars() {
            autocomplete.handle_key_event(key(KeyCode::Char(ch)));
        }
    }

    /// Tick and poll until the in-flight search settles
    pub fn settle(autocomplete: &mut Autocomplete) {
        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
        loop {
            autocomplete.tick();
            autocomplete.poll();
            if !autocomplete.is_loading() && !autocomplete.has_pending_search() {
                return;
            }
            assert!(std::time::Instant::now() < deadline, "search did not settle in time");
            std::thread::sleep(std::time::Duration::from_millis(2));
        }
    }
}
