use std::sync::Arc;
use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use super::display_mode::DisplayMode;
use super::input_state::InputState;
use crate::click_outside::ClickOutsideMonitor;
use crate::config::AutocompleteConfig;
use crate::item::Item;
use crate::navigator::{AccessibilityProps, FocusNavigator, item_element_id};
use crate::query::source::FilterItems;
use crate::query::{Debouncer, QueryState};
use crate::scroll::ScrollState;

pub type InputChangeHandler = Box<dyn FnMut(&str)>;
pub type SelectHandler = Box<dyn FnMut(&Item)>;

/// Screen regions from the last render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderedLayout {
    pub input: Rect,
    /// Inner area of the dropdown list, when it was drawn
    pub list: Option<Rect>,
}

/// Searchable input with a result dropdown
///
/// Owns all query state. Hosts feed it terminal events, call [`tick`] and
/// [`poll`] from their loop, and read the derived state back.
///
/// [`tick`]: Autocomplete::tick
/// [`poll`]: Autocomplete::poll
pub struct Autocomplete {
    pub(super) config: AutocompleteConfig,
    pub(super) input: InputState,
    pub(super) query: QueryState,
    pub(super) debouncer: Debouncer<String>,
    pub(super) navigator: FocusNavigator,
    pub(super) scroll: ScrollState,
    pub(super) click_outside: ClickOutsideMonitor,
    pub(super) layout: Option<RenderedLayout>,
    pub(super) is_open: bool,
    pub(super) selected_item: Option<Item>,
    /// Last `QueryState::items_generation` focus was reset for
    seen_generation: u64,
    on_input_change: Option<InputChangeHandler>,
    on_select: Option<SelectHandler>,
    pub(super) torn_down: bool,
}

impl Autocomplete {
    /// Create an autocomplete resolving queries through `source`
    ///
    /// Spawns the background search worker.
    pub fn new(config: AutocompleteConfig, source: Arc<dyn FilterItems>) -> Self {
        let query = QueryState::new(source, config.min_chars, Vec::new());
        Self::with_query_state(config, query)
    }

    /// Create an autocomplete over an already wired `QueryState`
    pub fn with_query_state(config: AutocompleteConfig, query: QueryState) -> Self {
        let mut input = InputState::new(&config.placeholder);
        input.set_disabled(config.disabled);

        Self {
            debouncer: Debouncer::from_millis(config.debounce_ms),
            seen_generation: query.items_generation(),
            config,
            input,
            query,
            navigator: FocusNavigator::new(),
            scroll: ScrollState::new(),
            click_outside: ClickOutsideMonitor::new(),
            layout: None,
            is_open: false,
            selected_item: None,
            on_input_change: None,
            on_select: None,
            torn_down: false,
        }
    }

    /// Items shown before the first search resolves
    pub fn with_default_items(mut self, items: Vec<Item>) -> Self {
        self.query.set_default_items(items);
        self.sync_generation();
        self
    }

    /// Called with the displayed text on every change, typed or selected
    pub fn on_input_change(mut self, handler: impl FnMut(&str) + 'static) -> Self {
        self.on_input_change = Some(Box::new(handler));
        self
    }

    /// Called once per confirmed selection
    pub fn on_select(mut self, handler: impl FnMut(&Item) + 'static) -> Self {
        self.on_select = Some(Box::new(handler));
        self
    }

    /// Replace the displayed text as if it had been typed
    pub fn set_input(&mut self, text: &str) {
        if !self.accepts_interaction() || self.input.text() == text {
            return;
        }
        self.input.set_text(text);
        self.text_changed();
    }

    /// React to an edit of the displayed text
    pub(super) fn text_changed(&mut self) {
        let text = self.input.text().to_string();

        if self
            .selected_item
            .as_ref()
            .is_some_and(|item| item.label != text)
        {
            self.selected_item = None;
        }

        if let Some(handler) = self.on_input_change.as_mut() {
            handler(&text);
        }

        if !self.meets_min_chars(&text) {
            self.is_open = false;
            self.navigator.reset();
        }

        self.debouncer.schedule(text);
    }

    /// Reopen the list when the current text is long enough
    pub fn focus(&mut self) -> bool {
        if !self.accepts_interaction() || self.is_open {
            return false;
        }
        if !self.meets_min_chars(self.input.text()) {
            return false;
        }
        self.is_open = true;
        true
    }

    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    /// Fire the debounced search if its quiet period has passed
    pub fn tick_at(&mut self, now: Instant) -> bool {
        if self.torn_down {
            return false;
        }
        let Some(text) = self.debouncer.take_ready_at(now) else {
            return false;
        };

        log::debug!("Debounced search for {:?}", text);
        if self.query.search(&text) {
            // Rows stay hidden until the new results arrive
            self.navigator.reset();
        }
        if !self.config.disabled && self.meets_min_chars(&text) {
            self.is_open = true;
        }
        true
    }

    pub fn time_until_search(&self) -> Option<Duration> {
        self.time_until_search_at(Instant::now())
    }

    /// Time left before the pending keystroke's search fires, if one is waiting
    pub fn time_until_search_at(&self, now: Instant) -> Option<Duration> {
        if self.torn_down {
            return None;
        }
        self.debouncer.time_until_ready_at(now)
    }

    /// Drain finished searches. Returns whether visible state changed.
    pub fn poll(&mut self) -> bool {
        if self.torn_down {
            return false;
        }
        let changed = self.query.poll_response();
        self.sync_generation();
        changed
    }

    /// Commit the item at `index` as the selection
    ///
    /// Sets the text to the item's label, notifies both callbacks and
    /// closes the list. Returns false when there is no such item.
    pub fn select(&mut self, index: usize) -> bool {
        if !self.accepts_interaction() {
            return false;
        }
        let Some(item) = self.query.filtered_items().get(index).cloned() else {
            return false;
        };

        log::debug!("Selected item {} ({:?})", item.id, item.label);

        self.debouncer.cancel();
        self.input.set_text(&item.label);
        if let Some(handler) = self.on_input_change.as_mut() {
            handler(&item.label);
        }
        if let Some(handler) = self.on_select.as_mut() {
            handler(&item);
        }
        self.selected_item = Some(item);
        self.close();
        true
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.navigator.reset();
    }

    /// Cancel outstanding work and stop reacting to anything
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.debouncer.cancel();
        self.query.shutdown();
        self.click_outside.detach();
        self.is_open = false;
        self.torn_down = true;
        log::debug!("Autocomplete {} torn down", self.config.id_prefix);
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub(super) fn accepts_interaction(&self) -> bool {
        !self.config.disabled && !self.torn_down
    }

    fn meets_min_chars(&self, text: &str) -> bool {
        text.chars().count() >= self.config.min_chars
    }

    /// Reset focus and scroll whenever the result set was replaced
    fn sync_generation(&mut self) {
        let generation = self.query.items_generation();
        if generation != self.seen_generation {
            self.seen_generation = generation;
            self.navigator.reset();
            self.scroll.reset();
            // Rows hit-tested against the old list no longer match the items
            self.layout = self.layout.map(|layout| RenderedLayout {
                list: None,
                ..layout
            });
        }
    }

    pub fn config(&self) -> &AutocompleteConfig {
        &self.config
    }

    pub fn query(&self) -> &str {
        self.input.text()
    }

    pub fn is_open(&self) -> bool {
        self.is_open && self.accepts_interaction() && self.meets_min_chars(self.input.text())
    }

    pub fn filtered_items(&self) -> &[Item] {
        self.query.filtered_items()
    }

    pub fn is_loading(&self) -> bool {
        self.query.is_loading()
    }

    /// Whether a keystroke is still waiting out the debounce period
    pub fn has_pending_search(&self) -> bool {
        self.debouncer.has_pending()
    }

    pub fn error(&self) -> Option<&str> {
        self.query.error()
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.navigator.focused_index()
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.selected_item.as_ref()
    }

    pub fn display_mode(&self) -> DisplayMode {
        DisplayMode::derive(
            self.query.error().is_some(),
            self.query.is_loading(),
            self.query.filtered_items().len(),
            self.input.text().is_empty(),
        )
    }

    /// Items the dropdown can show and navigate in the current mode
    pub(super) fn visible_items(&self) -> &[Item] {
        match self.display_mode() {
            DisplayMode::Populated => self.query.filtered_items(),
            _ => &[],
        }
    }

    pub fn accessibility(&self) -> AccessibilityProps {
        let drawn_focus = self
            .focused_index()
            .filter(|&index| index < self.visible_items().len());
        AccessibilityProps::derive(&self.list_id(), self.is_open(), drawn_focus)
    }

    pub fn input_id(&self) -> String {
        format!("autocomplete-input-{}", self.config.id_prefix)
    }

    pub fn list_id(&self) -> String {
        format!("autocomplete-dropdown-{}", self.config.id_prefix)
    }

    pub fn item_id(&self, index: usize) -> String {
        item_element_id(&self.list_id(), index)
    }

    pub fn layout(&self) -> Option<RenderedLayout> {
        self.layout
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll.offset
    }
}

impl Drop for Autocomplete {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
#[path = "autocomplete_state_tests.rs"]
mod autocomplete_state_tests;
