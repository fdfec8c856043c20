use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent,
};
use std::io;
use std::time::Duration;

use super::app_state::App;

/// Longest wait for terminal input while nothing else is due
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(25);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.poll_autocomplete();

        if event::poll(self.poll_timeout())? {
            match event::read()? {
                // Check that it's a key press event to avoid duplicates
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Paste(text) => {
                    if self.autocomplete.handle_paste(&text) {
                        self.mark_dirty();
                    }
                }
                Event::Mouse(mouse) => self.handle_mouse_event(mouse),
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }
        Ok(())
    }

    /// How long to wait for terminal input before the next tick
    pub fn poll_timeout(&self) -> Duration {
        self.autocomplete
            .time_until_search()
            .map_or(EVENT_POLL_TIMEOUT, |wait| wait.min(EVENT_POLL_TIMEOUT))
    }

    /// Fire due searches and drain finished ones
    pub fn poll_autocomplete(&mut self) {
        let fired = self.autocomplete.tick();
        let received = self.autocomplete.poll();
        if fired || received {
            self.mark_dirty();
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        self.mark_dirty();
        self.warning = None;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.autocomplete.handle_key_event(key) {
            return;
        }

        match key.code {
            KeyCode::Enter => {
                if let Some(item) = self.autocomplete.selected_item() {
                    log::debug!("Confirmed item {}", item.id);
                    self.confirmed = Some(item.clone());
                    self.should_quit = true;
                }
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if self.autocomplete.handle_mouse_event(mouse) {
            self.mark_dirty();
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
