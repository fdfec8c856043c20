use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders};
use tui_textarea::TextArea;

use crate::theme;

/// Single-line text editor backing the search field
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new(placeholder: &str) -> Self {
        let mut textarea = TextArea::default();

        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::input::BORDER_FOCUSED)),
        );
        textarea.set_placeholder_text(placeholder);
        textarea.set_placeholder_style(Style::default().fg(theme::input::PLACEHOLDER));
        textarea.set_style(Style::default().fg(theme::input::TEXT));
        textarea.set_cursor_style(theme::input::CURSOR);
        textarea.set_cursor_line_style(Style::default());

        Self { textarea }
    }

    pub fn text(&self) -> &str {
        self.textarea.lines().first().map(String::as_str).unwrap_or("")
    }

    /// Replace the whole line, leaving the cursor at the end
    pub fn set_text(&mut self, text: &str) {
        self.textarea.delete_line_by_head();
        self.textarea.delete_line_by_end();
        self.textarea.insert_str(single_line(text));
    }

    /// Feed an editing key to the textarea. Returns whether the text changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        if is_newline_key(&key) {
            return false;
        }
        self.textarea.input(key)
    }

    /// Insert pasted text at the cursor. Returns whether the text changed.
    pub fn paste(&mut self, text: &str) -> bool {
        let text = single_line(text);
        if text.is_empty() {
            return false;
        }
        self.textarea.insert_str(text)
    }

    /// Dim the field and hide the cursor while disabled
    pub fn set_disabled(&mut self, disabled: bool) {
        let (border, text, cursor) = if disabled {
            (
                theme::input::BORDER_DISABLED,
                theme::input::TEXT_DISABLED,
                Style::default(),
            )
        } else {
            (
                theme::input::BORDER_FOCUSED,
                theme::input::TEXT,
                theme::input::CURSOR,
            )
        };
        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
        self.textarea.set_style(Style::default().fg(text));
        self.textarea.set_cursor_style(cursor);
    }
}

/// Keys tui-textarea would turn into a line break
fn is_newline_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => true,
        KeyCode::Char('m') | KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn single_line(text: &str) -> String {
    text.chars().filter(|c| *c != '\n' && *c != '\r').collect()
}
