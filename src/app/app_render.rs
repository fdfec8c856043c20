use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::App;
use crate::theme;

const KEY_HINTS: &[(&str, &str)] = &[
    ("↑↓", "navigate"),
    ("Enter", "select"),
    ("Esc", "close"),
    ("Ctrl+C", "quit"),
];

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let [picker_area, status_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(frame.area());

        self.autocomplete.render(frame, picker_area);
        render_status_line(self, frame, status_area);
    }
}

fn render_status_line(app: &App, frame: &mut Frame, area: Rect) {
    let line = if let Some(warning) = &app.warning {
        Line::from(Span::styled(
            format!(" ⚠ {}", warning),
            Style::default().fg(theme::status::WARNING),
        ))
    } else {
        let mut spans = Vec::new();
        if let Some(item) = app.autocomplete.selected_item() {
            spans.push(Span::styled(
                format!(" ✓ {} (Enter to confirm) ", item.label),
                Style::default().fg(theme::status::SELECTED),
            ));
        }
        for (key, description) in KEY_HINTS {
            spans.push(Span::styled(
                format!(" {} ", key),
                Style::default().fg(theme::status::KEY),
            ));
            spans.push(Span::styled(
                format!("{} ", description),
                Style::default().fg(theme::status::DESCRIPTION),
            ));
        }
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
