use ratatui::crossterm::event::KeyCode;
use ratatui::{Terminal, backend::TestBackend};

use crate::app::App;
use crate::test_utils::test_helpers::{key, settle, test_app};

fn render_to_lines(app: &mut App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();

    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect::<String>())
        .collect()
}

#[test]
fn test_status_line_shows_key_hints() {
    let mut app = test_app();

    let lines = render_to_lines(&mut app, 80, 10);

    let status = &lines[9];
    assert!(status.contains("Enter"));
    assert!(status.contains("navigate"));
    assert!(status.contains("Ctrl+C"));
}

#[test]
fn test_status_line_shows_warning() {
    let mut app = test_app();
    app.show_warning("Invalid config: expected a table");

    let lines = render_to_lines(&mut app, 80, 10);

    assert!(lines[9].contains("Invalid config: expected a table"));
    assert!(!lines[9].contains("navigate"));
}

#[test]
fn test_status_line_shows_pending_confirmation() {
    let mut app = test_app();
    for ch in "lemon".chars() {
        app.handle_key_event(key(KeyCode::Char(ch)));
    }
    settle(&mut app.autocomplete);
    app.autocomplete.select(0);

    let lines = render_to_lines(&mut app, 80, 10);

    assert!(lines[9].contains("✓ Lemon (Enter to confirm)"));
}

#[test]
fn test_dropdown_renders_above_status_line() {
    let mut app = test_app();
    for ch in "ap".chars() {
        app.handle_key_event(key(KeyCode::Char(ch)));
    }
    settle(&mut app.autocomplete);

    let lines = render_to_lines(&mut app, 40, 10);

    assert!(lines[1].contains("ap"));
    assert!(lines.iter().any(|line| line.contains("Apple")));
    assert!(lines.iter().any(|line| line.contains("Apricot")));
}
