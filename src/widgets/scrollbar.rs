//! Vertical scrollbar for the result dropdown

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
};

/// Render a vertical scrollbar on the right border of `area`
///
/// Nothing is drawn when every row already fits in the viewport.
pub fn render_vertical_scrollbar(
    frame: &mut Frame,
    area: Rect,
    total_rows: usize,
    viewport_rows: usize,
    offset: usize,
    color: Color,
) {
    if !needs_scrollbar(total_rows, viewport_rows) {
        return;
    }

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .thumb_style(Style::default().fg(color))
        .track_style(Style::default().fg(color));

    // Ratatui's max position is content_length - 1, so pass max_offset + 1
    // to let the thumb reach the bottom at the last offset.
    let max_offset = total_rows.saturating_sub(viewport_rows);
    let mut state = ScrollbarState::new(max_offset + 1)
        .position(offset.min(max_offset))
        .viewport_content_length(viewport_rows);

    frame.render_stateful_widget(scrollbar, area, &mut state);
}

pub(crate) fn needs_scrollbar(total_rows: usize, viewport_rows: usize) -> bool {
    viewport_rows > 0 && total_rows > viewport_rows
}

#[cfg(test)]
#[path = "scrollbar_tests.rs"]
mod scrollbar_tests;
