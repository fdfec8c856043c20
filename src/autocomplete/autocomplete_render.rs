use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use super::autocomplete_state::{Autocomplete, RenderedLayout};
use super::display_mode::DisplayMode;
use crate::highlight::highlight_spans;
use crate::item::Item;
use crate::theme;
use crate::widgets::{popup, scrollbar};

pub const INPUT_HEIGHT: u16 = 3;
const MAX_VISIBLE_ROWS: usize = 8;
const DROPDOWN_BORDER_HEIGHT: u16 = 2;
const FOCUS_MARKER: &str = "► ";
const NO_MARKER: &str = "  ";
const SELECTED_MARKER: &str = " ✓";

impl Autocomplete {
    /// Draw the input and, while open, the dropdown below it
    ///
    /// Returns the area the component occupies, which also becomes the
    /// boundary for click-outside detection.
    pub fn render(&mut self, frame: &mut Frame, area: Rect) -> Rect {
        render_autocomplete(self, frame, area)
    }
}

pub fn render_autocomplete(autocomplete: &mut Autocomplete, frame: &mut Frame, area: Rect) -> Rect {
    let input_area = Rect {
        height: INPUT_HEIGHT.min(area.height),
        ..area
    };
    frame.render_widget(&autocomplete.input.textarea, input_area);

    if autocomplete.torn_down {
        return input_area;
    }

    let mut boundary = input_area;
    let mut list_area = None;

    if autocomplete.is_open()
        && let Some((outer, inner)) = render_dropdown(autocomplete, frame, input_area, area)
    {
        boundary = boundary.union(outer);
        list_area = Some(inner);
    }

    autocomplete.click_outside.set_boundary(boundary);
    autocomplete.layout = Some(RenderedLayout {
        input: input_area,
        list: list_area,
    });
    boundary
}

/// Returns the dropdown's outer and inner areas when it was drawn
fn render_dropdown(
    autocomplete: &mut Autocomplete,
    frame: &mut Frame,
    input_area: Rect,
    bounds: Rect,
) -> Option<(Rect, Rect)> {
    let mode = autocomplete.display_mode();
    let row_count = if mode.is_status() {
        1
    } else {
        autocomplete.visible_items().len()
    };
    if row_count == 0 {
        return None;
    }

    let wanted_height = row_count.min(MAX_VISIBLE_ROWS) as u16 + DROPDOWN_BORDER_HEIGHT;
    let outer = popup::popup_below_anchor(input_area, wanted_height, bounds);
    if outer.height <= DROPDOWN_BORDER_HEIGHT {
        return None;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::dropdown::BORDER))
        .style(Style::default().bg(theme::dropdown::BACKGROUND));
    let inner = block.inner(outer);
    let viewport_rows = usize::from(inner.height);

    autocomplete.scroll.update_bounds(row_count, viewport_rows);
    autocomplete
        .scroll
        .sync_focus(autocomplete.focused_index(), true);
    let offset = autocomplete.scroll.offset;

    let rows: Vec<ListItem> = match mode {
        DisplayMode::Error => vec![status_row(
            autocomplete.error().unwrap_or_default(),
            Style::default().fg(theme::dropdown::ERROR),
        )],
        DisplayMode::Loading => vec![status_row(
            &autocomplete.config.loading_text,
            theme::dropdown::LOADING,
        )],
        DisplayMode::NoResults => vec![status_row(
            &autocomplete.config.no_results_text,
            Style::default().fg(theme::dropdown::NO_RESULTS),
        )],
        DisplayMode::Populated => {
            let query = autocomplete.query();
            let focused = autocomplete.focused_index();
            let selected = autocomplete.selected_item();
            autocomplete
                .visible_items()
                .iter()
                .enumerate()
                .skip(offset)
                .take(viewport_rows)
                .map(|(index, item)| {
                    let is_selected = selected.is_some_and(|s| s.id == item.id);
                    item_row(item, query, focused == Some(index), is_selected)
                })
                .collect()
        }
    };

    popup::clear_area(frame, outer);
    frame.render_widget(List::new(rows).block(block), outer);

    if mode == DisplayMode::Populated {
        scrollbar::render_vertical_scrollbar(
            frame,
            outer,
            row_count,
            viewport_rows,
            offset,
            theme::dropdown::SCROLLBAR,
        );
    }

    Some((outer, inner))
}

fn status_row(text: &str, style: Style) -> ListItem<'_> {
    ListItem::new(Line::from(Span::styled(format!("{}{}", NO_MARKER, text), style)))
}

fn item_row<'a>(item: &'a Item, query: &str, is_focused: bool, is_selected: bool) -> ListItem<'a> {
    let base = if is_focused {
        Style::default()
            .fg(theme::dropdown::ITEM_FOCUSED_FG)
            .bg(theme::dropdown::ITEM_FOCUSED_BG)
            .add_modifier(theme::dropdown::ITEM_FOCUSED_MODIFIER)
    } else if is_selected {
        Style::default().fg(theme::dropdown::ITEM_SELECTED_FG)
    } else {
        Style::default().fg(theme::dropdown::ITEM_NORMAL_FG)
    };
    let highlight = if is_focused {
        base
    } else {
        theme::dropdown::MATCH
    };

    let marker = if is_focused { FOCUS_MARKER } else { NO_MARKER };
    let mut spans = vec![Span::styled(marker, base)];
    spans.extend(highlight_spans(&item.label, query, base, highlight));
    if is_selected {
        spans.push(Span::styled(SELECTED_MARKER, base));
    }

    ListItem::new(Line::from(spans)).style(base)
}

#[cfg(test)]
#[path = "autocomplete_render_tests.rs"]
mod autocomplete_render_tests;
