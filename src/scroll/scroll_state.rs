/// Vertical viewport over a list of rows
///
/// Offsets are row indices of the first visible row. Bounds come from the
/// last render; until then the viewport is zero rows tall and nothing moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: usize,
    pub max_offset: usize,
    pub viewport_height: usize,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            offset: 0,
            max_offset: 0,
            viewport_height: 0,
        }
    }

    pub fn update_bounds(&mut self, content_rows: usize, viewport_height: usize) {
        self.viewport_height = viewport_height;
        self.max_offset = content_rows.saturating_sub(viewport_height);
        self.offset = self.offset.min(self.max_offset);
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.offset = self.offset.saturating_add(rows).min(self.max_offset);
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.offset = self.offset.saturating_sub(rows);
    }

    /// Bring `index` into view, moving as little as possible
    ///
    /// Rows already visible leave the offset alone. Rows above the viewport
    /// become the first visible row; rows below become the last.
    pub fn scroll_into_view(&mut self, index: usize) {
        if self.viewport_height == 0 {
            return;
        }
        if index < self.offset {
            self.offset = index;
        } else if index >= self.offset + self.viewport_height {
            self.offset = index + 1 - self.viewport_height;
        }
        self.offset = self.offset.min(self.max_offset);
    }

    /// Keep the focused row visible while the list is open
    ///
    /// Does nothing when closed or when no row is focused.
    pub fn sync_focus(&mut self, focused_index: Option<usize>, is_open: bool) {
        if !is_open {
            return;
        }
        if let Some(index) = focused_index {
            self.scroll_into_view(index);
        }
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "scroll_state_tests.rs"]
mod scroll_state_tests;
