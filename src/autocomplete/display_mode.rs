/// What the dropdown shows
///
/// Exactly one mode applies at a time, picked in declaration order:
/// an error wins over loading, loading over an empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Error,
    Loading,
    NoResults,
    Populated,
}

impl DisplayMode {
    pub fn derive(has_error: bool, is_loading: bool, item_count: usize, input_empty: bool) -> Self {
        if has_error && !is_loading {
            DisplayMode::Error
        } else if is_loading {
            DisplayMode::Loading
        } else if item_count == 0 && !input_empty {
            DisplayMode::NoResults
        } else {
            DisplayMode::Populated
        }
    }

    /// Whether the mode renders a single status row instead of items
    pub fn is_status(self) -> bool {
        !matches!(self, DisplayMode::Populated)
    }
}
