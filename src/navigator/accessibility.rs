/// Element id of the row at `index` in the list `list_id`
pub fn item_element_id(list_id: &str, index: usize) -> String {
    format!("{}-item-{}", list_id, index)
}

/// Combobox descriptors derived from open state and focus
///
/// Nothing here is stored; build it fresh from the controller's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessibilityProps {
    pub role: &'static str,
    pub has_popup: &'static str,
    pub expanded: bool,
    /// Id of the list element, present only while it is shown
    pub controls: Option<String>,
    /// Id of the focused row, present only while a row is focused
    pub active_descendant: Option<String>,
}

impl AccessibilityProps {
    pub fn derive(list_id: &str, is_open: bool, focused_index: Option<usize>) -> Self {
        Self {
            role: "combobox",
            has_popup: "listbox",
            expanded: is_open,
            controls: is_open.then(|| list_id.to_string()),
            active_descendant: focused_index.map(|index| item_element_id(list_id, index)),
        }
    }
}
