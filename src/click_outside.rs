//! Click-outside detection
//!
//! The component records its on-screen boundary every render. A button press
//! whose position falls outside that boundary while the list is open counts
//! as an outside interaction. Detaching forgets the boundary so nothing fires
//! after the component is gone.

use ratatui::crossterm::event::{MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickOutsideMonitor {
    boundary: Option<Rect>,
}

/// Check if a point is within a rectangle
pub(crate) fn contains(rect: &Rect, x: u16, y: u16) -> bool {
    x >= rect.x
        && x < rect.x.saturating_add(rect.width)
        && y >= rect.y
        && y < rect.y.saturating_add(rect.height)
}

impl ClickOutsideMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_boundary(&mut self, boundary: Rect) {
        self.boundary = Some(boundary);
    }

    pub fn boundary(&self) -> Option<Rect> {
        self.boundary
    }

    /// Forget the boundary; no further interaction qualifies
    pub fn detach(&mut self) {
        self.boundary = None;
    }

    pub fn is_inside(&self, column: u16, row: u16) -> bool {
        self.boundary
            .as_ref()
            .is_some_and(|rect| contains(rect, column, row))
    }

    /// Whether `mouse` is a press outside the boundary while `is_open`
    ///
    /// Returns true at most once per event; the caller closes the list.
    pub fn is_outside_press(&self, mouse: &MouseEvent, is_open: bool) -> bool {
        if !is_open || !matches!(mouse.kind, MouseEventKind::Down(_)) {
            return false;
        }
        let Some(boundary) = &self.boundary else {
            return false;
        };
        !contains(boundary, mouse.column, mouse.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::{KeyModifiers, MouseButton};

    fn press(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    fn monitor() -> ClickOutsideMonitor {
        let mut monitor = ClickOutsideMonitor::new();
        monitor.set_boundary(Rect::new(10, 5, 20, 8));
        monitor
    }

    #[test]
    fn test_press_outside_while_open_fires() {
        assert!(monitor().is_outside_press(&press(0, 0), true));
        assert!(monitor().is_outside_press(&press(30, 5), true));
        assert!(monitor().is_outside_press(&press(10, 13), true));
    }

    #[test]
    fn test_press_inside_never_fires() {
        assert!(!monitor().is_outside_press(&press(10, 5), true));
        assert!(!monitor().is_outside_press(&press(29, 12), true));
    }

    #[test]
    fn test_press_outside_while_closed_does_not_fire() {
        assert!(!monitor().is_outside_press(&press(0, 0), false));
    }

    #[test]
    fn test_non_press_events_do_not_fire() {
        let mut moved = press(0, 0);
        moved.kind = MouseEventKind::Moved;
        assert!(!monitor().is_outside_press(&moved, true));

        let mut released = press(0, 0);
        released.kind = MouseEventKind::Up(MouseButton::Left);
        assert!(!monitor().is_outside_press(&released, true));
    }

    #[test]
    fn test_right_button_press_counts() {
        let mut right = press(0, 0);
        right.kind = MouseEventKind::Down(MouseButton::Right);
        assert!(monitor().is_outside_press(&right, true));
    }

    #[test]
    fn test_detached_monitor_never_fires() {
        let mut monitor = monitor();
        monitor.detach();

        assert!(!monitor.is_outside_press(&press(0, 0), true));
        assert!(!monitor.is_inside(10, 5));
    }

    #[test]
    fn test_unrendered_monitor_never_fires() {
        assert!(!ClickOutsideMonitor::new().is_outside_press(&press(0, 0), true));
    }

    #[test]
    fn test_contains_edges() {
        let rect = Rect::new(0, 0, 3, 2);
        assert!(contains(&rect, 0, 0));
        assert!(contains(&rect, 2, 1));
        assert!(!contains(&rect, 3, 1));
        assert!(!contains(&rect, 2, 2));
    }
}
