use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Place a popup directly under `anchor`, clipped to `bounds`
///
/// Width follows the anchor. Height shrinks to whatever space remains
/// below the anchor inside `bounds`, possibly zero.
pub fn popup_below_anchor(anchor: Rect, height: u16, bounds: Rect) -> Rect {
    let popup_y = anchor.y.saturating_add(anchor.height);
    let bounds_bottom = bounds.y.saturating_add(bounds.height);
    let available = bounds_bottom.saturating_sub(popup_y);

    Rect {
        x: anchor.x,
        y: popup_y.min(bounds_bottom),
        width: anchor.width,
        height: height.min(available),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
