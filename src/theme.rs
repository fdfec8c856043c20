//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. Render files use
//! `theme::module::CONSTANT` instead of hardcoding `Color::*` values.
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    // Text colors - softer than pure white
    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    // Background colors - deep space blue tints
    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);

    // Semantic colors
    pub const SUCCESS: Color = Color::Rgb(107, 203, 119);
    pub const WARNING: Color = Color::Rgb(255, 217, 61);
    pub const ERROR: Color = Color::Rgb(224, 108, 117);

    // Accent colors
    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const PINK: Color = Color::Rgb(255, 107, 157);
}

/// Search input field
pub mod input {
    use super::*;

    pub const BORDER_FOCUSED: Color = palette::CYAN;
    pub const BORDER_DISABLED: Color = palette::TEXT_DIM;
    pub const TEXT: Color = palette::TEXT;
    pub const TEXT_DISABLED: Color = palette::TEXT_DIM;
    pub const PLACEHOLDER: Color = palette::TEXT_MUTED;

    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Result dropdown below the input
pub mod dropdown {
    use super::*;

    pub const BORDER: Color = palette::CYAN;
    pub const SCROLLBAR: Color = palette::CYAN;
    pub const BACKGROUND: Color = palette::BG_DARK;

    // List rows
    pub const ITEM_NORMAL_FG: Color = palette::TEXT;
    pub const ITEM_FOCUSED_FG: Color = palette::BG_DARK;
    pub const ITEM_FOCUSED_BG: Color = palette::CYAN;
    pub const ITEM_FOCUSED_MODIFIER: Modifier = Modifier::BOLD;
    pub const ITEM_SELECTED_FG: Color = palette::SUCCESS;
    pub const MATCH: Style = Style::new().fg(palette::PINK).add_modifier(Modifier::BOLD);

    // Status rows
    pub const LOADING: Style = Style::new()
        .fg(palette::TEXT_MUTED)
        .add_modifier(Modifier::ITALIC);
    pub const NO_RESULTS: Color = palette::TEXT_MUTED;
    pub const ERROR: Color = palette::ERROR;
}

/// Picker status line
pub mod status {
    use super::*;

    pub const KEY: Color = palette::TEXT_MUTED;
    pub const DESCRIPTION: Color = palette::TEXT_DIM;
    pub const WARNING: Color = palette::WARNING;
    pub const SELECTED: Color = palette::SUCCESS;
}
