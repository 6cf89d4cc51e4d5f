//! Centralized theme constants and style functions for consistent UI styling.
//!
//! All colors, layout constants, and common styles should be defined here
//! to ensure visual consistency across all screens and components.

use ratatui::style::{Color, Modifier, Style};

use crate::store::Calories;

// =============================================================================
// Colors
// =============================================================================

/// Color for ordinary calorie counts
pub const COLOR_CALORIES: Color = Color::Green;

/// Color for counts that coerced to NaN
pub const COLOR_NAN: Color = Color::Red;

/// Color for zero counts
pub const COLOR_ZERO: Color = Color::DarkGray;

/// Background color for selected/highlighted rows
pub const COLOR_SELECTION_BG: Color = Color::DarkGray;

/// Color for table headers
pub const COLOR_HEADER: Color = Color::Yellow;

/// Color for help text and secondary information
pub const COLOR_HELP_TEXT: Color = Color::Gray;

/// Color for screen titles and accent text
pub const COLOR_TITLE: Color = Color::Cyan;

/// Color for status messages
pub const COLOR_STATUS: Color = Color::Yellow;

/// Border color for accent/highlighted elements
pub const COLOR_BORDER_ACCENT: Color = Color::Cyan;

/// Border color for the focused input field
pub const COLOR_INPUT_FOCUSED: Color = Color::Yellow;

/// Control colors
pub const COLOR_CONTROL_ADD: Color = Color::Green;
pub const COLOR_CONTROL_UPDATE: Color = Color::Blue;
pub const COLOR_CONTROL_CANCEL: Color = Color::Red;

// =============================================================================
// Layout Constants
// =============================================================================

/// Standard margin around screen content
pub const SCREEN_MARGIN: u16 = 2;

/// Height of the title/header area
pub const TITLE_HEIGHT: u16 = 1;

/// Height of the help bar at the bottom
pub const HELP_BAR_HEIGHT: u16 = 3;

/// Height of the bordered form input row
pub const FORM_HEIGHT: u16 = 3;

/// Height of the control bar under the form
pub const CONTROL_BAR_HEIGHT: u16 = 1;

/// Standard column spacing for tables
pub const TABLE_COLUMN_SPACING: u16 = 2;

// =============================================================================
// Style Functions
// =============================================================================

/// Style for selected/highlighted rows in tables and lists
pub fn selection_style() -> Style {
    Style::default()
        .bg(COLOR_SELECTION_BG)
        .add_modifier(Modifier::BOLD)
}

/// Style for table headers
pub fn header_style() -> Style {
    Style::default()
        .fg(COLOR_HEADER)
        .add_modifier(Modifier::BOLD)
}

/// Style for help bar text
pub fn help_text_style() -> Style {
    Style::default().fg(COLOR_HELP_TEXT)
}

/// Style for screen titles
pub fn title_style() -> Style {
    Style::default()
        .fg(COLOR_TITLE)
        .add_modifier(Modifier::BOLD)
}

/// Style for status messages
pub fn status_style() -> Style {
    Style::default().fg(COLOR_STATUS)
}

/// Border style for the focused form field
pub fn input_focused_border_style() -> Style {
    Style::default()
        .fg(COLOR_INPUT_FOCUSED)
        .add_modifier(Modifier::BOLD)
}

/// Border style for unfocused form fields
pub fn input_border_style() -> Style {
    Style::default().fg(Color::White)
}

/// Style for accent borders
pub fn accent_border_style() -> Style {
    Style::default().fg(COLOR_BORDER_ACCENT)
}

/// Style for a shown control button
pub fn control_style(color: Color) -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(color)
        .add_modifier(Modifier::BOLD)
}

// =============================================================================
// Calorie Color Helper
// =============================================================================

/// Get the color for a calorie count.
/// NaN = red, zero = gray, anything else = green
pub fn calories_color(calories: Calories) -> Color {
    match calories {
        Calories::NotANumber => COLOR_NAN,
        Calories::Count(0) => COLOR_ZERO,
        Calories::Count(_) => COLOR_CALORIES,
    }
}
