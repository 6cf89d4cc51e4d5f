//! Bordered single-line text input used by the tracker form.

use ratatui::prelude::Rect;
use ratatui::{
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;

/// Render a form field with its current text.
///
/// The focused field gets a highlighted border and the terminal cursor is
/// placed after its text.
pub fn render_form_input(f: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let border_style = if focused {
        theme::input_focused_border_style()
    } else {
        theme::input_border_style()
    };

    let input = Paragraph::new(value).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(label),
    );

    f.render_widget(input, area);

    if focused {
        // Inside the left border, after the last character
        let max_x = area.x + area.width.saturating_sub(2);
        let x = (area.x + 1 + value.chars().count() as u16).min(max_x);
        f.set_cursor_position((x, area.y + 1));
    }
}
