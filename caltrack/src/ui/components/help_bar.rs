//! Shared help bar component for consistent bottom navigation hints.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;
use crate::ui::view::{Focus, FormMode, TrackerView};

/// Render a standard help bar with the given text.
pub fn render_help_bar(f: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text)
        .style(theme::help_text_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(help, area);
}

/// Hints for the tracker screen, depending on focus and form mode
pub fn tracker_help_text(view: &TrackerView) -> &'static str {
    match (view.focus, view.mode()) {
        (Focus::List, FormMode::Add) => {
            "j/k: select | e: edit | d: delete | Tab: form | L: logs | ?: help | q: quit"
        }
        (Focus::List, FormMode::Edit) => {
            "j/k: select | e: edit | d: delete | Tab: form | Esc: cancel | ?: help"
        }
        (_, FormMode::Add) => "Type to fill | Tab: next field | Enter: add | Ctrl+C: quit",
        (_, FormMode::Edit) => "Type to change | Tab: next field | Esc: cancel | Ctrl+C: quit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Calories;

    #[test]
    fn hints_follow_focus_and_mode() {
        let mut view = TrackerView::new();
        view.populate_items(&[]);
        assert!(tracker_help_text(&view).contains("Enter: add"));

        view.populate_input_fields_for_edit("Apple", Calories::Count(95));
        assert!(tracker_help_text(&view).contains("Esc: cancel"));

        view.focus = Focus::List;
        assert!(tracker_help_text(&view).contains("d: delete"));
    }
}
