//! Shared screen title component with the running calorie total.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::{layouts, theme};

/// Render a screen title with the total calorie label on the right.
pub fn render_screen_title(f: &mut Frame, area: Rect, title: &str, total_label: &str) {
    let status = format!("Total Calories: {}", total_label);
    let (title_area, status_area) = layouts::title_with_status(area, status.len() as u16);

    f.render_widget(Paragraph::new(title).style(theme::title_style()), title_area);

    let total = Paragraph::new(Line::from(vec![Span::styled(status, theme::header_style())]))
        .alignment(Alignment::Right);
    f.render_widget(total, status_area);
}
