//! Shared empty state component for consistent "no data" messages.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;

/// Text shown in place of an empty list or table
pub struct EmptyState<'a> {
    pub title: &'a str,
    pub message: &'a str,
    pub hint: Option<&'a str>,
}

/// Render an empty state message inside a bordered block.
///
/// `border_style` lets an empty but focused list keep its focus highlight.
pub fn render_empty_state(f: &mut Frame, area: Rect, state: EmptyState<'_>, border_style: Style) {
    let EmptyState {
        title,
        message,
        hint,
    } = state;

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(message, theme::status_style())),
    ];

    if let Some(hint_text) = hint {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            hint_text,
            theme::help_text_style(),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        );

    f.render_widget(paragraph, area);
}
