//! Shared popup/modal base component.

use ratatui::{
    layout::Alignment,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear},
    Frame,
};

use crate::ui::{layouts, theme};

/// Render a centered popup frame over the whole screen and return the inner
/// area for content.
///
/// `size` is (width_percent, height_percent). The optional `footer` is drawn
/// on the bottom border, e.g. how to close the popup.
pub fn render_popup_frame(
    f: &mut Frame,
    size: (u16, u16),
    title: &str,
    footer: Option<&str>,
    border_style: Style,
) -> ratatui::prelude::Rect {
    let area = layouts::centered_popup(size.0, size.1, f.area());

    // Whatever was drawn underneath must not bleed through
    f.render_widget(Clear, area);

    let mut block = Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(border_style);

    if let Some(footer) = footer {
        block = block.title_bottom(
            Line::styled(footer, theme::help_text_style()).alignment(Alignment::Center),
        );
    }

    let inner = block.inner(area);
    f.render_widget(block, area);

    inner
}
