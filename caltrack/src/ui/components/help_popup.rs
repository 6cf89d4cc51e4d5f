use ratatui::{
    prelude::*,
    widgets::{List, ListItem},
    Frame,
};

use crate::ui::{layouts, screens::Screen, theme};

pub fn render_help_popup(f: &mut Frame, screen: &Screen) {
    let inner = super::popup::render_popup_frame(
        f,
        layouts::popup_sizes::LARGE,
        " Help ",
        Some(" ? or Esc to close "),
        theme::accent_border_style(),
    );

    let items: Vec<ListItem> = help_items(screen)
        .iter()
        .map(|(key, description)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:15}", key), theme::header_style()),
                Span::raw(*description),
            ]))
        })
        .collect();

    let list = List::new(items).style(Style::default().fg(Color::White));

    f.render_widget(list, inner);
}

pub(crate) fn help_items(screen: &Screen) -> Vec<(&'static str, &'static str)> {
    let mut items = vec![];

    match screen {
        Screen::Tracker => {
            items.push(("--- Form ---", ""));
            items.push(("Type", "Fill the focused field"));
            items.push(("Tab/Shift+Tab", "Move between item, calories and list"));
            items.push(("Enter", "Add the item (not while editing)"));
            items.push(("Esc", "Cancel editing"));
            items.push(("", ""));
            items.push(("--- List ---", ""));
            items.push(("↑/k", "Move selection up"));
            items.push(("↓/j", "Move selection down"));
            items.push(("e", "Edit selected item"));
            items.push(("d/Delete", "Remove selected item"));
            items.push(("i", "Back to the form"));
            items.push(("L", "Open session logs"));
        }
        Screen::Logs(..) => {
            items.push(("↑/k", "Scroll up (older logs)"));
            items.push(("↓/j", "Scroll down (newer logs)"));
            items.push(("Page Up", "Scroll up one page"));
            items.push(("Page Down", "Scroll down one page"));
            items.push(("g", "Scroll to oldest logs"));
            items.push(("G", "Scroll to newest logs"));
            items.push(("h/←/Esc", "Back to the tracker"));
        }
    }

    items.push(("", ""));
    items.push(("--- Global ---", ""));
    items.push(("?", "Toggle this help"));
    items.push(("q", "Quit (outside the form)"));
    items.push(("Ctrl+C", "Quit"));

    items
}
