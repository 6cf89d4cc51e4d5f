//! The Add / Update / Cancel controls under the form.

use ratatui::prelude::Rect;
use ratatui::{
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::{theme, view::ControlVisibility};

/// Labels of the visible controls, in display order
pub fn visible_controls(controls: &ControlVisibility) -> Vec<&'static str> {
    [
        (controls.add, " Add [Enter] "),
        (controls.update, " Update "),
        (controls.cancel, " Cancel [Esc] "),
    ]
    .into_iter()
    .filter_map(|(shown, label)| shown.then_some(label))
    .collect()
}

/// Render only the controls that are currently shown
pub fn render_control_bar(f: &mut Frame, area: Rect, controls: &ControlVisibility) {
    let colors = [
        (controls.add, theme::COLOR_CONTROL_ADD),
        (controls.update, theme::COLOR_CONTROL_UPDATE),
        (controls.cancel, theme::COLOR_CONTROL_CANCEL),
    ]
    .into_iter()
    .filter_map(|(shown, color)| shown.then_some(color));

    let mut spans = Vec::new();
    for (label, color) in visible_controls(controls).into_iter().zip(colors) {
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(label, theme::control_style(color)));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_mode_shows_only_add() {
        let controls = ControlVisibility {
            add: true,
            update: false,
            cancel: false,
        };
        assert_eq!(visible_controls(&controls), vec![" Add [Enter] "]);
    }

    #[test]
    fn edit_mode_shows_update_and_cancel() {
        let controls = ControlVisibility {
            add: false,
            update: true,
            cancel: true,
        };
        assert_eq!(
            visible_controls(&controls),
            vec![" Update ", " Cancel [Esc] "]
        );
    }
}
