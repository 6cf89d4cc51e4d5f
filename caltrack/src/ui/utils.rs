use ratatui::{style::Style, text::Span};

use crate::store::Calories;

use super::theme;

/// Row text for an item's calories, e.g. "95 Calories"
pub fn calories_label(calories: Calories) -> String {
    format!("{} Calories", calories)
}

/// Colored span for a calorie count
pub fn fmt_calories(calories: Calories) -> Span<'static> {
    Span::styled(
        calories_label(calories),
        Style::default().fg(theme::calories_color(calories)),
    )
}

/// Cut `text` to at most `max_len` characters, keeping the tail
pub fn truncate_start(text: &str, max_len: usize) -> String {
    let len = text.chars().count();
    if len <= max_len {
        return text.to_string();
    }

    let keep = max_len.saturating_sub(3);
    let tail: String = text.chars().skip(len - keep).collect();
    format!("...{}", tail)
}
