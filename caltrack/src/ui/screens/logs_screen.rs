use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Row, Table},
};
use tracing::Level;

use crate::log_buffer::LogBuffer;
use crate::state::LogsState;
use crate::ui::{
    components::{
        empty_state::{self, EmptyState},
        help_bar,
    },
    layouts, theme, utils,
};

const TARGET_WIDTH: usize = 25;

pub fn render(f: &mut Frame, state: &LogsState, log_buffer: &LogBuffer) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    let title = format!("Logs ({} entries)", state.total_entries);
    f.render_widget(Paragraph::new(title).style(theme::title_style()), title_area);

    render_logs(f, content_area, state, log_buffer);
    help_bar::render_help_bar(f, help_area, &help_text(state));
}

fn render_logs(f: &mut Frame, area: Rect, state: &LogsState, log_buffer: &LogBuffer) {
    let entries = log_buffer.get_entries();
    let total = entries.len();

    if total == 0 {
        empty_state::render_empty_state(
            f,
            area,
            EmptyState {
                title: "Session Logs",
                message: "No logs yet",
                hint: None,
            },
            Style::default(),
        );
        return;
    }

    // Newest entries at the bottom; borders and header take 4 rows
    let (start, end) = visible_window(total, state.scroll_offset, area.height.saturating_sub(4));

    let rows: Vec<Row> = entries[start..end]
        .iter()
        .map(|entry| {
            Row::new(vec![
                entry.timestamp.format("%H:%M:%S%.3f").to_string(),
                format!("{:5}", entry.level),
                utils::truncate_start(&entry.target, TARGET_WIDTH),
                entry.message.clone(),
            ])
            .style(level_style(entry.level))
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(5),
        Constraint::Length(TARGET_WIDTH as u16),
        Constraint::Min(30),
    ];

    let table = Table::new(rows, widths)
        .block(Block::default().borders(Borders::ALL).title(format!(
            " Logs [{}-{} of {}] ",
            start + 1,
            end,
            total
        )))
        .header(
            Row::new(vec!["Time", "Level", "Target", "Message"])
                .style(theme::header_style())
                .bottom_margin(1),
        );

    f.render_widget(table, area);
}

/// Index range of the entries that fit, counting `scroll_offset` up from the newest
fn visible_window(total: usize, scroll_offset: usize, height: u16) -> (usize, usize) {
    let end = total.saturating_sub(scroll_offset);
    let start = end.saturating_sub(height as usize);
    (start, end)
}

fn level_style(level: Level) -> Style {
    match level {
        Level::ERROR => Style::default()
            .fg(theme::COLOR_NAN)
            .add_modifier(Modifier::BOLD),
        Level::WARN => theme::status_style(),
        Level::INFO => Style::default().fg(theme::COLOR_CALORIES),
        Level::DEBUG => Style::default().fg(Color::Blue),
        Level::TRACE => Style::default().fg(theme::COLOR_ZERO),
    }
}

fn help_text(state: &LogsState) -> String {
    let scroll_info = if state.scroll_offset > 0 {
        format!(" (scrolled {} from bottom)", state.scroll_offset)
    } else {
        String::new()
    };

    format!(
        "j/k: scroll | G: bottom | g: top | PgUp/PgDn: page | h: back | ?: help{}",
        scroll_info
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_shows_newest_entries_by_default() {
        assert_eq!(visible_window(100, 0, 10), (90, 100));
        assert_eq!(visible_window(5, 0, 10), (0, 5));
    }

    #[test]
    fn window_moves_up_with_scroll_offset() {
        assert_eq!(visible_window(100, 30, 10), (60, 70));
        assert_eq!(visible_window(100, 100, 10), (0, 0));
    }

    #[test]
    fn help_mentions_scroll_position() {
        let state = LogsState {
            scroll_offset: 3,
            total_entries: 10,
        };
        assert!(help_text(&state).ends_with("(scrolled 3 from bottom)"));
    }
}
