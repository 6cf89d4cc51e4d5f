use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::ui::{
    components::{
        control_bar,
        empty_state::{self, EmptyState},
        form_input, help_bar, screen_title,
    },
    layouts, theme, utils,
    view::{Focus, FormMode, TrackerView},
};

pub fn render(f: &mut Frame, view: &TrackerView) {
    let areas = layouts::tracker_layout(f.area());

    screen_title::render_screen_title(f, areas.title, "Calorie Tracker", &view.total_label);

    form_input::render_form_input(
        f,
        areas.name_field,
        " Item ",
        &view.form.name,
        view.focus == Focus::Name,
    );
    form_input::render_form_input(
        f,
        areas.calories_field,
        " Calories ",
        &view.form.calories,
        view.focus == Focus::Calories,
    );

    control_bar::render_control_bar(f, areas.controls, &view.controls);
    render_items(f, areas.list, view);
    help_bar::render_help_bar(f, areas.help, help_bar::tracker_help_text(view));
}

fn render_items(f: &mut Frame, area: Rect, view: &TrackerView) {
    let border_style = if view.focus == Focus::List {
        theme::accent_border_style()
    } else {
        Style::default()
    };

    if view.rows().is_empty() {
        empty_state::render_empty_state(
            f,
            area,
            EmptyState {
                title: "Items",
                message: "No items yet",
                hint: Some("Type a name and calories, then press Enter"),
            },
            border_style,
        );
        return;
    }

    let header = Row::new(vec![
        Cell::from("Item"),
        Cell::from(Text::from("Calories").right_aligned()),
    ])
    .style(theme::header_style())
    .underlined();

    let rows: Vec<Row> = view
        .rows()
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.name.clone()),
                Cell::from(Line::from(utils::fmt_calories(row.calories)).right_aligned()),
            ])
        })
        .collect();

    let title = match view.mode() {
        FormMode::Add => format!("Items ({})", view.rows().len()),
        FormMode::Edit => format!("Items ({}) - editing", view.rows().len()),
    };

    // Selection only matters while the list has focus
    let highlight = if view.focus == Focus::List {
        theme::selection_style()
    } else {
        Style::default()
    };

    let table = Table::new(rows, [Constraint::Percentage(70), Constraint::Percentage(30)])
        .header(header)
        .column_spacing(theme::TABLE_COLUMN_SPACING)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        )
        .row_highlight_style(highlight);

    f.render_stateful_widget(table, area, &mut view.table_state.borrow_mut());
}
