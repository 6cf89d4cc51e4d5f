use crate::events::AppCommand;
use crate::state::*;
use crate::store::{ItemId, ItemStore};
use crate::ui::screens::Screen;
use crate::ui::view::RowKey;

/// Rows scrolled by one page on the logs screen
const LOG_PAGE_SIZE: usize = 20;

/// Fill the view from the store on startup.
pub fn load_items(store: &ItemStore, state: &mut AppState) {
    let items = store.get_all_items();
    tracing::info!("Populating tracker with {} items", items.len());
    state.view.populate_items(items);
}

/// Apply a command to the store and the rendered view
pub fn execute_command(command: AppCommand, store: &mut ItemStore, state: &mut AppState) {
    match command {
        AppCommand::AddItem => {
            let input = state.view.get_form_input();
            let item = store.add_item(input.name, &input.calories);
            tracing::info!("Added item {} ({})", item.id, item.name);

            state.view.add_item_to_list(&item);
            state.view.update_total_calories(store.get_total_calories());
        }

        AppCommand::EditItem { row } => {
            let Some(id) = resolve_row(state, row) else {
                return;
            };

            match store.get_item_details(id) {
                Some(item) => {
                    tracing::info!("Editing item {} ({})", item.id, item.name);
                    let (name, calories) = (item.name.clone(), item.calories);
                    state.view.populate_input_fields_for_edit(&name, calories);
                }
                None => {
                    tracing::warn!("Item {} is listed but no longer in the store", id);
                }
            }
        }

        AppCommand::DeleteItem { row } => {
            let Some(id) = resolve_row(state, row) else {
                return;
            };

            store.delete_item(id);
            state.view.remove_item_list(row);
            tracing::info!("Deleted item {}", id);
        }

        AppCommand::CancelEdit => {
            store.reset_edit_item();
            state.view.reset_ui_fields();
            tracing::debug!("Edit cancelled");
        }

        // Form editing
        AppCommand::FocusNextField => state.view.focus_next(),
        AppCommand::FocusPreviousField => state.view.focus_prev(),
        AppCommand::AppendFormChar(c) => state.view.push_char(c),
        AppCommand::DeleteFormChar => state.view.pop_char(),

        // List selection
        AppCommand::SelectNext => state.view.select_next(),
        AppCommand::SelectPrevious => state.view.select_prev(),

        // Navigation
        AppCommand::NavigateBack => {
            state.navigate_back();
        }
        AppCommand::NavigateToLogs => {
            if !matches!(state.current_screen(), Screen::Logs(_)) {
                state.navigate_to(Screen::Logs(LogsState::default()));
            }
        }

        // Log screen
        AppCommand::ScrollLogsUp => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                if s.scroll_offset < s.total_entries.saturating_sub(1) {
                    s.scroll_offset += 1;
                }
            }
        }
        AppCommand::ScrollLogsDown => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = s.scroll_offset.saturating_sub(1);
            }
        }
        AppCommand::ScrollLogsPageUp => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset =
                    (s.scroll_offset + LOG_PAGE_SIZE).min(s.total_entries.saturating_sub(1));
            }
        }
        AppCommand::ScrollLogsPageDown => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = s.scroll_offset.saturating_sub(LOG_PAGE_SIZE);
            }
        }
        AppCommand::ScrollLogsToTop => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = s.total_entries.saturating_sub(1);
            }
        }
        AppCommand::ScrollLogsToBottom => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = 0;
            }
        }

        AppCommand::ToggleHelp => state.help_visible = !state.help_visible,

        AppCommand::Quit => {
            tracing::info!("Quit requested");
            state.should_quit = true;
        }
    }
}

/// Look up which item a row shows
fn resolve_row(state: &AppState, row: RowKey) -> Option<ItemId> {
    let id = state.view.item_id_for(row);
    if id.is_none() {
        tracing::warn!("Ignoring action on row {:?} that is no longer rendered", row);
    }
    id
}
