use crate::events::AppCommand;
use crate::input::{Key, KeyEvent};
use crate::state::AppState;
use crate::ui::screens::Screen;
use crate::ui::view::TrackerView;

/// Map user input (KeyEvent) to AppCommand based on current UI state
/// Returns None if the key should be ignored
pub fn handle_key_input(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    let key = event.key;

    // Priority 0: Ctrl+C always quits, even while typing
    if event.modifiers.ctrl && key == Key::Char('c') {
        return Some(AppCommand::Quit);
    }

    // Other control chords have no bindings
    if event.modifiers.ctrl {
        return None;
    }

    // Priority 1: Help popup swallows everything else
    if state.help_visible {
        return match key {
            Key::Char('?') | Key::Esc => Some(AppCommand::ToggleHelp),
            Key::Char('q') => Some(AppCommand::Quit),
            _ => None,
        };
    }

    match state.current_screen() {
        Screen::Tracker => handle_tracker_keys(key, &state.view),
        Screen::Logs(_) => handle_logs_keys(key),
    }
}

fn handle_tracker_keys(key: Key, view: &TrackerView) -> Option<AppCommand> {
    match key {
        Key::Tab => return Some(AppCommand::FocusNextField),
        Key::BackTab => return Some(AppCommand::FocusPreviousField),
        // Cancel is only reachable while its control is shown
        Key::Esc if view.controls.cancel => return Some(AppCommand::CancelEdit),
        _ => {}
    }

    if view.focus.is_form_field() {
        return handle_form_keys(key, view);
    }

    match key {
        Key::Up | Key::Char('k') => Some(AppCommand::SelectPrevious),
        Key::Down | Key::Char('j') => Some(AppCommand::SelectNext),
        Key::Char('e') => view
            .selected_row()
            .map(|row| AppCommand::EditItem { row }),
        Key::Char('d') | Key::Delete | Key::Backspace => view
            .selected_row()
            .map(|row| AppCommand::DeleteItem { row }),
        Key::Char('i') => Some(AppCommand::FocusNextField),
        Key::Char('L') => Some(AppCommand::NavigateToLogs),
        Key::Char('?') => Some(AppCommand::ToggleHelp),
        Key::Char('q') => Some(AppCommand::Quit),
        _ => None,
    }
}

fn handle_form_keys(key: Key, view: &TrackerView) -> Option<AppCommand> {
    match key {
        // The Update control has no action bound to it
        Key::Enter if view.controls.add => Some(AppCommand::AddItem),
        Key::Enter => None,
        Key::Backspace => Some(AppCommand::DeleteFormChar),
        Key::Char(c) => Some(AppCommand::AppendFormChar(c)),
        Key::Up => Some(AppCommand::FocusPreviousField),
        Key::Down => Some(AppCommand::FocusNextField),
        _ => None,
    }
}

fn handle_logs_keys(key: Key) -> Option<AppCommand> {
    match key {
        Key::Up | Key::Char('k') => Some(AppCommand::ScrollLogsUp),
        Key::Down | Key::Char('j') => Some(AppCommand::ScrollLogsDown),
        Key::PageUp => Some(AppCommand::ScrollLogsPageUp),
        Key::PageDown => Some(AppCommand::ScrollLogsPageDown),
        Key::Char('g') => Some(AppCommand::ScrollLogsToTop),
        Key::Char('G') => Some(AppCommand::ScrollLogsToBottom),
        Key::Esc | Key::Left | Key::Char('h') => Some(AppCommand::NavigateBack),
        Key::Char('?') => Some(AppCommand::ToggleHelp),
        Key::Char('q') => Some(AppCommand::Quit),
        _ => None,
    }
}
