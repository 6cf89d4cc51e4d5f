use crate::commands::{executor, handlers};
use crate::events::AppCommand;
use crate::input::KeyEvent;
use crate::state::AppState;
use crate::store::ItemStore;

/// Testable application core without terminal dependencies
///
/// Owns the item store and the UI state and routes input between them. The
/// terminal loop in `App` and the `TestApp` harness both drive this type, so
/// everything short of drawing and reading the keyboard is exercised in tests.
pub struct AppCore {
    store: ItemStore,
    ui_state: AppState,
}

impl AppCore {
    /// Create a core with an empty store and populate the view from it
    pub fn new() -> Self {
        Self::with_store(ItemStore::new())
    }

    /// Create a core around an existing store
    pub fn with_store(store: ItemStore) -> Self {
        let mut ui_state = AppState::new();
        executor::load_items(&store, &mut ui_state);
        Self { store, ui_state }
    }

    /// Handle keyboard input and execute the resulting command
    ///
    /// Returns the command that was executed, if the key mapped to one.
    pub fn handle_key(&mut self, event: KeyEvent) -> Option<AppCommand> {
        let command = handlers::handle_key_input(event, &self.ui_state)?;
        self.execute(command.clone());
        Some(command)
    }

    /// Execute a command directly, bypassing key mapping
    pub fn execute(&mut self, command: AppCommand) {
        executor::execute_command(command, &mut self.store, &mut self.ui_state);
    }

    /// Get read-only access to the current UI state (for rendering or assertions)
    pub fn state(&self) -> &AppState {
        &self.ui_state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.ui_state
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.ui_state.should_quit
    }
}

impl Default for AppCore {
    fn default() -> Self {
        Self::new()
    }
}
