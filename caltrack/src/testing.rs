use crate::app_core::AppCore;
use crate::events::AppCommand;
use crate::input::{Key, KeyEvent};
use crate::state::AppState;
use crate::store::{Calories, ItemStore};
use crate::ui::screens::Screen;
use crate::ui::view::{Focus, FormMode};

/// Key-driven harness around `AppCore` for integration tests
pub struct TestApp {
    core: AppCore,
}

impl TestApp {
    /// Create a new test app with an empty store
    pub fn new() -> Self {
        Self {
            core: AppCore::new(),
        }
    }

    /// Send a single key event
    pub fn send_key(&mut self, key: Key) -> Option<AppCommand> {
        self.core.handle_key(KeyEvent::new(key))
    }

    /// Send a key event with modifiers
    pub fn send_key_event(&mut self, event: KeyEvent) -> Option<AppCommand> {
        self.core.handle_key(event)
    }

    /// Send multiple keys in sequence
    pub fn send_keys(&mut self, keys: &[Key]) {
        for key in keys {
            self.send_key(*key);
        }
    }

    /// Type text into whatever has focus
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send_key(Key::Char(c));
        }
    }

    /// Move focus with Tab until `target` is focused
    pub fn focus(&mut self, target: Focus) {
        // Three focus targets, so at most two presses are ever needed
        for _ in 0..3 {
            if self.state().view.focus == target {
                return;
            }
            self.send_key(Key::Tab);
        }
    }

    /// Fill the form and press Enter, the way a user adds an item
    pub fn add_item(&mut self, name: &str, calories: &str) {
        self.focus(Focus::Name);
        self.type_text(name);
        self.focus(Focus::Calories);
        self.type_text(calories);
        self.send_key(Key::Enter);
    }

    /// Move the list selection to `index` and focus the list
    pub fn select_row(&mut self, index: usize) {
        self.focus(Focus::List);
        let current = self.state().view.table_state.borrow().selected().unwrap_or(0);
        let steps = index.saturating_sub(current);
        for _ in 0..steps {
            self.send_key(Key::Char('j'));
        }
        for _ in index..current {
            self.send_key(Key::Char('k'));
        }
    }

    /// Get read-only access to current state
    pub fn state(&self) -> &AppState {
        self.core.state()
    }

    pub fn store(&self) -> &ItemStore {
        self.core.store()
    }

    pub fn total(&self) -> Calories {
        self.core.store().get_total_calories()
    }

    /// Names of the rendered rows, top to bottom
    pub fn row_names(&self) -> Vec<String> {
        self.state()
            .view
            .rows()
            .iter()
            .map(|row| row.name.clone())
            .collect()
    }

    /// Assert that the app is on a specific screen type
    ///
    /// Uses discriminant comparison to check screen type without
    /// requiring full equality of state.
    pub fn assert_screen_type(&self, expected_discriminant: std::mem::Discriminant<Screen>) {
        let current = self.state().current_screen();
        assert_eq!(
            std::mem::discriminant(current),
            expected_discriminant,
            "Expected different screen. Current: {:?}",
            current
        );
    }

    pub fn assert_mode(&self, expected: FormMode) {
        assert_eq!(
            self.state().view.mode(),
            expected,
            "Unexpected form mode, controls: {:?}",
            self.state().view.controls
        );
    }

    /// Assert that the app should quit
    pub fn assert_should_quit(&self) {
        assert!(
            self.core.should_quit(),
            "App should be marked for quit but is not"
        );
    }

    /// Assert that the app should NOT quit
    pub fn assert_not_quit(&self) {
        assert!(
            !self.core.should_quit(),
            "App should NOT be marked for quit but is"
        );
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
