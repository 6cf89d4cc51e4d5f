//! Rendered tracker state: list rows, form fields, total label and controls.
//!
//! The view never reads the item store. Every operation is told exactly what
//! to show, and the renderers in `ui::screens` draw whatever is held here.

use ratatui::widgets::TableState;
use std::cell::RefCell;

use crate::state::Scrollable;
use crate::store::{Calories, Item, ItemId};

/// Stable handle for a rendered list row.
///
/// Keys are never reused within a view, so a key captured before a re-render
/// cannot silently point at a different row afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowKey(u64);

/// One rendered list row and the item it stands for
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRow {
    pub key: RowKey,
    pub item_id: ItemId,
    pub name: String,
    pub calories: Calories,
}

impl ItemRow {
    /// Element id in the `item-<id>` convention, shown in diagnostics
    pub fn element_id(&self) -> String {
        format!("item-{}", self.item_id)
    }
}

/// Raw text of the two form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub calories: String,
}

/// Which of the three form controls are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlVisibility {
    pub add: bool,
    pub update: bool,
    pub cancel: bool,
}

impl Default for ControlVisibility {
    // Everything is shown until the first populate hides Update and Cancel
    fn default() -> Self {
        Self {
            add: true,
            update: true,
            cancel: true,
        }
    }
}

/// Display state of the form, derived from control visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit,
}

/// Widget that receives typed characters and list keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Name,
    Calories,
    List,
}

impl Focus {
    pub fn next(&self) -> Self {
        match self {
            Self::Name => Self::Calories,
            Self::Calories => Self::List,
            Self::List => Self::Name,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Name => Self::List,
            Self::Calories => Self::Name,
            Self::List => Self::Calories,
        }
    }

    pub fn is_form_field(&self) -> bool {
        !matches!(self, Self::List)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TrackerView {
    rows: Vec<ItemRow>,
    next_row_key: u64,
    pub form: FormInput,
    pub total_label: String,
    pub controls: ControlVisibility,
    pub focus: Focus,
    pub table_state: RefCell<TableState>,
}

impl TrackerView {
    pub fn new() -> Self {
        Self {
            total_label: Calories::ZERO.to_string(),
            ..Default::default()
        }
    }

    /// Replace all rows with one row per item and switch to add-mode controls.
    pub fn populate_items(&mut self, items: &[Item]) {
        self.controls.update = false;
        self.controls.cancel = false;

        let rows: Vec<ItemRow> = items.iter().map(|item| self.make_row(item)).collect();
        self.rows = rows;
        let selected = (!self.rows.is_empty()).then_some(0);
        self.table_state.borrow_mut().select(selected);
    }

    pub fn get_form_input(&self) -> FormInput {
        self.form.clone()
    }

    /// Append a row for a freshly added item and clear the form.
    pub fn add_item_to_list(&mut self, item: &Item) {
        let row = self.make_row(item);
        self.rows.push(row);

        let mut table_state = self.table_state.borrow_mut();
        if table_state.selected().is_none() {
            table_state.select(Some(0));
        }
        drop(table_state);

        self.clear_form_fields();
    }

    pub fn clear_form_fields(&mut self) {
        self.form.name.clear();
        self.form.calories.clear();
    }

    pub fn update_total_calories(&mut self, total: Calories) {
        self.total_label = total.to_string();
    }

    /// Fill the form with an item's values and show the edit controls.
    pub fn populate_input_fields_for_edit(&mut self, name: &str, calories: Calories) {
        self.form.name = name.to_string();
        self.form.calories = calories.to_string();
        self.controls = ControlVisibility {
            add: false,
            update: true,
            cancel: true,
        };
    }

    /// Clear the form and go back to add-mode controls.
    pub fn reset_ui_fields(&mut self) {
        self.clear_form_fields();
        self.controls = ControlVisibility {
            add: true,
            update: false,
            cancel: false,
        };
    }

    /// Remove the row the user acted on. Unknown keys are ignored.
    pub fn remove_item_list(&mut self, row: RowKey) {
        let Some(index) = self.rows.iter().position(|r| r.key == row) else {
            return;
        };
        self.rows.remove(index);

        let mut table_state = self.table_state.borrow_mut();
        match table_state.selected() {
            _ if self.rows.is_empty() => table_state.select(None),
            Some(selected) if selected >= self.rows.len() => {
                table_state.select(Some(self.rows.len() - 1))
            }
            _ => {}
        }
    }

    pub fn rows(&self) -> &[ItemRow] {
        &self.rows
    }

    /// Item shown by a row, if the row is still rendered
    pub fn item_id_for(&self, row: RowKey) -> Option<ItemId> {
        self.rows.iter().find(|r| r.key == row).map(|r| r.item_id)
    }

    pub fn selected_row(&self) -> Option<RowKey> {
        let selected = self.table_state.borrow().selected()?;
        self.rows.get(selected).map(|r| r.key)
    }

    pub fn mode(&self) -> FormMode {
        if self.controls.update {
            FormMode::Edit
        } else {
            FormMode::Add
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Type a character into the focused form field
    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.focused_field_mut() {
            field.push(c);
        }
    }

    /// Delete the last character of the focused form field
    pub fn pop_char(&mut self) {
        if let Some(field) = self.focused_field_mut() {
            field.pop();
        }
    }

    fn focused_field_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Name => Some(&mut self.form.name),
            Focus::Calories => Some(&mut self.form.calories),
            Focus::List => None,
        }
    }

    fn make_row(&mut self, item: &Item) -> ItemRow {
        let key = RowKey(self.next_row_key);
        self.next_row_key += 1;

        ItemRow {
            key,
            item_id: item.id,
            name: item.name.clone(),
            calories: item.calories,
        }
    }
}

impl Scrollable for TrackerView {
    fn num_items(&self) -> usize {
        self.rows.len()
    }

    fn table_state(&self) -> &RefCell<TableState> {
        &self.table_state
    }
}
