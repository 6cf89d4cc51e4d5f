mod calories;

pub use calories::Calories;

use std::fmt;

/// Identifier of a tracked item. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(u64);

impl ItemId {
    pub const FIRST: ItemId = ItemId(1);

    /// Wrap a raw identifier; zero is not a valid id.
    pub fn new(value: u64) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    pub fn get(&self) -> u64 {
        self.0
    }

    fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single food entry
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub calories: Calories,
}

/// In-memory item list with a running calorie total and the item being edited.
///
/// The total is maintained incrementally: additions grow it, deletions leave
/// it untouched.
#[derive(Debug, Clone)]
pub struct ItemStore {
    items: Vec<Item>,
    total_calories: Calories,
    current_item: Option<Item>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            total_calories: Calories::ZERO,
            current_item: None,
        }
    }

    /// All items in insertion order
    pub fn get_all_items(&self) -> &[Item] {
        &self.items
    }

    /// Look up an item and mark it as the one being edited.
    ///
    /// A miss clears the current item.
    pub fn get_item_details(&mut self, id: ItemId) -> Option<&Item> {
        self.current_item = self.items.iter().find(|item| item.id == id).cloned();
        tracing::debug!(
            "Current item set to {:?}",
            self.current_item.as_ref().map(|item| item.id)
        );
        self.current_item.as_ref()
    }

    /// Append a new item and add its coerced calories to the total.
    pub fn add_item(&mut self, name: impl Into<String>, calories: &str) -> Item {
        let id = self
            .items
            .last()
            .map(|item| item.id.next())
            .unwrap_or(ItemId::FIRST);

        let item = Item {
            id,
            name: name.into(),
            calories: Calories::parse(calories),
        };

        self.total_calories += item.calories;
        self.items.push(item.clone());

        tracing::debug!(
            "Added item {} ({} calories), total now {}",
            item.id,
            item.calories,
            self.total_calories
        );

        item
    }

    pub fn get_total_calories(&self) -> Calories {
        self.total_calories
    }

    pub fn current_item(&self) -> Option<&Item> {
        self.current_item.as_ref()
    }

    pub fn reset_edit_item(&mut self) {
        self.current_item = None;
    }

    /// Remove the item with `id`, if present. The running total is not adjusted.
    pub fn delete_item(&mut self, id: ItemId) {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            tracing::debug!("Delete of item {} was a no-op", id);
        }
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}
