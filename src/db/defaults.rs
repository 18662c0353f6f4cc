//! Placeholder content shown before the user has added anything.

use tracing::info;

use crate::db::{Database, DbResult, Item, ItemRepository};

/// Names of the placeholder items, in display order.
pub const DEFAULT_ITEM_NAMES: [&str; 3] = [
    "Welcome to your todolist!",
    "Hit the + button to add a new item.",
    "<-- Hit this to delete an item.",
];

/// Fresh placeholder items with new ids.
pub fn default_items() -> Vec<Item> {
    DEFAULT_ITEM_NAMES.iter().copied().map(Item::new).collect()
}

/// Make sure the today collection is not empty and return seed content.
///
/// When the today collection is empty the placeholders are inserted into it
/// and returned. Otherwise nothing is written and a fresh set of
/// placeholders is returned, for use as the initial content of a new list.
pub async fn ensure_defaults<D: Database>(db: &D) -> DbResult<Vec<Item>> {
    let items = db.items();
    let defaults = default_items();

    if items.create_if_empty(&defaults).await? {
        info!(count = defaults.len(), "Seeded default items");
    }

    Ok(defaults)
}
