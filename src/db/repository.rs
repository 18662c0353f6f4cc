//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing business logic.
//!
//! Methods return `Send` futures so handlers generic over [`Database`]
//! can be mounted on a multi-threaded runtime.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{Item, TodoList},
};

/// Repository for the today collection: items that belong to no list.
pub trait ItemRepository {
    /// Get all today items in insertion order.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Item>>> + Send;

    /// Insert a single item.
    fn create(&self, item: &Item) -> impl Future<Output = DbResult<()>> + Send;

    /// Insert several items, preserving their order, but only while the
    /// today collection is empty. The check and the insert are one atomic
    /// write. Returns whether anything was inserted.
    fn create_if_empty(&self, items: &[Item]) -> impl Future<Output = DbResult<bool>> + Send;

    /// Rename an item. Returns whether a row matched.
    fn rename(&self, id: &str, name: &str) -> impl Future<Output = DbResult<bool>> + Send;

    /// Delete an item. Returns whether a row matched.
    fn delete(&self, id: &str) -> impl Future<Output = DbResult<bool>> + Send;
}

/// Repository for named custom lists and the item copies they own.
pub trait ListRepository {
    /// Look up a list by exact name, including its items.
    fn find_by_name(&self, name: &str)
    -> impl Future<Output = DbResult<Option<TodoList>>> + Send;

    /// Atomically return the list with this name, creating it with copies
    /// of `seed` if it does not exist yet.
    fn find_or_create(
        &self,
        name: &str,
        seed: &[Item],
    ) -> impl Future<Output = DbResult<TodoList>> + Send;

    /// Append an item to the end of a list.
    fn push_item(&self, list_id: &str, item: &Item)
    -> impl Future<Output = DbResult<()>> + Send;

    /// Rename the item with `item_id` inside the list named `list_name`.
    /// Returns whether a row matched.
    fn rename_item(
        &self,
        list_name: &str,
        item_id: &str,
        name: &str,
    ) -> impl Future<Output = DbResult<bool>> + Send;

    /// Remove the item with `item_id` from the list named `list_name`.
    /// Returns whether a row matched.
    fn pull_item(
        &self,
        list_name: &str,
        item_id: &str,
    ) -> impl Future<Output = DbResult<bool>> + Send;
}

/// Combined database interface.
pub trait Database: Send + Sync + 'static {
    type Items<'a>: ItemRepository + Send + Sync
    where
        Self: 'a;
    type Lists<'a>: ListRepository + Send + Sync
    where
        Self: 'a;

    /// Run pending migrations.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the today item repository.
    fn items(&self) -> Self::Items<'_>;

    /// Get the custom list repository.
    fn lists(&self) -> Self::Lists<'_>;
}
