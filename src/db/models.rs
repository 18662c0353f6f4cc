//! Domain models for the to-do database.
//!
//! These models are storage-agnostic and represent the core entities
//! used throughout the application.

use serde::{Deserialize, Serialize};

use super::utils::generate_entity_id;

/// Hex ID type used for all entities.
pub type Id = String;

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: Id,
    pub name: String,
}

impl Item {
    /// Create an item with a freshly generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: generate_entity_id(),
            name: name.into(),
        }
    }

    /// Copy this item under a new id.
    ///
    /// List items are independent copies, so seeding a list never shares
    /// identity with the today collection.
    pub fn duplicate(&self) -> Self {
        Self::new(self.name.clone())
    }
}

/// A named custom list holding its own copies of items, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl TodoList {
    /// Normalize a requested list name into its lookup key.
    ///
    /// Surrounding whitespace is dropped, then the first character is
    /// upper-cased and the rest lower-cased, so `groceries`, ` Groceries`
    /// and `GROCERIES` all name the same list.
    pub fn normalize_name(raw: &str) -> String {
        let mut chars = raw.trim().chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        }
    }
}
