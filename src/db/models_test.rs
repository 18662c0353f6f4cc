//! Tests for domain models.

use crate::db::models::*;

#[test]
fn normalize_name_capitalizes_first_letter() {
    assert_eq!(TodoList::normalize_name("work"), "Work");
    assert_eq!(TodoList::normalize_name("Work"), "Work");
}

#[test]
fn normalize_name_lowercases_the_rest() {
    assert_eq!(TodoList::normalize_name("WORK"), "Work");
    assert_eq!(TodoList::normalize_name("hOME chores"), "Home chores");
}

#[test]
fn normalize_name_handles_empty_and_non_alphabetic_input() {
    assert_eq!(TodoList::normalize_name(""), "");
    assert_eq!(TodoList::normalize_name("2024 goals"), "2024 goals");
}

#[test]
fn normalize_name_handles_multibyte_first_character() {
    assert_eq!(TodoList::normalize_name("élan"), "Élan");
}

#[test]
fn new_items_get_distinct_ids() {
    let a = Item::new("Buy milk");
    let b = Item::new("Buy milk");
    assert_ne!(a.id, b.id);
    assert_eq!(a.name, b.name);
}

#[test]
fn duplicate_keeps_name_but_not_id() {
    let original = Item::new("Walk the dog");
    let copy = original.duplicate();
    assert_eq!(copy.name, original.name);
    assert_ne!(copy.id, original.id);
}

#[test]
fn normalize_name_trims_surrounding_whitespace() {
    assert_eq!(TodoList::normalize_name(" groceries"), "Groceries");
    assert_eq!(TodoList::normalize_name("\tHome chores  "), "Home chores");
    assert_eq!(TodoList::normalize_name("   "), "");
}

#[test]
fn todo_list_deserializes_without_items() {
    let list: TodoList = serde_json::from_str(r#"{"id":"abc","name":"Work"}"#).unwrap();
    assert!(list.items.is_empty());
}
