//! Tests for database error types.

use crate::db::{DbError, DbResult};

#[test]
fn not_found_error_displays_correctly() {
    let err = DbError::NotFound {
        entity_type: "TodoList".to_string(),
        id: "Groceries".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Entity not found: TodoList with id 'Groceries'"
    );
}

#[test]
fn database_error_displays_correctly() {
    let err = DbError::Database {
        message: "disk I/O error".to_string(),
    };
    assert_eq!(err.to_string(), "Database error: disk I/O error");
}

#[test]
fn constraint_error_displays_correctly() {
    let err = DbError::Constraint {
        message: "UNIQUE constraint failed: list.name".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Constraint violation: UNIQUE constraint failed: list.name"
    );
}

#[test]
fn sqlx_row_not_found_maps_to_database_error() {
    let err: DbError = sqlx::Error::RowNotFound.into();
    assert!(matches!(err, DbError::Database { .. }));
}

#[test]
fn db_result_propagates_errors_with_question_mark() {
    fn inner() -> DbResult<()> {
        Err(DbError::Connection {
            message: "unable to open database file".to_string(),
        })
    }

    fn outer() -> DbResult<u32> {
        inner()?;
        Ok(1)
    }

    let err = outer().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Connection error: unable to open database file"
    );
}
