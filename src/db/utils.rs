//! Database utility functions.

use chrono::Utc;
use uuid::Uuid;

/// Generate a 32-character hex ID for database entities
pub fn generate_entity_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Get current datetime as string in SQLite format
pub fn current_timestamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
