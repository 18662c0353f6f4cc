//! Build script for compile-time embedded resources.
//!
//! Migrations (`sqlx::migrate!`) and page templates (askama) are read at
//! compile time, so edits to either must trigger a rebuild.

fn main() {
    println!("cargo:rerun-if-changed=data/sql/sqlite");
    println!("cargo:rerun-if-changed=templates");
}
