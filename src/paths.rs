//! Path resolution for the data directory.
//!
//! Provides XDG-compliant path resolution.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "todolist";

/// Get XDG-compliant data directory.
///
/// Resolution order: `$XDG_DATA_HOME/todolist`, then
/// `$HOME/.local/share/todolist`, then `./todolist`.
pub fn get_data_dir() -> PathBuf {
    let data_home = env::var_os("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".local/share")))
        .unwrap_or_default();

    data_home.join(APP_DIR)
}

/// Get database file path (data_dir/todolist.db).
pub fn get_db_path() -> PathBuf {
    get_data_dir().join("todolist.db")
}
