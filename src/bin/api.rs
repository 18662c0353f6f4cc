//! todolist server binary.
//!
//! This binary creates the concrete database implementation and passes it
//! to the server. The API layer remains agnostic of the storage backend.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use miette::Diagnostic;
use thiserror::Error;
use todolist::api::{self, ApiError, Config};
use todolist::db::{Database, DbError, SqliteDatabase};
use todolist::paths::get_db_path;
use tracing::info;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Database error: {0}")]
    #[diagnostic(code(todolist::binary::database))]
    Database(#[from] DbError),

    #[error("Failed to create data directory: {0}")]
    #[diagnostic(code(todolist::binary::io))]
    Io(#[from] std::io::Error),

    #[error("Server error: {0}")]
    #[diagnostic(code(todolist::binary::api))]
    Api(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "todolist")]
#[command(author, version, about = "Multi-list to-do server", long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, env = "TODOLIST_HOST", default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "3000")]
    port: u16,

    /// Database file path (defaults to XDG data directory: ~/.local/share/todolist/todolist.db)
    #[arg(long, env = "TODOLIST_DB")]
    db: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    let cli = Cli::parse();
    api::init_tracing();

    let db_path = cli.db.unwrap_or_else(get_db_path);
    info!("Opening database at {:?}", db_path);

    // Ensure parent directory exists
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let db = SqliteDatabase::open(&db_path).await?;

    // Run migrations before starting the server
    db.migrate().await?;
    info!("Database migrations complete");

    api::run(
        Config {
            host: cli.host,
            port: cli.port,
        },
        db,
    )
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides() {
        let cli = Cli::try_parse_from([
            "todolist",
            "--host",
            "127.0.0.1",
            "-p",
            "8080",
            "--db",
            "/tmp/todo.db",
        ])
        .unwrap();
        assert_eq!(cli.host.to_string(), "127.0.0.1");
        assert_eq!(cli.port, 8080);
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/todo.db")));
    }

    #[test]
    fn cli_rejects_invalid_port() {
        assert!(Cli::try_parse_from(["todolist", "--port", "99999"]).is_err());
    }
}
