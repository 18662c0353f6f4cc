//! SQLite ListRepository implementation.

use sqlx::{Row, SqliteConnection, SqlitePool};
use tracing::debug;

use crate::db::utils::{current_timestamp, generate_entity_id};
use crate::db::{DbError, DbResult, Item, ListRepository, TodoList};

/// SQLx-backed custom list repository.
pub struct SqliteListRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

/// Load a list and its items by name on an existing connection.
async fn fetch_by_name(conn: &mut SqliteConnection, name: &str) -> DbResult<Option<TodoList>> {
    let row = sqlx::query("SELECT id, name FROM list WHERE name = ?")
        .bind(name)
        .fetch_optional(&mut *conn)
        .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let id: String = row.get("id");
    let items = sqlx::query("SELECT id, name FROM item WHERE list_id = ? ORDER BY rowid")
        .bind(&id)
        .fetch_all(&mut *conn)
        .await?
        .into_iter()
        .map(|row| Item {
            id: row.get("id"),
            name: row.get("name"),
        })
        .collect();

    Ok(Some(TodoList {
        id,
        name: row.get("name"),
        items,
    }))
}

impl<'a> ListRepository for SqliteListRepository<'a> {
    async fn find_by_name(&self, name: &str) -> DbResult<Option<TodoList>> {
        let mut conn = self.pool.acquire().await?;
        fetch_by_name(&mut *conn, name).await
    }

    async fn find_or_create(&self, name: &str, seed: &[Item]) -> DbResult<TodoList> {
        let mut tx = self.pool.begin().await?;
        let created_at = current_timestamp();
        let list_id = generate_entity_id();

        // The unique index on name makes this an atomic insert-if-absent.
        let inserted = sqlx::query(
            "INSERT INTO list (id, name, created_at) VALUES (?, ?, ?)
             ON CONFLICT(name) DO NOTHING",
        )
        .bind(&list_id)
        .bind(name)
        .bind(&created_at)
        .execute(&mut *tx)
        .await?
        .rows_affected()
            > 0;

        if inserted {
            for item in seed.iter().map(Item::duplicate) {
                sqlx::query("INSERT INTO item (id, list_id, name, created_at) VALUES (?, ?, ?, ?)")
                    .bind(&item.id)
                    .bind(&list_id)
                    .bind(&item.name)
                    .bind(&created_at)
                    .execute(&mut *tx)
                    .await?;
            }
            debug!(list = name, seeded = seed.len(), "Created list");
        }

        let list = fetch_by_name(&mut *tx, name)
            .await?
            .ok_or_else(|| DbError::NotFound {
                entity_type: "TodoList".to_string(),
                id: name.to_string(),
            })?;

        tx.commit().await?;
        Ok(list)
    }

    async fn push_item(&self, list_id: &str, item: &Item) -> DbResult<()> {
        sqlx::query("INSERT INTO item (id, list_id, name, created_at) VALUES (?, ?, ?, ?)")
            .bind(&item.id)
            .bind(list_id)
            .bind(&item.name)
            .bind(current_timestamp())
            .execute(self.pool)
            .await
            .map_err(|e| match DbError::from(e) {
                DbError::Constraint { .. } => DbError::NotFound {
                    entity_type: "TodoList".to_string(),
                    id: list_id.to_string(),
                },
                other => other,
            })?;

        Ok(())
    }

    async fn rename_item(&self, list_name: &str, item_id: &str, name: &str) -> DbResult<bool> {
        let result = sqlx::query(
            "UPDATE item SET name = ?
             WHERE id = ? AND list_id = (SELECT id FROM list WHERE name = ?)",
        )
        .bind(name)
        .bind(item_id)
        .bind(list_name)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn pull_item(&self, list_name: &str, item_id: &str) -> DbResult<bool> {
        let result = sqlx::query(
            "DELETE FROM item
             WHERE id = ? AND list_id = (SELECT id FROM list WHERE name = ?)",
        )
        .bind(item_id)
        .bind(list_name)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
