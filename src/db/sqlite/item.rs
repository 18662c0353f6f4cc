//! SQLite ItemRepository implementation for the today collection.

use sqlx::{Row, SqlitePool};

use crate::db::utils::current_timestamp;
use crate::db::{DbResult, Item, ItemRepository};

/// SQLx-backed repository over items that belong to no list.
pub struct SqliteItemRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl<'a> ItemRepository for SqliteItemRepository<'a> {
    async fn list(&self) -> DbResult<Vec<Item>> {
        let rows = sqlx::query("SELECT id, name FROM item WHERE list_id IS NULL ORDER BY rowid")
            .fetch_all(self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| Item {
                id: row.get("id"),
                name: row.get("name"),
            })
            .collect())
    }

    async fn create(&self, item: &Item) -> DbResult<()> {
        sqlx::query("INSERT INTO item (id, list_id, name, created_at) VALUES (?, NULL, ?, ?)")
            .bind(&item.id)
            .bind(&item.name)
            .bind(current_timestamp())
            .execute(self.pool)
            .await?;

        Ok(())
    }

    async fn create_if_empty(&self, items: &[Item]) -> DbResult<bool> {
        if items.is_empty() {
            return Ok(false);
        }

        // A single INSERT ... SELECT, so concurrent callers cannot both see
        // an empty collection. VALUES rows keep their order for rowid.
        let rows = vec!["(?, ?)"; items.len()].join(", ");
        let sql = format!(
            "INSERT INTO item (id, list_id, name, created_at) \
             SELECT seed.column1, NULL, seed.column2, ? FROM (VALUES {}) AS seed \
             WHERE NOT EXISTS (SELECT 1 FROM item WHERE list_id IS NULL)",
            rows
        );

        let mut query = sqlx::query(&sql).bind(current_timestamp());
        for item in items {
            query = query.bind(&item.id).bind(&item.name);
        }

        let result = query.execute(self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn rename(&self, id: &str, name: &str) -> DbResult<bool> {
        let result = sqlx::query("UPDATE item SET name = ? WHERE id = ? AND list_id IS NULL")
            .bind(name)
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: &str) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM item WHERE id = ? AND list_id IS NULL")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
