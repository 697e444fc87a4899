//! Database schema initialization and upgrades.

use log::info;
use rusqlite::params;

use super::post_queries::fold;
use crate::error::{DatabaseResultExt, Result};

const FOLDED_COLUMNS: [&str; 3] = ["title_folded", "description_folded", "location_folded"];

impl super::Database {
    /// Initializes the database schema using the embedded SQL file, then
    /// upgrades tables created before the search columns existed.
    pub(super) fn initialize_schema(&mut self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;
        self.add_search_columns()
    }

    fn add_search_columns(&mut self) -> Result<()> {
        let present: i64 = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('posts') WHERE name = ?1",
                params![FOLDED_COLUMNS[0]],
                |row| row.get(0),
            )
            .db_context("Failed to inspect posts table")?;
        if present > 0 {
            return Ok(());
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        for column in FOLDED_COLUMNS {
            tx.execute(
                &format!("ALTER TABLE posts ADD COLUMN {column} TEXT NOT NULL DEFAULT ''"),
                [],
            )
            .db_context("Failed to add search column")?;
        }

        let rows: Vec<(String, String, String, String)> = {
            let mut stmt = tx
                .prepare("SELECT id, title, description, location FROM posts")
                .db_context("Failed to prepare query")?;
            let rows = stmt
                .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)))
                .db_context("Failed to query posts")?
                .collect::<std::result::Result<Vec<_>, _>>()
                .db_context("Failed to read posts")?;
            rows
        };

        for (id, title, description, location) in &rows {
            tx.execute(
                "UPDATE posts SET title_folded = ?2, description_folded = ?3, location_folded = ?4 WHERE id = ?1",
                params![id, fold(title), fold(description), fold(location)],
            )
            .db_context("Failed to fill search columns")?;
        }

        tx.commit().db_context("Failed to commit transaction")?;
        info!("Added search columns for {} existing posts", rows.len());
        Ok(())
    }
}
