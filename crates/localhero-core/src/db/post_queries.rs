//! Post insert and feed queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{CanonicalPost, Category},
    params::ListPosts,
};

const INSERT_POST_SQL: &str = "INSERT INTO posts (id, post_type, title, description, location, display_time, created_at, created_ms, lng, lat, title_folded, description_folded, location_folded) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)";
const POST_COLUMNS: &str =
    "id, post_type, title, description, location, display_time, created_at, lng, lat";
const SEARCH_CONDITION: &str = r"(title_folded LIKE ? ESCAPE '\' OR description_folded LIKE ? ESCAPE '\' OR location_folded LIKE ? ESCAPE '\')";

impl super::Database {
    /// Stores a published post.
    ///
    /// # Errors
    ///
    /// Fails when a post with the same ID is already stored.
    pub fn insert_post(&mut self, post: &CanonicalPost) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let (lng, lat) = match post.coordinates {
            Some([lng, lat]) => (Some(lng), Some(lat)),
            None => (None, None),
        };

        tx.execute(
            INSERT_POST_SQL,
            params![
                post.id,
                post.post_type.label(),
                post.title,
                post.description,
                post.location,
                post.display_time,
                post.created_at.to_string(),
                post.created_at.as_millisecond(),
                lng,
                lat,
                fold(&post.title),
                fold(&post.description),
                fold(&post.location),
            ],
        )
        .db_context("Failed to insert post")?;

        tx.commit().db_context("Failed to commit transaction")
    }

    /// Retrieves a post by its ID.
    pub fn get_post(&self, id: &str) -> Result<Option<CanonicalPost>> {
        let query = format!("SELECT {POST_COLUMNS} FROM posts WHERE id = ?1");
        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let post = stmt
            .query_row(params![id], post_from_row)
            .optional()
            .db_context("Failed to query post")?;

        Ok(post)
    }

    /// Lists posts newest first, filtered by category and search text.
    pub fn list_posts(&self, params: &ListPosts) -> Result<Vec<CanonicalPost>> {
        let mut query = format!("SELECT {POST_COLUMNS} FROM posts");

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(category) = params.category {
            conditions.push("post_type = ?");
            params_vec.push(Box::new(category.label()));
        }

        if let Some(search) = params.search.as_deref().filter(|s| !s.is_empty()) {
            let pattern = format!("%{}%", escape_like(&fold(search)));
            conditions.push(SEARCH_CONDITION);
            for _ in 0..3 {
                params_vec.push(Box::new(pattern.clone()));
            }
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(" ORDER BY created_ms DESC, id DESC");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let posts = stmt
            .query_map(&params_refs[..], post_from_row)
            .db_context("Failed to query posts")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to read posts")?;

        Ok(posts)
    }
}

fn post_from_row(row: &Row<'_>) -> rusqlite::Result<CanonicalPost> {
    let type_str: String = row.get(1)?;
    let post_type = type_str.parse::<Category>().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            Type::Text,
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Invalid post type: {type_str}"),
            )),
        )
    })?;

    let lng: Option<f64> = row.get(7)?;
    let lat: Option<f64> = row.get(8)?;

    Ok(CanonicalPost {
        id: row.get(0)?,
        post_type,
        title: row.get(2)?,
        description: row.get(3)?,
        location: row.get(4)?,
        display_time: row.get(5)?,
        created_at: row.get::<_, String>(6)?.parse::<Timestamp>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e))
        })?,
        coordinates: lng.zip(lat).map(|(lng, lat)| [lng, lat]),
    })
}

/// Case folding shared by stored text and search terms.
pub(super) fn fold(text: &str) -> String {
    text.to_lowercase()
}

/// Escapes LIKE wildcards so search text matches literally.
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
