//! Async feed API over the post database.
//!
//! The [`Feed`] is the collaborator that receives published posts and serves
//! the feed listing. Each operation opens the database on a blocking task so
//! callers on an async runtime are never blocked by SQLite.
//!
//! # Examples
//!
//! ```rust,no_run
//! use localhero_core::{params::ListPosts, FeedBuilder, Category};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let feed = FeedBuilder::new()
//!     .with_database_path(Some("feed.db"))
//!     .build()
//!     .await?;
//!
//! let events = feed
//!     .list_posts(&ListPosts {
//!         category: Some(Category::Events),
//!         search: Some("park".to_string()),
//!     })
//!     .await?;
//! println!("{events}");
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    db::Database,
    error::{Result, WizardError},
};

pub mod builder;
pub mod post_ops;

pub use builder::FeedBuilder;

/// Handle to the feed database.
pub struct Feed {
    db_path: PathBuf,
}

impl Feed {
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the backing database file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Opens the database on a blocking task and runs `op` against it.
    pub(crate) async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(|e| WizardError::Configuration {
            message: format!("Feed task failed: {e}"),
        })?
    }
}
