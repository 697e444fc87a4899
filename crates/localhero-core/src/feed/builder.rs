//! Builder for opening the feed store.

use std::path::{Path, PathBuf};

use log::debug;

use super::Feed;
use crate::error::{Result, WizardError};

const DATA_PREFIX: &str = "localhero";
const DATABASE_FILE: &str = "feed.db";

/// Configures where the feed database lives and opens it.
#[derive(Debug, Clone, Default)]
pub struct FeedBuilder {
    database_path: Option<PathBuf>,
}

impl FeedBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `path` as the database file; `None` keeps the default location,
    /// `$XDG_DATA_HOME/localhero/feed.db`.
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        self.database_path = path.map(|p| p.as_ref().to_path_buf()).or(self.database_path);
        self
    }

    /// Opens the feed, creating the database file, its directory and the
    /// schema when missing.
    ///
    /// # Errors
    ///
    /// - `WizardError::XdgDirectory` if no default location can be found
    /// - `WizardError::FileSystem` if the path is a directory or its parent
    ///   cannot be created
    /// - `WizardError::Database` if the schema cannot be applied
    pub async fn build(self) -> Result<Feed> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => default_database_path()?,
        };
        prepare_location(&db_path)?;

        let feed = Feed::new(db_path);
        feed.with_database(|_| Ok(())).await?;
        debug!("Opened feed at {}", feed.database_path().display());
        Ok(feed)
    }
}

fn default_database_path() -> Result<PathBuf> {
    xdg::BaseDirectories::with_prefix(DATA_PREFIX)
        .place_data_file(DATABASE_FILE)
        .map_err(|e| WizardError::XdgDirectory(e.to_string()))
}

/// Refuses directory paths and creates the parent directory.
fn prepare_location(db_path: &Path) -> Result<()> {
    if db_path.is_dir() {
        return Err(WizardError::FileSystem {
            path: db_path.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "database path is a directory",
            ),
        });
    }

    match db_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)
            .map_err(|source| WizardError::FileSystem {
                path: parent.to_path_buf(),
                source,
            }),
        _ => Ok(()),
    }
}
