//! SQLite storage for published posts.
//!
//! This module handles the database connection, schema management and the
//! post queries behind [`crate::feed::Feed`].

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod post_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let mut db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
