//! Error types for the wizard and the feed store.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::{Category, Field, WizardStep};
use crate::validation::Requirement;

/// Comprehensive error type for all wizard and feed operations.
#[derive(Error, Debug)]
pub enum WizardError {
    /// The publish transformer was handed a draft that fails details
    /// validation
    #[error("Draft is not ready to publish, unmet: {}", join_requirements(.unmet))]
    InvalidDraft { unmet: Vec<Requirement> },
    /// An action was attempted on a step where it is not allowed
    #[error("Cannot {action} during the {step} step")]
    InvalidTransition {
        action: &'static str,
        step: WizardStep,
    },
    /// A field edit targeted a field the active category does not carry
    #[error("Field '{field}' does not apply to {}", .category.map_or("a draft without a category", |c| c.label()))]
    FieldNotApplicable {
        field: Field,
        category: Option<Category>,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

fn join_requirements(unmet: &[Requirement]) -> String {
    unmet
        .iter()
        .map(|r| r.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> WizardError {
        WizardError::Database {
            message: self.message,
            source,
        }
    }
}

impl WizardError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Error for an action the current step does not accept.
    pub fn invalid_transition(action: &'static str, step: WizardStep) -> Self {
        Self::InvalidTransition { action, step }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| WizardError::database(message).with_source(e))
    }
}

/// Result type alias for wizard and feed operations
pub type Result<T> = std::result::Result<T, WizardError>;
