//! Parameter structures for feed operations.
//!
//! These structures are shared by every interface (currently the CLI) and
//! carry no framework-specific derives. Interface layers define their own
//! argument types and convert into these.
//!
//! ```text
//! CLI Args (clap) → Core Params → Feed
//! ```

use crate::models::Category;

/// Parameters for listing the feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPosts {
    /// Only posts of this category; all categories when `None`
    pub category: Option<Category>,
    /// Case-insensitive text matched against title, description and location
    pub search: Option<String>,
}

/// Identifies a single post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Id {
    pub id: String,
}
