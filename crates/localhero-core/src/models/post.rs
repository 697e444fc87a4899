//! Canonical post model.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Category;

/// A finalized, feed-ready post.
///
/// This is what the wizard hands to its publish collaborator and what the
/// feed stores and lists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalPost {
    /// Session-unique identifier derived from the creation time
    pub id: String,

    /// Category of the post
    #[serde(rename = "type")]
    pub post_type: Category,

    pub title: String,

    pub description: String,

    /// Primary location, or the pickup location for donations
    pub location: String,

    /// Human-formatted event time, empty when the post has none
    pub display_time: String,

    /// Timestamp when the post was created (UTC)
    pub created_at: Timestamp,

    /// `[lng, lat]` when a point was picked on the map
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<[f64; 2]>,
}
