//! Collection wrapper types for displaying groups of posts.

use std::{fmt, ops::Index};

use crate::models::CanonicalPost;

/// Newtype wrapper for displaying a feed listing.
///
/// Handles empty collections gracefully.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use localhero_core::{
///     display::Posts,
///     models::{CanonicalPost, Category},
/// };
///
/// let post = CanonicalPost {
///     id: "1".to_string(),
///     post_type: Category::Issues,
///     title: "Pothole on 3rd & Pine".to_string(),
///     description: "Large pothole causing traffic.".to_string(),
///     location: "3rd & Pine".to_string(),
///     display_time: String::new(),
///     created_at: Timestamp::now(),
///     coordinates: Some([-73.99, 40.74]),
/// };
///
/// let output = Posts(vec![post]).to_string();
/// assert!(output.contains("Pothole on 3rd & Pine"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Posts(pub Vec<CanonicalPost>);

impl Posts {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&CanonicalPost> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CanonicalPost> {
        self.0.iter()
    }
}

impl Index<usize> for Posts {
    type Output = CanonicalPost;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Posts {
    type Item = CanonicalPost;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Posts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No posts found.");
        }

        for (i, post) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{post}")?;
        }
        Ok(())
    }
}
