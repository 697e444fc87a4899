//! Display implementations for domain models.
//!
//! This module contains the Display trait implementations for the core domain
//! models, separated from the model definitions. Posts render as markdown for
//! rich terminal display.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{CanonicalPost, Category, Condition, Coordinates, Field, WizardStep};

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lng, self.lat)
    }
}

impl fmt::Display for CanonicalPost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.title)?;
        writeln!(f)?;

        writeln!(f, "- Type: {}", self.post_type)?;
        writeln!(f, "- ID: {}", self.id)?;
        if !self.location.is_empty() {
            writeln!(f, "- Location: {}", self.location)?;
        }
        if !self.display_time.is_empty() {
            writeln!(f, "- When: {}", self.display_time)?;
        }
        if let Some([lng, lat]) = self.coordinates {
            writeln!(f, "- Map: {lng}, {lat}")?;
        }
        writeln!(f, "- Posted: {}", LocalDateTime(&self.created_at))?;

        writeln!(f)?;
        writeln!(f, "{}", self.description)?;
        Ok(())
    }
}
