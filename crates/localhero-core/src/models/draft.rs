//! The in-progress post and its category-specific details.
//!
//! A [`Draft`] carries the fields every post shares (title and description)
//! and at most one [`CategoryDetails`] variant. Because the variant owns the
//! category-specific fields, switching category drops the previous
//! category's values instead of leaving them around unused.

use std::path::{Path, PathBuf};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Category, Condition};

/// A point picked on the map.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lng: f64,
    pub lat: f64,
}

impl Coordinates {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// `[lng, lat]` pair as used by map layers.
    pub fn to_pair(self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

/// Reference to a locally selected image file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileRef {
    path: PathBuf,
}

impl FileRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name component, falling back to the whole path.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .unwrap_or(self.path.as_os_str())
            .to_string_lossy()
            .into_owned()
    }
}

/// Details of an event post.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventDetails {
    pub location: String,
    pub coordinates: Option<Coordinates>,
    pub date_time: Option<Timestamp>,
    pub rsvp_limit: Option<i64>,
}

/// Details of an issue report.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueDetails {
    pub location: String,
    pub coordinates: Option<Coordinates>,
    /// Urgency on a 1 to 5 scale, 3 until the reporter moves it
    pub urgency: Option<i32>,
}

impl Default for IssueDetails {
    fn default() -> Self {
        Self {
            location: String::new(),
            coordinates: None,
            urgency: Some(3),
        }
    }
}

/// Details of a job offer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JobDetails {
    pub location: String,
    pub coordinates: Option<Coordinates>,
    pub company: String,
    pub pay: String,
}

/// Details of a good deed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GoodDeedDetails {
    pub location: String,
    pub coordinates: Option<Coordinates>,
    pub image: Option<FileRef>,
}

/// Details of a donation offer.
#[derive(Debug, Clone, PartialEq)]
pub struct DonationDetails {
    pub item_name: String,
    pub condition: Option<Condition>,
    pub pickup_location: String,
    pub contact: String,
}

impl Default for DonationDetails {
    fn default() -> Self {
        Self {
            item_name: String::new(),
            condition: Some(Condition::default()),
            pickup_location: String::new(),
            contact: String::new(),
        }
    }
}

/// Category-specific part of a draft, one variant per [`Category`].
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryDetails {
    Events(EventDetails),
    Issues(IssueDetails),
    Jobs(JobDetails),
    GoodDeeds(GoodDeedDetails),
    Donations(DonationDetails),
}

impl CategoryDetails {
    /// Fresh details with the category's defaults.
    pub fn new(category: Category) -> Self {
        match category {
            Category::Events => CategoryDetails::Events(EventDetails::default()),
            Category::Issues => CategoryDetails::Issues(IssueDetails::default()),
            Category::Jobs => CategoryDetails::Jobs(JobDetails::default()),
            Category::GoodDeeds => CategoryDetails::GoodDeeds(GoodDeedDetails::default()),
            Category::Donations => CategoryDetails::Donations(DonationDetails::default()),
        }
    }

    pub fn category(&self) -> Category {
        match self {
            CategoryDetails::Events(_) => Category::Events,
            CategoryDetails::Issues(_) => Category::Issues,
            CategoryDetails::Jobs(_) => Category::Jobs,
            CategoryDetails::GoodDeeds(_) => Category::GoodDeeds,
            CategoryDetails::Donations(_) => Category::Donations,
        }
    }

    /// Primary location, for the categories placed on the map.
    pub fn location(&self) -> Option<&str> {
        match self {
            CategoryDetails::Events(d) => Some(&d.location),
            CategoryDetails::Issues(d) => Some(&d.location),
            CategoryDetails::Jobs(d) => Some(&d.location),
            CategoryDetails::GoodDeeds(d) => Some(&d.location),
            CategoryDetails::Donations(_) => None,
        }
    }

    pub(crate) fn location_mut(&mut self) -> Option<&mut String> {
        match self {
            CategoryDetails::Events(d) => Some(&mut d.location),
            CategoryDetails::Issues(d) => Some(&mut d.location),
            CategoryDetails::Jobs(d) => Some(&mut d.location),
            CategoryDetails::GoodDeeds(d) => Some(&mut d.location),
            CategoryDetails::Donations(_) => None,
        }
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        match self {
            CategoryDetails::Events(d) => d.coordinates,
            CategoryDetails::Issues(d) => d.coordinates,
            CategoryDetails::Jobs(d) => d.coordinates,
            CategoryDetails::GoodDeeds(d) => d.coordinates,
            CategoryDetails::Donations(_) => None,
        }
    }

    pub(crate) fn coordinates_mut(&mut self) -> Option<&mut Option<Coordinates>> {
        match self {
            CategoryDetails::Events(d) => Some(&mut d.coordinates),
            CategoryDetails::Issues(d) => Some(&mut d.coordinates),
            CategoryDetails::Jobs(d) => Some(&mut d.coordinates),
            CategoryDetails::GoodDeeds(d) => Some(&mut d.coordinates),
            CategoryDetails::Donations(_) => None,
        }
    }
}

/// The single evolving record a wizard session edits.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Draft {
    pub title: String,
    pub description: String,
    /// `None` until a category is selected
    pub details: Option<CategoryDetails>,
}

impl Draft {
    pub fn category(&self) -> Option<Category> {
        self.details.as_ref().map(CategoryDetails::category)
    }

    /// Returns a snapshot with `category` selected.
    ///
    /// Reselecting the active category keeps its details. Any other category
    /// starts from that category's defaults; title and description carry over.
    pub fn with_category(&self, category: Category) -> Draft {
        if self.category() == Some(category) {
            return self.clone();
        }
        Draft {
            title: self.title.clone(),
            description: self.description.clone(),
            details: Some(CategoryDetails::new(category)),
        }
    }

    pub fn location(&self) -> Option<&str> {
        self.details.as_ref().and_then(CategoryDetails::location)
    }

    pub fn pickup_location(&self) -> Option<&str> {
        match &self.details {
            Some(CategoryDetails::Donations(d)) => Some(&d.pickup_location),
            _ => None,
        }
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        self.details.as_ref().and_then(CategoryDetails::coordinates)
    }

    pub fn date_time(&self) -> Option<Timestamp> {
        match &self.details {
            Some(CategoryDetails::Events(d)) => d.date_time,
            _ => None,
        }
    }

    /// Image selected for a good deed, if any.
    pub fn image(&self) -> Option<&FileRef> {
        match &self.details {
            Some(CategoryDetails::GoodDeeds(d)) => d.image.as_ref(),
            _ => None,
        }
    }
}
