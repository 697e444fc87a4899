//! Category and condition enumerations.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of post categories.
///
/// The category decides which detail fields a draft carries and which of them
/// must be filled before the wizard can leave the details step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    /// Community events with a date, a place on the map and an RSVP limit
    Events,

    /// Local issues reported with an urgency
    Issues,

    /// Job offers from local businesses
    Jobs,

    /// Good deeds, optionally with a photo
    #[serde(rename = "Good Deeds")]
    GoodDeeds,

    /// Items offered for donation
    Donations,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 5] = [
        Category::Events,
        Category::Issues,
        Category::Jobs,
        Category::GoodDeeds,
        Category::Donations,
    ];

    /// Human label, also used as the stored representation.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Events => "Events",
            Category::Issues => "Issues",
            Category::Jobs => "Jobs",
            Category::GoodDeeds => "Good Deeds",
            Category::Donations => "Donations",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "events" => Ok(Category::Events),
            "issues" => Ok(Category::Issues),
            "jobs" => Ok(Category::Jobs),
            "good deeds" | "good-deeds" | "good_deeds" | "gooddeeds" => Ok(Category::GoodDeeds),
            "donations" => Ok(Category::Donations),
            _ => Err(format!("Invalid category: {s}")),
        }
    }
}

/// Condition of a donated item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Condition {
    New,
    Excellent,
    #[default]
    Good,
    Fair,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::Excellent => "Excellent",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
        }
    }
}

impl FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new" => Ok(Condition::New),
            "excellent" => Ok(Condition::Excellent),
            "good" => Ok(Condition::Good),
            "fair" => Ok(Condition::Fair),
            _ => Err(format!("Invalid condition: {s}")),
        }
    }
}
