//! Command-line argument definitions using clap
//!
//! Arguments are parsed into clap-specific wrapper structs and converted into
//! core types before they reach the wizard or the feed:
//!
//! ```text
//! User Input → CLI Args (clap) → DraftPatch / ListPosts → Wizard / Feed
//! ```
//!
//! The wrappers only decide how values are spelled on the command line. Which
//! fields a category needs, and which it rejects, stays with the core.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use jiff::{civil::DateTime, tz::TimeZone, Timestamp};
use localhero_core::{
    models::{Category, Condition, Coordinates, DraftPatch, FileRef},
    params::{Id, ListPosts},
};

/// Fields of a new post
///
/// Every flag is optional at the parsing level. Flags left out are simply not
/// edited, so the wizard reports them as missing when the category requires
/// them. Flags for fields the category does not carry are rejected.
#[derive(Args)]
pub struct PostArgs {
    /// Category of the post: events, issues, jobs, good-deeds or donations
    pub category: Category,
    /// Title of the post
    #[arg(short, long)]
    pub title: Option<String>,
    /// What the post is about
    #[arg(short, long)]
    pub description: Option<String>,
    /// Where it happens (all categories except donations)
    #[arg(short, long)]
    pub location: Option<String>,
    /// Longitude of the map location, -180 to 180
    #[arg(long, requires = "lat", allow_hyphen_values = true, value_parser = parse_longitude)]
    pub lng: Option<f64>,
    /// Latitude of the map location, -90 to 90
    #[arg(long, requires = "lng", allow_hyphen_values = true, value_parser = parse_latitude)]
    pub lat: Option<f64>,
    /// Event date and time, RFC 3339 (2026-10-24T14:00:00Z) or a local
    /// date-time in the configured time zone (2026-10-24T10:00)
    #[arg(long)]
    pub date_time: Option<String>,
    /// Maximum number of attendees (events)
    #[arg(long, allow_hyphen_values = true)]
    pub rsvp_limit: Option<i64>,
    /// Urgency from 1 to 5 (issues, defaults to 3)
    #[arg(long, allow_hyphen_values = true)]
    pub urgency: Option<i32>,
    /// Hiring company (jobs)
    #[arg(long)]
    pub company: Option<String>,
    /// Pay, free text such as "$18/hr" (jobs)
    #[arg(long)]
    pub pay: Option<String>,
    /// Photo to attach (good deeds)
    #[arg(long)]
    pub image: Option<PathBuf>,
    /// Donated item (donations)
    #[arg(long)]
    pub item_name: Option<String>,
    /// Item condition: new, excellent, good or fair (donations, defaults to
    /// good)
    #[arg(long)]
    pub condition: Option<Condition>,
    /// Where to pick the item up (donations)
    #[arg(long)]
    pub pickup_location: Option<String>,
    /// How to reach the donor (donations)
    #[arg(long)]
    pub contact: Option<String>,
}

impl PostArgs {
    /// Converts the given flags into a draft patch.
    ///
    /// Local date-times are resolved in `time_zone`.
    pub fn to_patch(&self, time_zone: &TimeZone) -> Result<DraftPatch> {
        let mut patch = DraftPatch::new();

        if let Some(title) = &self.title {
            patch = patch.title(title.as_str());
        }
        if let Some(description) = &self.description {
            patch = patch.description(description.as_str());
        }
        if let Some(location) = &self.location {
            patch = patch.location(location.as_str());
        }
        if let (Some(lng), Some(lat)) = (self.lng, self.lat) {
            patch = patch.coordinates(Coordinates::new(lng, lat));
        }
        if let Some(date_time) = &self.date_time {
            patch = patch.date_time(parse_date_time(date_time, time_zone)?);
        }
        if let Some(limit) = self.rsvp_limit {
            patch = patch.rsvp_limit(limit);
        }
        if let Some(urgency) = self.urgency {
            patch = patch.urgency(urgency);
        }
        if let Some(company) = &self.company {
            patch = patch.company(company.as_str());
        }
        if let Some(pay) = &self.pay {
            patch = patch.pay(pay.as_str());
        }
        if let Some(image) = &self.image {
            patch = patch.image(FileRef::new(image));
        }
        if let Some(item_name) = &self.item_name {
            patch = patch.item_name(item_name.as_str());
        }
        if let Some(condition) = self.condition {
            patch = patch.condition(condition);
        }
        if let Some(pickup_location) = &self.pickup_location {
            patch = patch.pickup_location(pickup_location.as_str());
        }
        if let Some(contact) = &self.contact {
            patch = patch.contact(contact.as_str());
        }

        Ok(patch)
    }
}

/// Parses an absolute timestamp, falling back to a local date-time.
pub fn parse_date_time(input: &str, time_zone: &TimeZone) -> Result<Timestamp> {
    if let Ok(timestamp) = input.parse::<Timestamp>() {
        return Ok(timestamp);
    }

    let local: DateTime = input
        .parse()
        .with_context(|| format!("Invalid date-time '{input}'"))?;
    let zoned = local
        .to_zoned(time_zone.clone())
        .with_context(|| format!("Invalid date-time '{input}' in the configured time zone"))?;
    Ok(zoned.timestamp())
}

pub fn parse_longitude(input: &str) -> Result<f64, String> {
    parse_coordinate(input, 180.0)
}

pub fn parse_latitude(input: &str) -> Result<f64, String> {
    parse_coordinate(input, 90.0)
}

/// Parses a finite degree value within `-limit..=limit`.
fn parse_coordinate(input: &str, limit: f64) -> Result<f64, String> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| format!("'{input}' is not a number"))?;
    if !value.is_finite() || value.abs() > limit {
        return Err(format!("'{input}' is not between -{limit} and {limit}"));
    }
    Ok(value)
}

/// Create a post and publish it to the feed
#[derive(Args)]
pub struct CreatePostArgs {
    #[command(flatten)]
    pub post: PostArgs,
    /// Print the published post as JSON
    #[arg(long)]
    pub json: bool,
}

/// List the feed, newest first
#[derive(Args)]
pub struct ListPostsArgs {
    /// Only show posts of this category
    #[arg(short, long)]
    pub category: Option<Category>,
    /// Case-insensitive text to look for in title, description and location
    #[arg(short, long)]
    pub search: Option<String>,
    /// Print the posts as JSON
    #[arg(long)]
    pub json: bool,
}

impl From<&ListPostsArgs> for ListPosts {
    fn from(val: &ListPostsArgs) -> Self {
        ListPosts {
            category: val.category,
            search: val.search.clone(),
        }
    }
}

/// Summarize the feed: posts per category, the last seven days and the
/// share of positive posts versus issues
#[derive(Args)]
pub struct InsightsArgs {
    /// Only count posts of this category
    #[arg(short, long)]
    pub category: Option<Category>,
    /// Only count posts containing this text
    #[arg(short, long)]
    pub search: Option<String>,
    /// Print the insights as JSON
    #[arg(long)]
    pub json: bool,
}

impl From<&InsightsArgs> for ListPosts {
    fn from(val: &InsightsArgs) -> Self {
        ListPosts {
            category: val.category,
            search: val.search.clone(),
        }
    }
}

/// Show a single post
#[derive(Args)]
pub struct ShowPostArgs {
    /// ID of the post to display
    pub id: String,
    /// Print the post as JSON
    #[arg(long)]
    pub json: bool,
}

impl From<&ShowPostArgs> for Id {
    fn from(val: &ShowPostArgs) -> Self {
        Id { id: val.id.clone() }
    }
}

#[derive(Subcommand)]
pub enum PostCommands {
    /// Run the wizard through to publishing
    #[command(alias = "c")]
    Create(CreatePostArgs),
    /// Run the wizard up to the preview step without publishing
    #[command(alias = "p")]
    Preview(PostArgs),
}

#[derive(Subcommand)]
pub enum FeedCommands {
    /// List published posts
    #[command(aliases = ["l", "ls"])]
    List(ListPostsArgs),
    /// Show a published post
    #[command(alias = "s")]
    Show(ShowPostArgs),
    /// Show community insights
    #[command(alias = "i")]
    Insights(InsightsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(category: Category) -> PostArgs {
        PostArgs {
            category,
            title: None,
            description: None,
            location: None,
            lng: None,
            lat: None,
            date_time: None,
            rsvp_limit: None,
            urgency: None,
            company: None,
            pay: None,
            image: None,
            item_name: None,
            condition: None,
            pickup_location: None,
            contact: None,
        }
    }

    #[test]
    fn test_parse_rfc3339_date_time() {
        let ts = parse_date_time("2026-10-24T14:00:00Z", &TimeZone::UTC).unwrap();
        assert_eq!(ts.to_string(), "2026-10-24T14:00:00Z");
    }

    #[test]
    fn test_parse_local_date_time() {
        let tz = TimeZone::fixed(jiff::tz::offset(-4));
        let ts = parse_date_time("2026-10-24T10:00", &tz).unwrap();
        assert_eq!(ts.to_string(), "2026-10-24T14:00:00Z");
    }

    #[test]
    fn test_parse_invalid_date_time() {
        assert!(parse_date_time("next tuesday", &TimeZone::UTC).is_err());
    }

    #[test]
    fn test_only_given_flags_become_edits() {
        let mut post = args(Category::Jobs);
        post.title = Some("Barista".to_string());
        post.pay = Some("$18/hr".to_string());

        let patch = post.to_patch(&TimeZone::UTC).unwrap();
        assert_eq!(patch.edits().len(), 2);
        assert!(args(Category::Jobs)
            .to_patch(&TimeZone::UTC)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_coordinates_need_both_values() {
        let mut post = args(Category::Events);
        post.lng = Some(-73.99);
        assert!(post.to_patch(&TimeZone::UTC).unwrap().is_empty());

        post.lat = Some(40.74);
        assert_eq!(post.to_patch(&TimeZone::UTC).unwrap().edits().len(), 1);
    }

    #[test]
    fn test_coordinates_must_be_finite_degrees() {
        assert_eq!(parse_longitude("-73.99"), Ok(-73.99));
        assert_eq!(parse_latitude("90"), Ok(90.0));

        for bad in ["NaN", "nan", "inf", "-infinity", "181", "north"] {
            assert!(parse_longitude(bad).is_err(), "{bad} accepted as longitude");
        }
        assert!(parse_latitude("-90.5").is_err());
        assert!(parse_latitude("NaN").is_err());
    }
}
