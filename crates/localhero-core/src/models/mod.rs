//! Data models for drafts, categories and published posts.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping data structures and presentation
//! apart.
//!
//! # Overview
//!
//! - [`Category`] and [`Condition`]: closed enumerations
//! - [`Draft`] and [`CategoryDetails`]: the in-progress post, with one
//!   details variant per category
//! - [`FieldEdit`] and [`DraftPatch`]: the only way to change a draft
//! - [`WizardStep`]: the three wizard steps
//! - [`CanonicalPost`]: the feed entity produced at publish time
//! - [`FeedInsights`]: per-category, weekly and sentiment counts over posts
//!
//! # Examples
//!
//! ```rust
//! use localhero_core::models::{Category, Draft, DraftPatch};
//!
//! let draft = Draft::default().with_category(Category::Donations);
//! let draft = draft
//!     .apply_patch(&DraftPatch::new().pickup_location("Community Center"))
//!     .unwrap();
//!
//! assert_eq!(draft.category(), Some(Category::Donations));
//! assert_eq!(draft.pickup_location(), Some("Community Center"));
//! assert_eq!(draft.location(), None);
//! ```

pub mod category;
pub mod draft;
pub mod insights;
pub mod patch;
pub mod post;
pub mod step;


pub use category::{Category, Condition};
pub use draft::{
    CategoryDetails, Coordinates, DonationDetails, Draft, EventDetails, FileRef, GoodDeedDetails,
    IssueDetails, JobDetails,
};
pub use insights::{CategoryCount, DailyActivity, FeedInsights};
pub use patch::{DraftPatch, Field, FieldEdit};
pub use post::CanonicalPost;
pub use step::WizardStep;
