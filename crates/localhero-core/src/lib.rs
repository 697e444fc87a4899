//! Core library for the Local Hero community board.
//!
//! This crate provides the post-creation wizard (category, details, preview),
//! the validation rules that gate it, the transformation of a finished draft
//! into a feed post, and the SQLite-backed feed that stores published posts.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for direct
//!   formatting
//! - **Display Wrappers** ([`display`]): The step indicator, draft summary and
//!   feed listings
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust
//! use localhero_core::{
//!     models::{Category, Coordinates, DraftPatch},
//!     wizard::Advance,
//!     CanonicalPost, WizardBuilder,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut wizard = WizardBuilder::new().with_time_zone(Some("UTC")).build()?;
//!
//! wizard.select_category(Category::Issues)?;
//! assert!(matches!(wizard.next(), Advance::Moved(_)));
//!
//! wizard.apply(
//!     &DraftPatch::new()
//!         .title("Pothole on 3rd & Pine")
//!         .description("Large pothole causing traffic.")
//!         .location("3rd & Pine")
//!         .coordinates(Coordinates::new(-73.99, 40.74)),
//! )?;
//! assert!(matches!(wizard.next(), Advance::Moved(_)));
//!
//! let mut feed: Vec<CanonicalPost> = Vec::new();
//! let notice = wizard.publish(&mut feed)?;
//! println!("{notice}");
//! assert_eq!(feed[0].location, "3rd & Pine");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod feed;
pub mod models;
pub mod params;
pub mod preview;
pub mod publish;
pub mod validation;
pub mod wizard;

// Re-export commonly used types
pub use db::Database;
pub use display::{DisplayTime, DraftSummary, LocalDateTime, Posts, StepIndicator};
pub use error::{Result, WizardError};
pub use feed::{Feed, FeedBuilder};
pub use models::{
    CanonicalPost, Category, CategoryDetails, Condition, Coordinates, Draft, DraftPatch,
    FeedInsights, Field, FieldEdit, FileRef, WizardStep,
};
pub use params::{Id, ListPosts};
pub use preview::{FilePreviewSource, ImagePreview, PreviewHandle, PreviewSource};
pub use publish::{IdGenerator, PostTransformer};
pub use validation::{Requirement, ValidationReport};
pub use wizard::{
    resolve_time_zone, Advance, Notice, Outcome, PublishSink, Wizard, WizardBuilder, WizardEvent,
};
