//! Display wrappers and formatting for posts and wizard state.
//!
//! Domain models implement [`std::fmt::Display`] in [`models`]; the newtype
//! wrappers here add contextual formatting. Everything renders as markdown so
//! the CLI can hand it to its terminal renderer unchanged.
//!
//! ## Module Organization
//!
//! - [`collections`]: feed listings ([`Posts`])
//! - [`datetime`]: timestamp formatting ([`LocalDateTime`], [`DisplayTime`])
//! - [`insights`]: community insights ([`crate::models::FeedInsights`])
//! - [`indicator`]: the step progress indicator ([`StepIndicator`])
//! - [`models`]: Display implementations for domain models
//! - [`preview`]: the draft summary shown on the preview step
//!   ([`DraftSummary`])
//! - [`results`]: validation refusals and publish notices

pub mod collections;
pub mod datetime;
pub mod indicator;
pub mod insights;
pub mod models;
pub mod preview;
pub mod results;

#[cfg(test)]
mod tests;

pub use collections::Posts;
pub use datetime::{DisplayTime, LocalDateTime};
pub use indicator::StepIndicator;
pub use preview::DraftSummary;
