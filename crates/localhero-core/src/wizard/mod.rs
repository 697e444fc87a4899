//! The post-creation wizard.
//!
//! [`Wizard`] is the state machine behind the Category → Details → Preview
//! flow. It exclusively owns the [`Draft`] for one creation session, gates
//! forward navigation on the validation engine, keeps the image preview
//! handle in step with the draft, and on publish hands the canonical post to
//! a [`PublishSink`].
//!
//! ```text
//!   ┌──────────┐  next (category set)  ┌─────────┐  next (details valid)  ┌─────────┐
//!   │ Category │ ────────────────────▶ │ Details │ ─────────────────────▶ │ Preview │
//!   │    1     │ ◀──────────────────── │    2    │ ◀───────────────────── │    3    │
//!   └──────────┘         back          └─────────┘          back          └─────────┘
//!        ▲                                                                     │
//!        └──────────────────────── publish / reset ────────────────────────────┘
//! ```
//!
//! There is no terminal state: publishing and resetting both start a fresh
//! draft on the first step, so one wizard can author any number of posts.
//!
//! # Examples
//!
//! ```rust
//! use localhero_core::{
//!     models::{CanonicalPost, Category, FieldEdit, WizardStep},
//!     wizard::{Advance, WizardBuilder},
//! };
//!
//! let mut wizard = WizardBuilder::new().with_time_zone(Some("UTC")).build().unwrap();
//! wizard.select_category(Category::GoodDeeds).unwrap();
//! assert!(matches!(wizard.next(), Advance::Moved(WizardStep::Details)));
//!
//! wizard.edit(FieldEdit::Title("Lost Cat Found".into())).unwrap();
//! wizard.edit(FieldEdit::Description("Orange tabby near Elm St".into())).unwrap();
//! wizard.edit(FieldEdit::Location("Elm St".into())).unwrap();
//! assert!(matches!(wizard.next(), Advance::Moved(WizardStep::Preview)));
//!
//! let mut published: Vec<CanonicalPost> = Vec::new();
//! wizard.publish(&mut published).unwrap();
//! assert_eq!(published[0].location, "Elm St");
//! assert_eq!(wizard.step(), WizardStep::Category);
//! ```

use log::debug;

use crate::display::StepIndicator;
use crate::error::{Result, WizardError};
use crate::models::{CanonicalPost, Draft, WizardStep};
use crate::preview::ImagePreview;
use crate::publish::PostTransformer;
use crate::validation::{self, ValidationReport};

pub mod builder;
pub mod transitions;

#[cfg(test)]
mod tests;

pub use builder::{resolve_time_zone, WizardBuilder};
pub use transitions::{Advance, Outcome, WizardEvent};

/// Receives posts produced by a successful publish.
pub trait PublishSink {
    /// Called exactly once per successful publish.
    fn on_publish(&mut self, post: &CanonicalPost);
}

impl PublishSink for Vec<CanonicalPost> {
    fn on_publish(&mut self, post: &CanonicalPost) {
        self.push(post.clone());
    }
}

/// User-visible confirmation of a publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn published() -> Self {
        Self {
            title: "Post published".to_string(),
            description: "Your community post is live!".to_string(),
        }
    }
}

/// State machine for one post-creation session.
pub struct Wizard {
    step: WizardStep,
    draft: Draft,
    preview: ImagePreview,
    transformer: PostTransformer,
}

impl Wizard {
    pub(crate) fn new(preview: ImagePreview, transformer: PostTransformer) -> Self {
        Self {
            step: WizardStep::Category,
            draft: Draft::default(),
            preview,
            transformer,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// URI of the live image preview, if any.
    pub fn image_preview(&self) -> Option<&str> {
        self.preview.uri()
    }

    /// Validation report for leaving the current step.
    pub fn report(&self) -> ValidationReport {
        validation::check(self.step, &self.draft)
    }

    pub fn can_advance(&self) -> bool {
        validation::can_advance(self.step, &self.draft)
    }

    pub fn indicator(&self) -> StepIndicator {
        StepIndicator::new(self.step)
    }

    /// Time zone event times are rendered in.
    pub fn time_zone(&self) -> &jiff::tz::TimeZone {
        self.transformer.time_zone()
    }

    /// The post card as it would be published, for the preview step.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::InvalidTransition` outside the preview step.
    pub fn preview_post(&self) -> Result<CanonicalPost> {
        if self.step != WizardStep::Preview {
            return Err(WizardError::invalid_transition(
                "preview the post",
                self.step,
            ));
        }
        self.transformer.preview(&self.draft)
    }

    /// Ends the session, releasing the image preview.
    pub fn close(mut self) {
        debug!("Closing wizard on the {} step", self.step);
        self.preview.release();
    }

    fn sync_preview(&mut self) {
        self.preview.sync(self.draft.image());
    }
}
