//! Wizard transitions.

use log::{debug, info};

use super::{Notice, PublishSink, Wizard};
use crate::error::{Result, WizardError};
use crate::models::{Category, Draft, DraftPatch, FieldEdit, WizardStep};
use crate::validation::ValidationReport;

/// Result of asking the wizard to move forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// The wizard moved to this step
    Moved(WizardStep),
    /// The current step's requirements are not met; the step is unchanged
    Refused(ValidationReport),
    /// Already on the last step
    AtEnd,
}

/// Discrete user events, applied in arrival order by [`Wizard::dispatch`].
#[derive(Debug, Clone, PartialEq)]
pub enum WizardEvent {
    Next,
    Back,
    Publish,
    Reset,
    SelectCategory(Category),
    Edit(FieldEdit),
}

/// What [`Wizard::dispatch`] did with an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Advance(Advance),
    Step(WizardStep),
    Published(Notice),
    Updated,
}

impl Wizard {
    /// Moves to the next step when the current one validates.
    pub fn next(&mut self) -> Advance {
        let Some(next) = self.step.next() else {
            return Advance::AtEnd;
        };

        let report = self.report();
        if !report.passed() {
            debug!(
                "Refused to leave the {} step, unmet: {:?}",
                self.step,
                report.unmet()
            );
            return Advance::Refused(report);
        }

        debug!("Wizard step {} -> {}", self.step, next);
        self.step = next;
        Advance::Moved(next)
    }

    /// Moves to the previous step, staying put on the first one.
    pub fn back(&mut self) -> WizardStep {
        self.step = self.step.previous();
        self.step
    }

    /// Selects the post category.
    ///
    /// Choosing a different category discards the previous category's
    /// details, which also releases any image preview.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::InvalidTransition` outside the category step.
    pub fn select_category(&mut self, category: Category) -> Result<()> {
        if self.step != WizardStep::Category {
            return Err(WizardError::invalid_transition(
                "select a category",
                self.step,
            ));
        }

        if self.draft.category() != Some(category) {
            debug!("Category selected: {category}");
        }
        self.draft = self.draft.with_category(category);
        self.sync_preview();
        Ok(())
    }

    /// Applies a single field edit.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::InvalidTransition` outside the details step and
    /// `WizardError::FieldNotApplicable` for fields the category lacks.
    pub fn edit(&mut self, edit: FieldEdit) -> Result<()> {
        self.apply(&DraftPatch::from(edit))
    }

    /// Applies a batch of field edits atomically.
    ///
    /// # Errors
    ///
    /// Same as [`Wizard::edit`].
    pub fn apply(&mut self, patch: &DraftPatch) -> Result<()> {
        if self.step != WizardStep::Details {
            return Err(WizardError::invalid_transition("edit fields", self.step));
        }

        self.draft = self.draft.apply_patch(patch)?;
        self.sync_preview();
        Ok(())
    }

    /// Publishes the draft and starts over.
    ///
    /// The canonical post goes to `sink` exactly once, then the wizard resets
    /// to an empty draft on the category step.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::InvalidTransition` outside the preview step and
    /// `WizardError::InvalidDraft` if the draft does not validate.
    pub fn publish(&mut self, sink: &mut dyn PublishSink) -> Result<Notice> {
        if self.step != WizardStep::Preview {
            return Err(WizardError::invalid_transition("publish", self.step));
        }

        let post = self.transformer.transform(&self.draft)?;
        sink.on_publish(&post);
        info!("Published {} post {}", post.post_type, post.id);

        self.reset();
        Ok(Notice::published())
    }

    /// Discards the draft and returns to the category step.
    pub fn reset(&mut self) {
        self.preview.release();
        self.draft = Draft::default();
        self.step = WizardStep::Category;
    }

    /// Applies one event.
    ///
    /// # Errors
    ///
    /// Propagates the error of the operation the event maps to.
    pub fn dispatch(&mut self, event: WizardEvent, sink: &mut dyn PublishSink) -> Result<Outcome> {
        match event {
            WizardEvent::Next => Ok(Outcome::Advance(self.next())),
            WizardEvent::Back => Ok(Outcome::Step(self.back())),
            WizardEvent::Publish => self.publish(sink).map(Outcome::Published),
            WizardEvent::Reset => {
                self.reset();
                Ok(Outcome::Updated)
            }
            WizardEvent::SelectCategory(category) => {
                self.select_category(category)?;
                Ok(Outcome::Updated)
            }
            WizardEvent::Edit(edit) => {
                self.edit(edit)?;
                Ok(Outcome::Updated)
            }
        }
    }
}
