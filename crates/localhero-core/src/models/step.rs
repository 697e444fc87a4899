//! Wizard step enumeration.

use serde::{Deserialize, Serialize};

/// The three steps of the post-creation wizard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    /// Step 1: pick a category
    #[default]
    Category,

    /// Step 2: fill in the category's details
    Details,

    /// Step 3: review before publishing
    Preview,
}

impl WizardStep {
    /// All steps in order.
    pub const ALL: [WizardStep; 3] = [
        WizardStep::Category,
        WizardStep::Details,
        WizardStep::Preview,
    ];

    /// 1-based position of the step.
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Category => 1,
            WizardStep::Details => 2,
            WizardStep::Preview => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::Category => "Category",
            WizardStep::Details => "Details",
            WizardStep::Preview => "Preview",
        }
    }

    /// The following step, or `None` past the preview.
    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Category => Some(WizardStep::Details),
            WizardStep::Details => Some(WizardStep::Preview),
            WizardStep::Preview => None,
        }
    }

    /// The preceding step, saturating at the first one.
    pub fn previous(&self) -> WizardStep {
        match self {
            WizardStep::Category | WizardStep::Details => WizardStep::Category,
            WizardStep::Preview => WizardStep::Details,
        }
    }
}
