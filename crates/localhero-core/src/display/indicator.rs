//! Step progress indicator.

use std::fmt;

use crate::models::WizardStep;

const BAR_WIDTH: usize = 20;

/// Read-only rendering of the wizard's progress.
///
/// Renders a progress bar followed by the numbered step labels. Steps up to
/// and including the current one are marked with `●`, the rest with `○`.
///
/// # Examples
///
/// ```rust
/// use localhero_core::{display::StepIndicator, models::WizardStep};
///
/// let indicator = StepIndicator::new(WizardStep::Details);
/// assert_eq!(indicator.percent(), 50);
///
/// let output = indicator.to_string();
/// assert!(output.contains("● 2 Details"));
/// assert!(output.contains("○ 3 Preview"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepIndicator {
    current: WizardStep,
}

impl StepIndicator {
    pub fn new(current: WizardStep) -> Self {
        Self { current }
    }

    pub fn current(&self) -> WizardStep {
        self.current
    }

    /// Progress through the wizard, 0 on the first step and 100 on the last.
    pub fn percent(&self) -> u8 {
        let total = WizardStep::ALL.len() as u32;
        let done = u32::from(self.current.number()) - 1;
        (done * 100 / (total - 1)) as u8
    }
}

impl fmt::Display for StepIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filled = usize::from(self.percent()) * BAR_WIDTH / 100;
        writeln!(
            f,
            "[{}{}] {}%",
            "#".repeat(filled),
            "-".repeat(BAR_WIDTH - filled),
            self.percent()
        )?;

        let labels: Vec<String> = WizardStep::ALL
            .iter()
            .map(|step| {
                let marker = if *step <= self.current { '●' } else { '○' };
                format!("{marker} {} {}", step.number(), step.label())
            })
            .collect();
        writeln!(f, "{}", labels.join("  "))
    }
}
