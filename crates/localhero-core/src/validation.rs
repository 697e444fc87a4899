//! Validation engine gating forward navigation.
//!
//! [`check`] evaluates every requirement of a step against a draft and returns
//! a [`ValidationReport`], so callers can show which requirement is unmet.
//! [`can_advance`] is the boolean view of the same report.
//!
//! Text fields count as filled when they are non-empty; whitespace is not
//! trimmed. Numeric fields only need to be present, so a zero or negative
//! RSVP limit or urgency passes.

use std::fmt;

use crate::models::{
    CategoryDetails, DonationDetails, Draft, EventDetails, GoodDeedDetails, IssueDetails,
    JobDetails, WizardStep,
};

/// A single condition a draft must satisfy to leave a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    Category,
    Title,
    Description,
    Location,
    DateTime,
    Coordinates,
    RsvpLimit,
    Urgency,
    Company,
    Pay,
    ItemName,
    Condition,
    PickupLocation,
    Contact,
}

impl Requirement {
    pub fn label(&self) -> &'static str {
        match self {
            Requirement::Category => "category",
            Requirement::Title => "title",
            Requirement::Description => "description",
            Requirement::Location => "location",
            Requirement::DateTime => "date and time",
            Requirement::Coordinates => "map location",
            Requirement::RsvpLimit => "RSVP limit",
            Requirement::Urgency => "urgency",
            Requirement::Company => "company",
            Requirement::Pay => "pay",
            Requirement::ItemName => "item name",
            Requirement::Condition => "condition",
            Requirement::PickupLocation => "pickup location",
            Requirement::Contact => "contact",
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Outcome of checking one requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Check {
    pub requirement: Requirement,
    pub satisfied: bool,
}

/// Ordered pass/fail results for every requirement of a step.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    checks: Vec<Check>,
}

impl ValidationReport {
    fn with(mut self, requirement: Requirement, satisfied: bool) -> Self {
        self.checks.push(Check {
            requirement,
            satisfied,
        });
        self
    }

    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// True when every requirement is satisfied.
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|c| c.satisfied)
    }

    /// Requirements that are not satisfied, in check order.
    pub fn unmet(&self) -> Vec<Requirement> {
        self.checks
            .iter()
            .filter(|c| !c.satisfied)
            .map(|c| c.requirement)
            .collect()
    }

    pub fn is_satisfied(&self, requirement: Requirement) -> Option<bool> {
        self.checks
            .iter()
            .find(|c| c.requirement == requirement)
            .map(|c| c.satisfied)
    }
}

/// Whether the wizard may leave `step` with this draft.
pub fn can_advance(step: WizardStep, draft: &Draft) -> bool {
    check(step, draft).passed()
}

/// Evaluates every requirement of `step` against `draft`.
pub fn check(step: WizardStep, draft: &Draft) -> ValidationReport {
    let report = ValidationReport::default();
    match step {
        WizardStep::Category => report.with(Requirement::Category, draft.details.is_some()),
        WizardStep::Details => {
            let report = report
                .with(Requirement::Title, filled(&draft.title))
                .with(Requirement::Description, filled(&draft.description));
            match &draft.details {
                Some(details) => check_details(report, details),
                None => report.with(Requirement::Category, false),
            }
        }
        WizardStep::Preview => report,
    }
}

fn check_details(report: ValidationReport, details: &CategoryDetails) -> ValidationReport {
    match details {
        CategoryDetails::Events(d) => check_event(report, d),
        CategoryDetails::Issues(d) => check_issue(report, d),
        CategoryDetails::Jobs(d) => check_job(report, d),
        CategoryDetails::GoodDeeds(d) => check_good_deed(report, d),
        CategoryDetails::Donations(d) => check_donation(report, d),
    }
}

fn check_event(report: ValidationReport, d: &EventDetails) -> ValidationReport {
    report
        .with(Requirement::Location, filled(&d.location))
        .with(Requirement::DateTime, d.date_time.is_some())
        .with(Requirement::Coordinates, d.coordinates.is_some())
        .with(Requirement::RsvpLimit, d.rsvp_limit.is_some())
}

fn check_issue(report: ValidationReport, d: &IssueDetails) -> ValidationReport {
    report
        .with(Requirement::Location, filled(&d.location))
        .with(Requirement::Urgency, d.urgency.is_some())
}

fn check_job(report: ValidationReport, d: &JobDetails) -> ValidationReport {
    report
        .with(Requirement::Company, filled(&d.company))
        .with(Requirement::Location, filled(&d.location))
        .with(Requirement::Pay, filled(&d.pay))
}

fn check_good_deed(report: ValidationReport, d: &GoodDeedDetails) -> ValidationReport {
    report.with(Requirement::Location, filled(&d.location))
}

fn check_donation(report: ValidationReport, d: &DonationDetails) -> ValidationReport {
    report
        .with(Requirement::ItemName, filled(&d.item_name))
        .with(Requirement::Condition, d.condition.is_some())
        .with(Requirement::PickupLocation, filled(&d.pickup_location))
        .with(Requirement::Contact, filled(&d.contact))
}

fn filled(value: &str) -> bool {
    !value.is_empty()
}
