//! Field edits and draft patches.

use jiff::Timestamp;

use super::{CategoryDetails, Condition, Coordinates, Draft, FileRef};
use crate::error::{Result, WizardError};

/// Names of the editable draft fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Description,
    Location,
    Coordinates,
    DateTime,
    RsvpLimit,
    Urgency,
    Company,
    Pay,
    Image,
    ItemName,
    Condition,
    PickupLocation,
    Contact,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Location => "location",
            Field::Coordinates => "coordinates",
            Field::DateTime => "date_time",
            Field::RsvpLimit => "rsvp_limit",
            Field::Urgency => "urgency",
            Field::Company => "company",
            Field::Pay => "pay",
            Field::Image => "image",
            Field::ItemName => "item_name",
            Field::Condition => "condition",
            Field::PickupLocation => "pickup_location",
            Field::Contact => "contact",
        }
    }
}

/// A single write to one draft field. Optional fields take `None` to clear.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Title(String),
    Description(String),
    Location(String),
    Coordinates(Option<Coordinates>),
    DateTime(Option<Timestamp>),
    RsvpLimit(Option<i64>),
    Urgency(Option<i32>),
    Company(String),
    Pay(String),
    Image(Option<FileRef>),
    ItemName(String),
    Condition(Option<Condition>),
    PickupLocation(String),
    Contact(String),
}

impl FieldEdit {
    pub fn field(&self) -> Field {
        match self {
            FieldEdit::Title(_) => Field::Title,
            FieldEdit::Description(_) => Field::Description,
            FieldEdit::Location(_) => Field::Location,
            FieldEdit::Coordinates(_) => Field::Coordinates,
            FieldEdit::DateTime(_) => Field::DateTime,
            FieldEdit::RsvpLimit(_) => Field::RsvpLimit,
            FieldEdit::Urgency(_) => Field::Urgency,
            FieldEdit::Company(_) => Field::Company,
            FieldEdit::Pay(_) => Field::Pay,
            FieldEdit::Image(_) => Field::Image,
            FieldEdit::ItemName(_) => Field::ItemName,
            FieldEdit::Condition(_) => Field::Condition,
            FieldEdit::PickupLocation(_) => Field::PickupLocation,
            FieldEdit::Contact(_) => Field::Contact,
        }
    }
}

/// An ordered batch of field edits. Later edits of the same field win.
///
/// # Examples
///
/// ```rust
/// use localhero_core::models::{Category, Draft, DraftPatch};
///
/// let draft = Draft::default().with_category(Category::Jobs);
/// let patch = DraftPatch::new()
///     .title("Barista")
///     .company("Corner Cafe")
///     .pay("$20/hr");
///
/// let next = draft.apply_patch(&patch).unwrap();
/// assert_eq!(next.title, "Barista");
/// assert!(draft.title.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftPatch {
    edits: Vec<FieldEdit>,
}

impl DraftPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edits(&self) -> &[FieldEdit] {
        &self.edits
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn push(mut self, edit: FieldEdit) -> Self {
        self.edits.push(edit);
        self
    }

    pub fn title(self, title: impl Into<String>) -> Self {
        self.push(FieldEdit::Title(title.into()))
    }

    pub fn description(self, description: impl Into<String>) -> Self {
        self.push(FieldEdit::Description(description.into()))
    }

    pub fn location(self, location: impl Into<String>) -> Self {
        self.push(FieldEdit::Location(location.into()))
    }

    pub fn coordinates(self, coordinates: Coordinates) -> Self {
        self.push(FieldEdit::Coordinates(Some(coordinates)))
    }

    pub fn date_time(self, date_time: Timestamp) -> Self {
        self.push(FieldEdit::DateTime(Some(date_time)))
    }

    pub fn rsvp_limit(self, limit: i64) -> Self {
        self.push(FieldEdit::RsvpLimit(Some(limit)))
    }

    pub fn urgency(self, urgency: i32) -> Self {
        self.push(FieldEdit::Urgency(Some(urgency)))
    }

    pub fn company(self, company: impl Into<String>) -> Self {
        self.push(FieldEdit::Company(company.into()))
    }

    pub fn pay(self, pay: impl Into<String>) -> Self {
        self.push(FieldEdit::Pay(pay.into()))
    }

    pub fn image(self, image: FileRef) -> Self {
        self.push(FieldEdit::Image(Some(image)))
    }

    pub fn item_name(self, item_name: impl Into<String>) -> Self {
        self.push(FieldEdit::ItemName(item_name.into()))
    }

    pub fn condition(self, condition: Condition) -> Self {
        self.push(FieldEdit::Condition(Some(condition)))
    }

    pub fn pickup_location(self, pickup_location: impl Into<String>) -> Self {
        self.push(FieldEdit::PickupLocation(pickup_location.into()))
    }

    pub fn contact(self, contact: impl Into<String>) -> Self {
        self.push(FieldEdit::Contact(contact.into()))
    }
}

impl From<FieldEdit> for DraftPatch {
    fn from(edit: FieldEdit) -> Self {
        DraftPatch::new().push(edit)
    }
}

impl Draft {
    /// Merges `patch` into a copy of this draft and returns the copy.
    ///
    /// No value checks happen here; that is the validation engine's job. The
    /// patch fails as a whole if any edit targets a field the active category
    /// does not carry.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::FieldNotApplicable` for such an edit.
    pub fn apply_patch(&self, patch: &DraftPatch) -> Result<Draft> {
        let mut next = self.clone();
        for edit in patch.edits() {
            next.apply_edit(edit.clone())?;
        }
        Ok(next)
    }

    fn apply_edit(&mut self, edit: FieldEdit) -> Result<()> {
        let field = edit.field();
        let category = self.category();
        let not_applicable = || WizardError::FieldNotApplicable { field, category };

        match (edit, &mut self.details) {
            (FieldEdit::Title(value), _) => self.title = value,
            (FieldEdit::Description(value), _) => self.description = value,
            (FieldEdit::Location(value), Some(details)) => {
                *details.location_mut().ok_or_else(not_applicable)? = value;
            }
            (FieldEdit::Coordinates(value), Some(details)) => {
                *details.coordinates_mut().ok_or_else(not_applicable)? = value;
            }
            (FieldEdit::DateTime(value), Some(CategoryDetails::Events(d))) => d.date_time = value,
            (FieldEdit::RsvpLimit(value), Some(CategoryDetails::Events(d))) => d.rsvp_limit = value,
            (FieldEdit::Urgency(value), Some(CategoryDetails::Issues(d))) => d.urgency = value,
            (FieldEdit::Company(value), Some(CategoryDetails::Jobs(d))) => d.company = value,
            (FieldEdit::Pay(value), Some(CategoryDetails::Jobs(d))) => d.pay = value,
            (FieldEdit::Image(value), Some(CategoryDetails::GoodDeeds(d))) => d.image = value,
            (FieldEdit::ItemName(value), Some(CategoryDetails::Donations(d))) => d.item_name = value,
            (FieldEdit::Condition(value), Some(CategoryDetails::Donations(d))) => {
                d.condition = value;
            }
            (FieldEdit::PickupLocation(value), Some(CategoryDetails::Donations(d))) => {
                d.pickup_location = value;
            }
            (FieldEdit::Contact(value), Some(CategoryDetails::Donations(d))) => d.contact = value,
            _ => return Err(not_applicable()),
        }
        Ok(())
    }
}
