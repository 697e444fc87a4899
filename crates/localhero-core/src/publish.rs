//! Transformation of a validated draft into a [`CanonicalPost`].

use jiff::{tz::TimeZone, Timestamp};

use crate::display::DisplayTime;
use crate::error::{Result, WizardError};
use crate::models::{CanonicalPost, Category, Draft, WizardStep};
use crate::validation;

const PREVIEW_ID: &str = "preview";

/// Hands out post identifiers derived from the creation time.
///
/// Identifiers are the creation time in milliseconds, bumped when needed so
/// they stay strictly increasing for the lifetime of one generator. No
/// uniqueness is claimed across generators.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self, now: Timestamp) -> String {
        let candidate = now.as_millisecond();
        self.last = if candidate > self.last {
            candidate
        } else {
            self.last + 1
        };
        self.last.to_string()
    }
}

/// Turns drafts into feed entities.
#[derive(Debug)]
pub struct PostTransformer {
    ids: IdGenerator,
    time_zone: TimeZone,
}

impl PostTransformer {
    /// Creates a transformer that renders event times in `time_zone`.
    pub fn new(time_zone: TimeZone) -> Self {
        Self {
            ids: IdGenerator::new(),
            time_zone,
        }
    }

    pub fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }

    /// Builds the canonical post for `draft`, stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::InvalidDraft` when the draft does not pass the
    /// details step's validation.
    pub fn transform(&mut self, draft: &Draft) -> Result<CanonicalPost> {
        self.transform_at(draft, Timestamp::now())
    }

    /// Same as [`PostTransformer::transform`] with an explicit creation time.
    pub fn transform_at(&mut self, draft: &Draft, created_at: Timestamp) -> Result<CanonicalPost> {
        let category = publishable_category(draft)?;
        let id = self.ids.next_id(created_at);
        Ok(self.build(draft, category, id, created_at))
    }

    /// Builds the post card shown on the preview step.
    ///
    /// Uses the placeholder ID `preview` and leaves the ID generator
    /// untouched, so previewing never changes the ID of the eventual post.
    ///
    /// # Errors
    ///
    /// Same as [`PostTransformer::transform`].
    pub fn preview(&self, draft: &Draft) -> Result<CanonicalPost> {
        let category = publishable_category(draft)?;
        Ok(self.build(draft, category, PREVIEW_ID.to_string(), Timestamp::now()))
    }

    fn build(
        &self,
        draft: &Draft,
        category: Category,
        id: String,
        created_at: Timestamp,
    ) -> CanonicalPost {
        CanonicalPost {
            id,
            post_type: category,
            title: draft.title.clone(),
            description: draft.description.clone(),
            location: resolve_location(draft),
            display_time: draft
                .date_time()
                .map(|ts| DisplayTime::new(&ts, &self.time_zone).to_string())
                .unwrap_or_default(),
            created_at,
            coordinates: draft.coordinates().map(|c| c.to_pair()),
        }
    }
}

impl Default for PostTransformer {
    fn default() -> Self {
        Self::new(TimeZone::system())
    }
}

fn publishable_category(draft: &Draft) -> Result<Category> {
    let report = validation::check(WizardStep::Details, draft);
    match draft.category() {
        Some(category) if report.passed() => Ok(category),
        _ => Err(WizardError::InvalidDraft {
            unmet: report.unmet(),
        }),
    }
}

/// Primary location, else the pickup location, else empty.
fn resolve_location(draft: &Draft) -> String {
    draft
        .location()
        .filter(|l| !l.is_empty())
        .or_else(|| draft.pickup_location().filter(|l| !l.is_empty()))
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinates, DraftPatch};

    fn ts(second: i64) -> Timestamp {
        Timestamp::from_second(second).unwrap()
    }

    fn donation_draft() -> Draft {
        Draft::default()
            .with_category(Category::Donations)
            .apply_patch(
                &DraftPatch::new()
                    .title("Food Drive Drop-off")
                    .description("Non-perishables accepted")
                    .item_name("Canned food")
                    .pickup_location("Community Center")
                    .contact("555-0100"),
            )
            .unwrap()
    }

    fn event_draft() -> Draft {
        Draft::default()
            .with_category(Category::Events)
            .apply_patch(
                &DraftPatch::new()
                    .title("Cleanup")
                    .description("Bring gloves")
                    .location("Maple Park")
                    .coordinates(Coordinates::new(-73.98, 40.75))
                    .date_time("2026-10-24T14:00:00Z".parse().unwrap())
                    .rsvp_limit(20),
            )
            .unwrap()
    }

    #[test]
    fn test_id_generator_is_strictly_increasing() {
        let mut ids = IdGenerator::new();
        let now = ts(1_800_000_000);

        let first = ids.next_id(now);
        let second = ids.next_id(now);
        let earlier = ids.next_id(ts(1_700_000_000));

        assert_eq!(first, "1800000000000");
        assert_eq!(second, "1800000000001");
        assert_eq!(earlier, "1800000000002");
    }

    #[test]
    fn test_location_falls_back_to_pickup() {
        let mut transformer = PostTransformer::new(TimeZone::UTC);
        let post = transformer.transform(&donation_draft()).unwrap();

        assert_eq!(post.post_type, Category::Donations);
        assert_eq!(post.location, "Community Center");
        assert_eq!(post.display_time, "");
        assert_eq!(post.coordinates, None);
    }

    #[test]
    fn test_event_fields() {
        let mut transformer = PostTransformer::new(TimeZone::UTC);
        let post = transformer
            .transform_at(&event_draft(), ts(1_790_000_000))
            .unwrap();

        assert_eq!(post.post_type, Category::Events);
        assert_eq!(post.location, "Maple Park");
        assert_eq!(post.display_time, "2026-10-24 14:00 UTC");
        assert_eq!(post.coordinates, Some([-73.98, 40.75]));
        assert_eq!(post.created_at, ts(1_790_000_000));
    }

    #[test]
    fn test_transform_twice_differs_only_in_identity() {
        let mut transformer = PostTransformer::new(TimeZone::UTC);
        let draft = event_draft();
        let snapshot = draft.clone();

        let first = transformer.transform(&draft).unwrap();
        let second = transformer.transform(&draft).unwrap();

        assert_ne!(first.id, second.id);
        let normalized = CanonicalPost {
            id: first.id.clone(),
            created_at: first.created_at,
            ..second
        };
        assert_eq!(first, normalized);
        assert_eq!(draft, snapshot);
    }

    #[test]
    fn test_preview_does_not_consume_ids() {
        let mut transformer = PostTransformer::new(TimeZone::UTC);
        let now = ts(1_800_000_000);

        let card = transformer.preview(&event_draft()).unwrap();
        assert_eq!(card.id, "preview");
        assert_eq!(card.display_time, "2026-10-24 14:00 UTC");

        let post = transformer.transform_at(&event_draft(), now).unwrap();
        assert_eq!(post.id, "1800000000000");

        assert!(transformer.preview(&Draft::default()).is_err());
    }

    #[test]
    fn test_rejects_unvalidated_draft() {
        let mut transformer = PostTransformer::new(TimeZone::UTC);
        let draft = Draft::default()
            .with_category(Category::Issues)
            .apply_patch(&DraftPatch::new().title("Pothole").description("Big one"))
            .unwrap();

        let err = transformer.transform(&draft).unwrap_err();
        match err {
            WizardError::InvalidDraft { unmet } => {
                assert_eq!(unmet, vec![validation::Requirement::Location])
            }
            other => panic!("unexpected error: {other}"),
        }

        assert!(matches!(
            transformer.transform(&Draft::default()),
            Err(WizardError::InvalidDraft { .. })
        ));
    }
}
