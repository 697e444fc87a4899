//! Tests for the wizard module.

use std::cell::RefCell;
use std::rc::Rc;

use jiff::Timestamp;

use super::*;
use crate::error::{Result, WizardError};
use crate::models::{Category, Coordinates, Draft, DraftPatch, FieldEdit, FileRef};
use crate::preview::{PreviewHandle, PreviewSource};
use crate::validation::Requirement;

/// Shared record of preview handles issued and released.
#[derive(Default)]
struct HandleLog {
    acquired: usize,
    released: usize,
}

impl HandleLog {
    fn live(&self) -> usize {
        self.acquired - self.released
    }
}

struct CountingSource(Rc<RefCell<HandleLog>>);

impl PreviewSource for CountingSource {
    fn acquire(&mut self, file: &FileRef) -> Result<PreviewHandle> {
        let mut log = self.0.borrow_mut();
        log.acquired += 1;
        Ok(PreviewHandle::new(
            log.acquired as u64,
            format!("blob:{}", file.name()),
        ))
    }

    fn release(&mut self, _handle: PreviewHandle) {
        self.0.borrow_mut().released += 1;
    }
}

/// Helper function to create a test wizard with a counting preview source
fn create_test_wizard() -> (Wizard, Rc<RefCell<HandleLog>>) {
    let log = Rc::new(RefCell::new(HandleLog::default()));
    let wizard = WizardBuilder::new()
        .with_time_zone(Some("UTC"))
        .with_preview_source(CountingSource(Rc::clone(&log)))
        .build()
        .expect("Failed to build wizard");
    (wizard, log)
}

fn event_patch() -> DraftPatch {
    DraftPatch::new()
        .title("Cleanup")
        .description("Bring gloves")
        .location("Maple Park")
        .coordinates(Coordinates::new(-73.98, 40.75))
        .date_time(Timestamp::from_second(1_900_000_000).unwrap())
        .rsvp_limit(20)
}

/// Drives a good deed with an image up to the details step.
fn good_deed_with_image(wizard: &mut Wizard) {
    wizard.select_category(Category::GoodDeeds).unwrap();
    wizard.next();
    wizard
        .apply(
            &DraftPatch::new()
                .title("Lost Cat Found")
                .description("Orange tabby")
                .location("Elm St")
                .image(FileRef::new("cat.png")),
        )
        .unwrap();
}

#[test]
fn test_initial_state() {
    let (wizard, _log) = create_test_wizard();
    assert_eq!(wizard.step(), WizardStep::Category);
    assert_eq!(wizard.draft(), &Draft::default());
    assert_eq!(wizard.image_preview(), None);
    assert!(!wizard.can_advance());
    assert_eq!(wizard.indicator().percent(), 0);
}

#[test]
fn test_events_end_to_end() {
    let (mut wizard, _log) = create_test_wizard();

    wizard.select_category(Category::Events).unwrap();
    assert_eq!(wizard.next(), Advance::Moved(WizardStep::Details));

    wizard.apply(&event_patch()).unwrap();
    assert!(validation::can_advance(WizardStep::Details, wizard.draft()));
    assert_eq!(wizard.next(), Advance::Moved(WizardStep::Preview));
    assert_eq!(wizard.next(), Advance::AtEnd);

    let mut published: Vec<CanonicalPost> = Vec::new();
    let notice = wizard.publish(&mut published).unwrap();

    assert_eq!(notice, Notice::published());
    assert_eq!(published.len(), 1);
    let post = &published[0];
    assert_eq!(post.post_type, Category::Events);
    assert_eq!(post.title, "Cleanup");
    assert_eq!(post.location, "Maple Park");
    assert_eq!(post.coordinates, Some([-73.98, 40.75]));
    assert!(!post.display_time.is_empty());

    assert_eq!(wizard.step(), WizardStep::Category);
    assert_eq!(wizard.draft(), &Draft::default());
}

#[test]
fn test_preview_post_matches_published_card() {
    let (mut wizard, _log) = create_test_wizard();
    wizard.select_category(Category::Events).unwrap();
    assert!(matches!(
        wizard.preview_post(),
        Err(WizardError::InvalidTransition { .. })
    ));

    wizard.next();
    wizard.apply(&event_patch()).unwrap();
    wizard.next();

    let card = wizard.preview_post().unwrap();
    assert_eq!(card.id, "preview");

    let mut published: Vec<CanonicalPost> = Vec::new();
    wizard.publish(&mut published).unwrap();
    let post = &published[0];
    assert_ne!(post.id, card.id);
    assert_eq!(post.title, card.title);
    assert_eq!(post.location, card.location);
    assert_eq!(post.display_time, card.display_time);
    assert_eq!(post.coordinates, card.coordinates);
}

#[test]
fn test_issues_refused_without_location() {
    let (mut wizard, _log) = create_test_wizard();
    wizard.select_category(Category::Issues).unwrap();
    wizard.next();

    wizard
        .apply(&DraftPatch::new().title("Pothole").description("Big one"))
        .unwrap();

    assert!(!validation::can_advance(WizardStep::Details, wizard.draft()));
    match wizard.next() {
        Advance::Refused(report) => assert_eq!(report.unmet(), vec![Requirement::Location]),
        other => panic!("expected refusal, got {other:?}"),
    }
    assert_eq!(wizard.step(), WizardStep::Details);
}

#[test]
fn test_next_refused_without_category() {
    let (mut wizard, _log) = create_test_wizard();
    assert!(matches!(wizard.next(), Advance::Refused(_)));
    assert_eq!(wizard.step(), WizardStep::Category);
}

#[test]
fn test_back_saturates_at_first_step() {
    let (mut wizard, _log) = create_test_wizard();
    assert_eq!(wizard.back(), WizardStep::Category);

    wizard.select_category(Category::Jobs).unwrap();
    wizard.next();
    assert_eq!(wizard.back(), WizardStep::Category);
    assert_eq!(wizard.draft().category(), Some(Category::Jobs));
}

#[test]
fn test_edit_reflected_immediately() {
    let (mut wizard, _log) = create_test_wizard();
    wizard.select_category(Category::GoodDeeds).unwrap();
    wizard.next();

    wizard.edit(FieldEdit::Title("Lost Cat".into())).unwrap();
    wizard.edit(FieldEdit::Description("Orange tabby".into())).unwrap();
    assert!(!wizard.can_advance());

    wizard.edit(FieldEdit::Location("Elm St".into())).unwrap();
    assert!(wizard.can_advance());
    assert!(wizard.report().passed());
}

#[test]
fn test_actions_rejected_on_wrong_step() {
    let (mut wizard, _log) = create_test_wizard();

    let err = wizard.edit(FieldEdit::Title("Early".into())).unwrap_err();
    assert!(matches!(
        err,
        WizardError::InvalidTransition {
            step: WizardStep::Category,
            ..
        }
    ));

    wizard.select_category(Category::Jobs).unwrap();
    wizard.next();
    let err = wizard.select_category(Category::Events).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Cannot select a category during the Details step"
    );
    assert_eq!(wizard.draft().category(), Some(Category::Jobs));
}

#[test]
fn test_publish_gate_cannot_be_bypassed() {
    let (mut wizard, _log) = create_test_wizard();
    let mut published: Vec<CanonicalPost> = Vec::new();

    assert!(matches!(
        wizard.publish(&mut published),
        Err(WizardError::InvalidTransition { .. })
    ));

    wizard.select_category(Category::Events).unwrap();
    wizard.next();
    wizard.edit(FieldEdit::Title("Half done".into())).unwrap();
    assert!(matches!(
        wizard.publish(&mut published),
        Err(WizardError::InvalidTransition {
            step: WizardStep::Details,
            ..
        })
    ));
    assert!(matches!(wizard.next(), Advance::Refused(_)));
    assert!(matches!(
        wizard.publish(&mut published),
        Err(WizardError::InvalidTransition { .. })
    ));

    assert!(published.is_empty());
    assert_eq!(wizard.draft().title, "Half done");
}

#[test]
fn test_back_from_preview_then_invalid_edit_blocks_publish() {
    let (mut wizard, _log) = create_test_wizard();
    wizard.select_category(Category::Events).unwrap();
    wizard.next();
    wizard.apply(&event_patch()).unwrap();
    wizard.next();

    wizard.back();
    wizard.edit(FieldEdit::Location(String::new())).unwrap();
    assert!(matches!(wizard.next(), Advance::Refused(_)));
    assert_eq!(wizard.step(), WizardStep::Details);
}

#[test]
fn test_sink_called_once_per_publish() {
    struct CountingSink(usize);

    impl PublishSink for CountingSink {
        fn on_publish(&mut self, _post: &CanonicalPost) {
            self.0 += 1;
        }
    }

    let (mut wizard, _log) = create_test_wizard();
    let mut sink = CountingSink(0);

    for _ in 0..2 {
        wizard.select_category(Category::Events).unwrap();
        wizard.next();
        wizard.apply(&event_patch()).unwrap();
        wizard.next();
        wizard.publish(&mut sink).unwrap();
    }

    assert_eq!(sink.0, 2);
}

#[test]
fn test_session_ids_are_unique() {
    let (mut wizard, _log) = create_test_wizard();
    let mut published: Vec<CanonicalPost> = Vec::new();

    for _ in 0..3 {
        wizard.select_category(Category::Events).unwrap();
        wizard.next();
        wizard.apply(&event_patch()).unwrap();
        wizard.next();
        wizard.publish(&mut published).unwrap();
    }

    assert_ne!(published[0].id, published[1].id);
    assert_ne!(published[1].id, published[2].id);
    assert_ne!(published[0].id, published[2].id);
}

#[test]
fn test_reset_after_partial_progress() {
    let (mut wizard, log) = create_test_wizard();
    good_deed_with_image(&mut wizard);
    assert_eq!(wizard.image_preview(), Some("blob:cat.png"));
    assert_eq!(log.borrow().live(), 1);

    wizard.reset();

    assert_eq!(wizard.step(), WizardStep::Category);
    assert_eq!(wizard.draft(), &Draft::default());
    assert_eq!(wizard.image_preview(), None);
    assert_eq!(log.borrow().live(), 0);
}

#[test]
fn test_image_replacement_releases_previous_handle() {
    let (mut wizard, log) = create_test_wizard();
    good_deed_with_image(&mut wizard);

    wizard
        .edit(FieldEdit::Image(Some(FileRef::new("dog.png"))))
        .unwrap();
    assert_eq!(wizard.image_preview(), Some("blob:dog.png"));
    assert_eq!(log.borrow().acquired, 2);
    assert_eq!(log.borrow().released, 1);

    wizard.edit(FieldEdit::Image(None)).unwrap();
    assert_eq!(wizard.image_preview(), None);
    assert_eq!(log.borrow().live(), 0);
}

#[test]
fn test_unrelated_edit_keeps_handle() {
    let (mut wizard, log) = create_test_wizard();
    good_deed_with_image(&mut wizard);

    wizard.edit(FieldEdit::Title("Found a cat".into())).unwrap();

    assert_eq!(log.borrow().acquired, 1);
    assert_eq!(log.borrow().released, 0);
}

#[test]
fn test_category_change_releases_handle() {
    let (mut wizard, log) = create_test_wizard();
    good_deed_with_image(&mut wizard);

    wizard.back();
    wizard.select_category(Category::Donations).unwrap();

    assert_eq!(wizard.image_preview(), None);
    assert_eq!(wizard.draft().title, "Lost Cat Found");
    assert_eq!(wizard.draft().image(), None);
    assert_eq!(log.borrow().live(), 0);
}

#[test]
fn test_publish_releases_handle() {
    let (mut wizard, log) = create_test_wizard();
    good_deed_with_image(&mut wizard);
    wizard.next();

    let mut published: Vec<CanonicalPost> = Vec::new();
    wizard.publish(&mut published).unwrap();

    assert_eq!(published[0].location, "Elm St");
    assert_eq!(log.borrow().live(), 0);
}

#[test]
fn test_teardown_releases_handle() {
    let (mut wizard, log) = create_test_wizard();
    good_deed_with_image(&mut wizard);

    wizard.close();
    assert_eq!(log.borrow().live(), 0);

    let (mut abandoned, log) = create_test_wizard();
    good_deed_with_image(&mut abandoned);
    drop(abandoned);
    assert_eq!(log.borrow().live(), 0);
}

#[test]
fn test_dispatch_applies_events_in_order() {
    let (mut wizard, log) = create_test_wizard();
    let mut published: Vec<CanonicalPost> = Vec::new();

    let events = vec![
        WizardEvent::SelectCategory(Category::GoodDeeds),
        WizardEvent::Next,
        WizardEvent::Edit(FieldEdit::Title("Lost Cat Found".into())),
        WizardEvent::Edit(FieldEdit::Description("Orange tabby".into())),
        WizardEvent::Edit(FieldEdit::Image(Some(FileRef::new("a.png")))),
        WizardEvent::Edit(FieldEdit::Image(Some(FileRef::new("b.png")))),
        WizardEvent::Next,
        WizardEvent::Edit(FieldEdit::Location("Elm St".into())),
        WizardEvent::Next,
    ];

    let mut outcomes = Vec::new();
    for event in events {
        outcomes.push(wizard.dispatch(event, &mut published).unwrap());
    }

    assert_eq!(outcomes[1], Outcome::Advance(Advance::Moved(WizardStep::Details)));
    assert!(matches!(outcomes[6], Outcome::Advance(Advance::Refused(_))));
    assert_eq!(outcomes[8], Outcome::Advance(Advance::Moved(WizardStep::Preview)));
    assert!(log.borrow().live() <= 1);

    let outcome = wizard.dispatch(WizardEvent::Publish, &mut published).unwrap();
    assert_eq!(outcome, Outcome::Published(Notice::published()));
    assert_eq!(published.len(), 1);
    assert_eq!(log.borrow().acquired, 2);
    assert_eq!(log.borrow().live(), 0);
}

#[test]
fn test_dispatch_propagates_errors() {
    let (mut wizard, _log) = create_test_wizard();
    let mut published: Vec<CanonicalPost> = Vec::new();

    wizard
        .dispatch(WizardEvent::SelectCategory(Category::Jobs), &mut published)
        .unwrap();
    wizard.dispatch(WizardEvent::Next, &mut published).unwrap();

    let err = wizard
        .dispatch(
            WizardEvent::Edit(FieldEdit::Urgency(Some(5))),
            &mut published,
        )
        .unwrap_err();
    assert!(matches!(err, WizardError::FieldNotApplicable { .. }));

    assert_eq!(
        wizard.dispatch(WizardEvent::Reset, &mut published).unwrap(),
        Outcome::Updated
    );
    assert_eq!(wizard.step(), WizardStep::Category);
}

#[test]
fn test_unknown_time_zone_rejected() {
    let result = WizardBuilder::new()
        .with_time_zone(Some("Not/AZone"))
        .build();
    assert!(matches!(result, Err(WizardError::Configuration { .. })));
}
