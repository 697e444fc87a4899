#[cfg(test)]
mod display_tests {
    use jiff::{civil::date, tz::TimeZone, Timestamp};

    use crate::{
        display::{DraftSummary, Posts, StepIndicator},
        models::{
            CanonicalPost, Category, Condition, Draft, DraftPatch, FeedInsights, FileRef,
            WizardStep,
        },
        validation,
        wizard::Notice,
    };

    fn post(id: &str, title: &str) -> CanonicalPost {
        CanonicalPost {
            id: id.to_string(),
            post_type: Category::Events,
            title: title.to_string(),
            description: "Bring gloves and water.".to_string(),
            location: "Maple Park".to_string(),
            display_time: "2026-10-24 14:00 UTC".to_string(),
            created_at: "2026-10-18T09:00:00Z".parse::<Timestamp>().unwrap(),
            coordinates: Some([-73.99, 40.74]),
        }
    }

    #[test]
    fn test_post_card() {
        let output = post("42", "Park Cleanup").to_string();

        assert!(output.starts_with("## Park Cleanup\n"));
        assert!(output.contains("- Type: Events"));
        assert!(output.contains("- ID: 42"));
        assert!(output.contains("- Location: Maple Park"));
        assert!(output.contains("- When: 2026-10-24 14:00 UTC"));
        assert!(output.contains("- Map: -73.99, 40.74"));
        assert!(output.contains("- Posted: "));
        assert!(output.ends_with("Bring gloves and water.\n"));
    }

    #[test]
    fn test_post_card_omits_empty_fields() {
        let mut card = post("7", "Winter Coats");
        card.post_type = Category::Donations;
        card.location = String::new();
        card.display_time = String::new();
        card.coordinates = None;

        let output = card.to_string();
        assert!(output.contains("- Type: Donations"));
        assert!(!output.contains("- Location:"));
        assert!(!output.contains("- When:"));
        assert!(!output.contains("- Map:"));
    }

    #[test]
    fn test_posts_listing() {
        assert_eq!(Posts::default().to_string(), "No posts found.\n");

        let posts = Posts(vec![post("2", "Second"), post("1", "First")]);
        let output = posts.to_string();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, "2");
        let second = output.find("## Second").unwrap();
        let first = output.find("## First").unwrap();
        assert!(second < first);
    }

    #[test]
    fn test_step_indicator() {
        assert_eq!(StepIndicator::new(WizardStep::Category).percent(), 0);
        assert_eq!(StepIndicator::new(WizardStep::Details).percent(), 50);
        assert_eq!(StepIndicator::new(WizardStep::Preview).percent(), 100);

        let first = StepIndicator::new(WizardStep::Category).to_string();
        assert!(first.starts_with("[--------------------] 0%"));
        assert!(first.contains("● 1 Category  ○ 2 Details  ○ 3 Preview"));

        let last = StepIndicator::new(WizardStep::Preview).to_string();
        assert!(last.starts_with("[####################] 100%"));
        assert!(last.contains("● 1 Category  ● 2 Details  ● 3 Preview"));
    }

    #[test]
    fn test_draft_summary() {
        assert_eq!(
            DraftSummary(&Draft::default()).to_string(),
            "- Category: none selected\n"
        );

        let donation = Draft::default()
            .with_category(Category::Donations)
            .apply_patch(
                &DraftPatch::new()
                    .item_name("Winter Coat")
                    .condition(Condition::Excellent)
                    .contact("555-0100"),
            )
            .unwrap();
        let output = DraftSummary(&donation).to_string();
        assert!(output.contains("- Category: Donations"));
        assert!(output.contains("- Item: Winter Coat (Excellent)"));
        assert!(output.contains("- Contact: 555-0100"));

        let deed = Draft::default()
            .with_category(Category::GoodDeeds)
            .apply_patch(&DraftPatch::new().image(FileRef::new("/tmp/photos/fence.jpg")))
            .unwrap();
        assert!(DraftSummary(&deed).to_string().contains("- Image: fence.jpg"));

        let issue = Draft::default().with_category(Category::Issues);
        assert!(DraftSummary(&issue).to_string().contains("- Urgency: 3/5"));
    }

    #[test]
    fn test_validation_report() {
        let draft = Draft::default().with_category(Category::Jobs);
        let output = validation::check(WizardStep::Details, &draft).to_string();
        assert_eq!(
            output,
            "Missing required fields:\n- title\n- description\n- company\n- location\n- pay\n"
        );

        let output = validation::check(WizardStep::Category, &draft).to_string();
        assert_eq!(output, "All requirements met.\n");
    }

    #[test]
    fn test_notice() {
        assert_eq!(
            Notice::published().to_string(),
            "✓ Post published\nYour community post is live!\n"
        );
    }

    #[test]
    fn test_feed_insights() {
        let mut issue = post("2", "Pothole");
        issue.post_type = Category::Issues;
        let posts = [post("1", "Park Cleanup"), post("3", "Book Swap"), issue];

        let output =
            FeedInsights::from_posts(&posts, date(2026, 10, 18), &TimeZone::UTC).to_string();

        assert!(output.starts_with("# Community Insights\n\n## Post Breakdown\n\n- Events: 2\n"));
        assert!(output
            .contains("- Issues: 1\n- Jobs: 0\n- Good Deeds: 0\n- Donations: 0\n- Total: 3\n"));
        assert!(output.contains("- Mon Oct 12: 0\n"));
        assert!(output.contains("- Sun Oct 18: 3\n"));
        assert!(output.contains("Positive vs. Issues: 2 to 1 `#############-------`\n"));
        assert!(output.ends_with("**67% positive**\n"));
    }
}
