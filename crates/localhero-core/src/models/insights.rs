//! Community insight statistics over a set of feed posts.

use jiff::{civil::Date, tz::TimeZone, Span};
use serde::{Deserialize, Serialize};

use super::{CanonicalPost, Category};

/// Number of days covered by [`FeedInsights::weekly`].
pub const ACTIVITY_DAYS: usize = 7;

/// Post count for one category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: Category,
    pub count: u32,
}

/// Posts created on one local calendar day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyActivity {
    pub date: Date,
    pub count: u32,
}

/// Breakdown, weekly activity and sentiment of a feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FeedInsights {
    /// Number of posts considered
    pub total: u32,
    /// One entry per category, in [`Category::ALL`] order
    pub by_category: Vec<CategoryCount>,
    /// The last seven local days, oldest first and ending today
    pub weekly: Vec<DailyActivity>,
    /// Good deeds, donations and events
    pub positive: u32,
    pub issues: u32,
    /// `positive` as a rounded share of `positive + issues`; jobs count
    /// toward neither side
    pub positive_percent: u32,
}

impl FeedInsights {
    /// Computes insights for `posts`, bucketing creation times into local
    /// dates of `time_zone` and ending the weekly window at `today`.
    pub fn from_posts(posts: &[CanonicalPost], today: Date, time_zone: &TimeZone) -> Self {
        let by_category: Vec<CategoryCount> = Category::ALL
            .iter()
            .map(|&category| CategoryCount {
                category,
                count: posts.iter().filter(|p| p.post_type == category).count() as u32,
            })
            .collect();

        let mut days: Vec<Date> = today
            .series(Span::new().days(-1))
            .take(ACTIVITY_DAYS)
            .collect();
        days.reverse();

        let mut weekly: Vec<DailyActivity> = days
            .into_iter()
            .map(|date| DailyActivity { date, count: 0 })
            .collect();
        for post in posts {
            let date = post.created_at.to_zoned(time_zone.clone()).date();
            if let Some(day) = weekly.iter_mut().find(|day| day.date == date) {
                day.count += 1;
            }
        }

        let positive = posts.iter().filter(|p| is_positive(p.post_type)).count() as u32;
        let issues = posts
            .iter()
            .filter(|p| p.post_type == Category::Issues)
            .count() as u32;

        Self {
            total: posts.len() as u32,
            by_category,
            weekly,
            positive,
            issues,
            positive_percent: rounded_percent(positive, positive + issues),
        }
    }

    /// Count for a single category.
    pub fn count(&self, category: Category) -> u32 {
        self.by_category
            .iter()
            .find(|c| c.category == category)
            .map_or(0, |c| c.count)
    }
}

fn is_positive(category: Category) -> bool {
    matches!(
        category,
        Category::GoodDeeds | Category::Donations | Category::Events
    )
}

/// `part / whole` as a percentage rounded half up; an empty whole is 0%.
fn rounded_percent(part: u32, whole: u32) -> u32 {
    let whole = whole.max(1);
    (part * 100 + whole / 2) / whole
}
