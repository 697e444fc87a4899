//! Display of community insights.

use std::fmt;

use crate::models::FeedInsights;

const BAR_WIDTH: u32 = 20;

impl fmt::Display for FeedInsights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Community Insights")?;
        writeln!(f)?;

        writeln!(f, "## Post Breakdown")?;
        writeln!(f)?;
        for entry in &self.by_category {
            writeln!(f, "- {}: {}", entry.category, entry.count)?;
        }
        writeln!(f, "- Total: {}", self.total)?;
        writeln!(f)?;

        writeln!(f, "## Weekly Activity")?;
        writeln!(f)?;
        for day in &self.weekly {
            writeln!(f, "- {}: {}", day.date.strftime("%a %b %-d"), day.count)?;
        }
        writeln!(f)?;

        writeln!(f, "## Community Sentiment")?;
        writeln!(f)?;
        let filled = (self.positive_percent * BAR_WIDTH + 50) / 100;
        writeln!(
            f,
            "Positive vs. Issues: {} to {} `{}{}`",
            self.positive,
            self.issues,
            "#".repeat(filled as usize),
            "-".repeat((BAR_WIDTH - filled) as usize)
        )?;
        writeln!(f, "**{}% positive**", self.positive_percent)
    }
}
