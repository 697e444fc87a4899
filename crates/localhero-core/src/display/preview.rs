//! Draft summary shown next to the preview card.

use std::fmt;

use crate::models::{CategoryDetails, Draft};

/// Newtype wrapper listing the category-specific values of a draft.
///
/// Only values the active category carries and that are filled in are
/// listed, so the summary matches what the preview step shows beside the
/// post card.
pub struct DraftSummary<'a>(pub &'a Draft);

impl<'a> fmt::Display for DraftSummary<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(details) = &self.0.details else {
            return writeln!(f, "- Category: none selected");
        };
        writeln!(f, "- Category: {}", details.category())?;

        match details {
            CategoryDetails::Events(d) => {
                if let Some(limit) = d.rsvp_limit {
                    writeln!(f, "- RSVP Limit: {limit}")?;
                }
            }
            CategoryDetails::Issues(d) => {
                if let Some(urgency) = d.urgency {
                    writeln!(f, "- Urgency: {urgency}/5")?;
                }
            }
            CategoryDetails::Jobs(d) => {
                if !d.company.is_empty() {
                    writeln!(f, "- Company: {}", d.company)?;
                }
                if !d.pay.is_empty() {
                    writeln!(f, "- Pay: {}", d.pay)?;
                }
            }
            CategoryDetails::GoodDeeds(d) => {
                if let Some(image) = &d.image {
                    writeln!(f, "- Image: {}", image.name())?;
                }
            }
            CategoryDetails::Donations(d) => {
                if !d.item_name.is_empty() {
                    match d.condition {
                        Some(condition) => writeln!(f, "- Item: {} ({condition})", d.item_name)?,
                        None => writeln!(f, "- Item: {}", d.item_name)?,
                    }
                }
                if !d.contact.is_empty() {
                    writeln!(f, "- Contact: {}", d.contact)?;
                }
            }
        }
        Ok(())
    }
}
