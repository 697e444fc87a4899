//! Display of wizard outcomes: refused steps and publish notices.

use std::fmt;

use crate::validation::ValidationReport;
use crate::wizard::Notice;

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unmet = self.unmet();
        if unmet.is_empty() {
            return writeln!(f, "All requirements met.");
        }

        writeln!(f, "Missing required fields:")?;
        for requirement in unmet {
            writeln!(f, "- {requirement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "✓ {}", self.title)?;
        writeln!(f, "{}", self.description)
    }
}
