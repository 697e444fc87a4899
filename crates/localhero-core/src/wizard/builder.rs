//! Builder for creating and configuring Wizard instances.

use jiff::tz::TimeZone;

use super::Wizard;
use crate::{
    error::{Result, WizardError},
    preview::{FilePreviewSource, ImagePreview, PreviewSource},
    publish::PostTransformer,
};

/// Builder for creating and configuring Wizard instances.
#[derive(Default)]
pub struct WizardBuilder {
    time_zone: Option<String>,
    preview_source: Option<Box<dyn PreviewSource>>,
}

impl WizardBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the IANA time zone used to render event times.
    ///
    /// If not specified, the system time zone is used.
    pub fn with_time_zone<S: AsRef<str>>(mut self, name: Option<S>) -> Self {
        if let Some(name) = name {
            self.time_zone = Some(name.as_ref().to_string());
        }
        self
    }

    /// Sets the source of image preview handles.
    ///
    /// Defaults to [`FilePreviewSource`].
    pub fn with_preview_source(mut self, source: impl PreviewSource + 'static) -> Self {
        self.preview_source = Some(Box::new(source));
        self
    }

    /// Builds the configured wizard.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::Configuration` if the time zone is unknown.
    pub fn build(self) -> Result<Wizard> {
        let time_zone = resolve_time_zone(self.time_zone.as_deref())?;

        let source: Box<dyn PreviewSource> = match self.preview_source {
            Some(source) => source,
            None => Box::new(FilePreviewSource::new()),
        };

        Ok(Wizard::new(
            ImagePreview::new(source),
            PostTransformer::new(time_zone),
        ))
    }
}

/// Resolves an IANA time zone name, defaulting to the system zone.
///
/// `UTC` is accepted in any case without consulting the tz database.
///
/// # Errors
///
/// Returns `WizardError::Configuration` if the name is unknown.
pub fn resolve_time_zone(name: Option<&str>) -> Result<TimeZone> {
    match name {
        None => Ok(TimeZone::system()),
        Some(name) if name.eq_ignore_ascii_case("utc") => Ok(TimeZone::UTC),
        Some(name) => TimeZone::get(name).map_err(|e| WizardError::Configuration {
            message: format!("Unknown time zone '{name}': {e}"),
        }),
    }
}
