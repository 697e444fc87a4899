//! DateTime display utilities.
//!
//! This module provides wrapper types for formatting timestamps in a
//! consistent, human-readable format.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// A wrapper around `Timestamp` that formats it in the system timezone.
///
/// # Format
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM:SS TZ`
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Event time as shown on a post card, in an explicit timezone.
///
/// The format is `YYYY-MM-DD HH:MM TZ`, e.g. `2026-10-24 10:00 EDT`.
///
/// # Examples
///
/// ```rust
/// use jiff::{tz::TimeZone, Timestamp};
/// use localhero_core::display::DisplayTime;
///
/// let ts: Timestamp = "2026-10-24T14:00:00Z".parse().unwrap();
/// let text = DisplayTime::new(&ts, &TimeZone::UTC).to_string();
/// assert_eq!(text, "2026-10-24 14:00 UTC");
/// ```
pub struct DisplayTime<'a> {
    timestamp: &'a Timestamp,
    time_zone: &'a TimeZone,
}

impl<'a> DisplayTime<'a> {
    pub fn new(timestamp: &'a Timestamp, time_zone: &'a TimeZone) -> Self {
        Self {
            timestamp,
            time_zone,
        }
    }
}

impl<'a> fmt::Display for DisplayTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.timestamp
                .to_zoned(self.time_zone.clone())
                .strftime("%Y-%m-%d %H:%M %Z")
        )
    }
}
