//! Best-effort fallback parsing for free-form date strings
//!
//! When a string matches none of the fixed field formats, the normalizer
//! makes one last attempt here before giving up. Only absolute expressions
//! are accepted: relative words ("tomorrow", "next week") would make the
//! result depend on when the pipeline happens to run, and normalization is
//! required to be a pure function of the raw value and the configured zone.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// ISO-style datetime layouts without an offset
const DATETIME_LAYOUTS: [&str; 3] =
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Month-name layouts, full and abbreviated names in either position
const MONTH_NAME_LAYOUTS: [&str; 6] = [
    "%d %B %Y",  // 25 December 2024
    "%d %b %Y",  // 25 Dec 2024
    "%B %d, %Y", // December 25, 2024
    "%b %d, %Y", // Dec 25, 2024
    "%B %d %Y",  // December 25 2024
    "%b %d %Y",  // Dec 25 2024
];

/// Parse a free-form date string, best effort
///
/// The offset of an RFC 3339/2822 value is not converted away; the calendar
/// date is taken as written, matching how the fixed-format branch treats
/// datetime strings.
pub(crate) fn parse(input: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(input) {
        return Some(datetime.date_naive());
    }
    if let Ok(datetime) = DateTime::parse_from_rfc2822(input) {
        return Some(datetime.date_naive());
    }
    for layout in DATETIME_LAYOUTS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(input, layout) {
            return Some(datetime.date());
        }
    }
    for layout in MONTH_NAME_LAYOUTS {
        if let Ok(date) = NaiveDate::parse_from_str(input, layout) {
            return Some(date);
        }
    }
    None
}
