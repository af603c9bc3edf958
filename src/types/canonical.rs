//! Canonical calendar-date representation
//!
//! Every raw date value that survives normalization ends up as a
//! [`CanonicalDate`]: a `YYYY-MM-DD` string. Keeping the string form (rather
//! than a parsed date) matters because bucket ordering is defined as
//! lexicographic comparison on this form, which coincides with chronological
//! order for valid dates and lets the sorter use plain fallback strings for
//! records without a date.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// The `YYYY-MM-DD` formatting pattern shared by normalization and display
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d";

/// A calendar date in canonical `YYYY-MM-DD` form
///
/// Ordering is the derived string ordering, which is chronological for
/// values in this form. "No date" is represented as `Option::None` by the
/// callers, never as a special `CanonicalDate` value; the two fallback
/// constructors exist only as sort keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CanonicalDate(String);

impl CanonicalDate {
    /// Canonicalize a parsed calendar date
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date.format(CANONICAL_FORMAT).to_string())
    }

    /// Validate and wrap an existing `YYYY-MM-DD` string
    pub fn parse(s: &str) -> Option<Self> {
        NaiveDate::parse_from_str(s, CANONICAL_FORMAT).ok().map(Self::from_naive)
    }

    /// Sort key used for upcoming records without a date (sorts last ascending)
    pub fn future_fallback() -> Self {
        Self("9999-12-31".to_string())
    }

    /// Sort key used for past records without a date (sorts last descending)
    pub fn past_fallback() -> Self {
        Self("0000-01-01".to_string())
    }

    /// The canonical string form
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<NaiveDate> for CanonicalDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_naive(date)
    }
}

impl<'de> Deserialize<'de> for CanonicalDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CanonicalDate::parse(&s).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid canonical date '{}'", s))
        })
    }
}
