//! Date normalization
//!
//! [`DateNormalizer`] turns a raw date field value into a canonical
//! `YYYY-MM-DD` string, or absent. It is total: malformed input never
//! produces an error, only `None`. Given the same raw value and zone the
//! result is always the same; nothing here reads the wall clock.
//!
//! Branch priority, matching the content-store field semantics:
//!
//! 1. Missing or falsy values (no value, empty string, zero timestamp)
//!    are absent.
//! 2. Structured values with an offset are converted into the configured
//!    zone before formatting; a structured value without zone semantics is
//!    formatted directly. Converting first avoids off-by-one-day results
//!    near zone boundaries.
//! 3. Numeric timestamps are formatted as UTC calendar dates with no zone
//!    conversion. This differs from branch 2 on purpose: the stored values
//!    are assumed to already sit on a local day boundary.
//! 4. Strings are trimmed; digit-only strings are epoch values and take
//!    branch 3. Everything else is matched against seven fixed layouts in
//!    priority order, whole string only; the best-effort fallback parser
//!    runs when none match.
//! 5. A wrapper mapping is unwrapped once (`date` key before `value`);
//!    nested timestamps use the numeric branch, nested strings only the
//!    fallback parser. No deeper recursion.
//! 6. Everything else is absent.
//!
//! An optional [`DiagnosticSink`] observes which branch each value took.
//! The sink never influences the result.

use crate::schedule::natural;
use crate::types::{CanonicalDate, NestedDateValue, RawDateValue};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use chrono_tz::Tz;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// The seven fixed string layouts, tried in order; the flag marks layouts
/// carrying a time component
const TEXT_LAYOUTS: [(&str, bool); 7] = [
    ("%Y-%m-%d %H:%M:%S", true), // store datetime
    ("%Y-%m-%d", false),         // canonical date
    ("%d/%m/%Y", false),         // French
    ("%m/%d/%Y", false),         // US
    ("%Y/%m/%d", false),         // ISO with slashes
    ("%d-%m-%Y", false),         // European with dashes
    ("%m-%d-%Y", false),         // US with dashes
];

/// Which normalization branch handled a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizationBranch {
    /// No value, or a falsy one
    Missing,
    /// Structured value with an offset, converted into the configured zone
    ZonedObject,
    /// Structured value without zone semantics, formatted directly
    NaiveObject,
    /// Epoch-seconds timestamp
    Timestamp,
    /// String matched one of the fixed layouts
    TextLayout(&'static str),
    /// String went through the best-effort fallback parser
    TextFallback,
    /// Wrapper mapping holding a timestamp
    ContainerTimestamp,
    /// Wrapper mapping holding a string, fallback parser only
    ContainerFallback,
    /// Shape with no normalization rule
    Unrecognized,
}

/// One normalization decision, as seen by a diagnostic sink
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizationTrace {
    /// The branch that handled the value
    pub branch: NormalizationBranch,
    /// The canonical result, absent when normalization failed
    pub outcome: Option<CanonicalDate>,
}

/// Observer for normalization decisions
///
/// Purely operational: implementations must not assume their output affects
/// the pipeline, because it never does.
pub trait DiagnosticSink: Send + Sync {
    /// Called once per normalized value
    fn record(&self, trace: &NormalizationTrace);
}

/// Diagnostic sink that emits each trace as a `tracing` debug event
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, trace: &NormalizationTrace) {
        match &trace.outcome {
            Some(date) => debug!(branch = ?trace.branch, %date, "date normalized"),
            None => debug!(branch = ?trace.branch, "date not normalizable"),
        }
    }
}

/// Normalizes raw date field values into canonical calendar dates
#[derive(Clone)]
pub struct DateNormalizer {
    zone: Tz,
    diagnostics: Option<Arc<dyn DiagnosticSink>>,
}

impl fmt::Debug for DateNormalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateNormalizer")
            .field("zone", &self.zone)
            .field("diagnostics", &self.diagnostics.is_some())
            .finish()
    }
}

impl DateNormalizer {
    /// Create a normalizer targeting the given zone
    pub fn new(zone: Tz) -> Self {
        Self { zone, diagnostics: None }
    }

    /// Attach a diagnostic sink
    pub fn with_diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = Some(sink);
        self
    }

    /// The zone structured values are converted into
    pub fn zone(&self) -> Tz {
        self.zone
    }

    /// Normalize a raw date field value
    ///
    /// Total: malformed input yields `None`, never an error.
    pub fn normalize(&self, value: Option<&RawDateValue>) -> Option<CanonicalDate> {
        let (branch, outcome) = self.normalize_inner(value);
        if let Some(sink) = &self.diagnostics {
            sink.record(&NormalizationTrace { branch, outcome: outcome.clone() });
        }
        outcome
    }

    fn normalize_inner(
        &self,
        value: Option<&RawDateValue>,
    ) -> (NormalizationBranch, Option<CanonicalDate>) {
        let value = match value {
            None => return (NormalizationBranch::Missing, None),
            Some(value) => value,
        };

        match value {
            // Falsy values from the store mean "no date was ever set"
            RawDateValue::Text(s) if s.is_empty() => (NormalizationBranch::Missing, None),
            RawDateValue::Timestamp(0) => (NormalizationBranch::Missing, None),

            RawDateValue::Zoned { datetime } => {
                let local = datetime.with_timezone(&self.zone);
                (
                    NormalizationBranch::ZonedObject,
                    Some(CanonicalDate::from_naive(local.date_naive())),
                )
            }
            RawDateValue::Naive { datetime } => (
                NormalizationBranch::NaiveObject,
                Some(CanonicalDate::from_naive(datetime.date())),
            ),
            RawDateValue::Timestamp(seconds) => match epoch_date(*seconds) {
                Some(date) => {
                    (NormalizationBranch::Timestamp, Some(CanonicalDate::from_naive(date)))
                }
                None => (NormalizationBranch::Unrecognized, None),
            },
            RawDateValue::Text(text) => normalize_text(text),
            RawDateValue::Container(container) => match container.payload() {
                Some(NestedDateValue::Timestamp(0)) | None => {
                    (NormalizationBranch::Missing, None)
                }
                Some(NestedDateValue::Timestamp(seconds)) => match epoch_date(*seconds) {
                    Some(date) => (
                        NormalizationBranch::ContainerTimestamp,
                        Some(CanonicalDate::from_naive(date)),
                    ),
                    None => (NormalizationBranch::Unrecognized, None),
                },
                Some(NestedDateValue::Text(text)) => (
                    NormalizationBranch::ContainerFallback,
                    natural::parse(text.trim()).map(CanonicalDate::from_naive),
                ),
                Some(NestedDateValue::Other(_)) => (NormalizationBranch::Unrecognized, None),
            },
            RawDateValue::Other(_) => (NormalizationBranch::Unrecognized, None),
        }
    }
}

/// Normalize a non-empty string value
fn normalize_text(text: &str) -> (NormalizationBranch, Option<CanonicalDate>) {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return (NormalizationBranch::Missing, None);
    }

    // The store sometimes delivers epoch values as digit strings; they take
    // the numeric branch ahead of the layout list, like the typed form.
    // "0" counts as falsy, same as a zero timestamp.
    if let Ok(seconds) = trimmed.parse::<i64>() {
        if seconds == 0 {
            return (NormalizationBranch::Missing, None);
        }
        return match epoch_date(seconds) {
            Some(date) => {
                (NormalizationBranch::Timestamp, Some(CanonicalDate::from_naive(date)))
            }
            None => (NormalizationBranch::Unrecognized, None),
        };
    }

    for (layout, has_time) in TEXT_LAYOUTS {
        // parse_from_str rejects leftover input, so a hit consumed the
        // whole string
        let parsed = if has_time {
            NaiveDateTime::parse_from_str(trimmed, layout)
                .ok()
                .map(|datetime| datetime.date())
        } else {
            NaiveDate::parse_from_str(trimmed, layout).ok()
        };
        if let Some(date) = parsed {
            return (
                NormalizationBranch::TextLayout(layout),
                Some(CanonicalDate::from_naive(date)),
            );
        }
    }

    (
        NormalizationBranch::TextFallback,
        natural::parse(trimmed).map(CanonicalDate::from_naive),
    )
}

/// Interpret epoch seconds as a UTC calendar date, no zone conversion
fn epoch_date(seconds: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(seconds, 0).map(|datetime| datetime.date_naive())
}
