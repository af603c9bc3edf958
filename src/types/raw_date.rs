//! Raw date field values as delivered by the external content store
//!
//! The store's custom-field layer hands back the session date in whatever
//! shape the editing plugin happened to persist: a formatted string, an
//! epoch-seconds number, a structured datetime object (with or without zone
//! information), or a wrapper mapping holding one of the simpler shapes
//! under a well-known key. [`RawDateValue`] models every shape as one arm
//! of a tagged union so normalization can handle each exhaustively instead
//! of sniffing runtime types.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A raw date value in one of the shapes the content store produces
///
/// Deserialized untagged from JSON: numbers become [`Timestamp`], strings
/// become [`Text`], objects carrying a `datetime` key become [`Zoned`] or
/// [`Naive`] depending on whether an offset is present, and objects carrying
/// a `date`/`value` key become [`Container`]. Any other JSON shape falls
/// through to [`Other`] and normalizes to absent.
///
/// [`Timestamp`]: RawDateValue::Timestamp
/// [`Text`]: RawDateValue::Text
/// [`Zoned`]: RawDateValue::Zoned
/// [`Naive`]: RawDateValue::Naive
/// [`Container`]: RawDateValue::Container
/// [`Other`]: RawDateValue::Other
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDateValue {
    /// Structured datetime carrying its own UTC offset; converted into the
    /// configured zone before formatting
    Zoned {
        /// The offset-aware point in time
        datetime: DateTime<FixedOffset>,
    },
    /// Structured datetime without zone semantics; formatted as-is
    Naive {
        /// The zone-less point in time
        datetime: NaiveDateTime,
    },
    /// Epoch-seconds timestamp
    Timestamp(i64),
    /// Formatted date string in one of several known layouts
    Text(String),
    /// Wrapper mapping holding a nested value under `date` or `value`
    Container(DateContainer),
    /// Any shape not covered above; always normalizes to absent
    Other(serde_json::Value),
}

impl RawDateValue {
    /// Short label for the shape, used in diagnostics
    pub fn shape(&self) -> &'static str {
        match self {
            RawDateValue::Zoned { .. } => "zoned_object",
            RawDateValue::Naive { .. } => "naive_object",
            RawDateValue::Timestamp(_) => "timestamp",
            RawDateValue::Text(_) => "text",
            RawDateValue::Container(_) => "container",
            RawDateValue::Other(_) => "other",
        }
    }
}

/// Wrapper mapping produced by the store's structured date fields
///
/// Two key names can carry the payload; `date` takes priority over `value`
/// when both are present. The payload is limited to the simple shapes —
/// the store never nests wrappers, and normalization does not recurse
/// further either way.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DateContainer {
    /// Primary payload key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NestedDateValue>,
    /// Secondary payload key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<NestedDateValue>,
}

impl DateContainer {
    /// The nested payload, honoring the `date`-before-`value` priority
    pub fn payload(&self) -> Option<&NestedDateValue> {
        self.date.as_ref().or(self.value.as_ref())
    }
}

/// Simple value nested inside a [`DateContainer`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NestedDateValue {
    /// Epoch-seconds timestamp
    Timestamp(i64),
    /// Date string, parsed via the best-effort fallback only
    Text(String),
    /// Anything else, including a further nested wrapper; normalizes to absent
    Other(serde_json::Value),
}
