//! Formation records (training sessions)

use crate::types::{CanonicalDate, FormationId, RawDateValue, StructureId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One training session as read from the external content store
///
/// The record is read-only to this crate except for `normalized_date`, a
/// transient annotation filled in during classification so the sorter and
/// the renderer never recompute normalization. It is serialized for display
/// but never read back from input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formation {
    /// Stable content-store identifier
    pub id: FormationId,
    /// Session title
    pub title: String,
    /// Raw date field value, in whatever shape the store persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<RawDateValue>,
    /// Identifier of the owning structure, when linked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure_id: Option<StructureId>,
    /// Free-text venue description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Free-text session body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Publication date of the record, used as a last-resort schedule date
    /// when the raw date field cannot be normalized
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<NaiveDate>,
    /// Canonical schedule date computed during classification
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub normalized_date: Option<CanonicalDate>,
}

impl Formation {
    /// Create a record with only the required fields set
    pub fn new(id: FormationId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            date: None,
            structure_id: None,
            location: None,
            description: None,
            published: None,
            normalized_date: None,
        }
    }

    /// Set the raw date field
    pub fn with_date(mut self, date: RawDateValue) -> Self {
        self.date = Some(date);
        self
    }

    /// Link the session to its owning structure
    pub fn with_structure(mut self, structure_id: StructureId) -> Self {
        self.structure_id = Some(structure_id);
        self
    }

    /// Set the publication date fallback
    pub fn with_published(mut self, published: NaiveDate) -> Self {
        self.published = Some(published);
        self
    }

    /// The canonical schedule date, if classification derived one
    pub fn schedule_date(&self) -> Option<&CanonicalDate> {
        self.normalized_date.as_ref()
    }
}
