//! Structure records (organizations owning formations)

use crate::catalog::Formation;
use crate::types::StructureId;
use serde::{Deserialize, Serialize};

/// One organization record, owner of zero or more formations
///
/// Structures live in the external content store; only the fields needed to
/// group and present their sessions are carried here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    /// Stable content-store identifier
    pub id: StructureId,
    /// Organization name
    pub name: String,
    /// Identifier of the account owning the record, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<u64>,
}

impl Structure {
    /// Create a structure record
    pub fn new(id: StructureId, name: impl Into<String>) -> Self {
        Self { id, name: name.into(), owner_id: None }
    }

    /// The formations linked to this structure, in their input order
    pub fn formations<'a>(&self, formations: &'a [Formation]) -> Vec<&'a Formation> {
        formations
            .iter()
            .filter(|f| f.structure_id == Some(self.id))
            .collect()
    }
}

/// Sort structures by name, ascending, the order the listing page uses
pub fn sort_by_name(structures: &mut [Structure]) {
    structures.sort_by(|a, b| a.name.cmp(&b.name));
}
