//! Catalog records read from the external content store
//!
//! Two linked record types make up the catalog:
//!
//! - **Structure**: an organization owning zero or more formations
//! - **Formation**: one training session, linked to a structure by id
//!
//! Input documents come in two shapes: a bare JSON array of formations, or a
//! catalog object carrying both record types. [`CatalogDocument`] accepts
//! either.

pub mod formation;
pub mod structure;

pub use formation::Formation;
pub use structure::{sort_by_name, Structure};

use serde::Deserialize;

/// An input document in either accepted shape
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CatalogDocument {
    /// Catalog object with structures and their formations
    Catalog {
        /// Organization records
        #[serde(default)]
        structures: Vec<Structure>,
        /// Training session records
        #[serde(default)]
        formations: Vec<Formation>,
    },
    /// Bare array of formation records
    Formations(Vec<Formation>),
}

impl CatalogDocument {
    /// Split the document into its structure and formation lists
    pub fn into_parts(self) -> (Vec<Structure>, Vec<Formation>) {
        match self {
            CatalogDocument::Catalog { structures, formations } => (structures, formations),
            CatalogDocument::Formations(formations) => (Vec::new(), formations),
        }
    }
}
