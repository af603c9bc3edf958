//! Identifier types for the schedule pipeline
//!
//! This module contains the integer-backed identifier types for formations
//! (training sessions) and structures (the organizations that own them).
//! The identifiers mirror the numeric post identifiers assigned by the
//! external content store; this crate never allocates them itself.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Unique identifier for a formation (training session)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FormationId(pub u64);

impl FormationId {
    /// Wrap a raw content-store identifier
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw numeric identifier
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for FormationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FORMATION_{}", self.0)
    }
}

impl Serialize for FormationId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.0)
    }
}

impl<'de> Deserialize<'de> for FormationId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = u64::deserialize(deserializer)?;
        Ok(FormationId(id))
    }
}

/// Unique identifier for a structure (organization owning formations)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StructureId(pub u64);

impl StructureId {
    /// Wrap a raw content-store identifier
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw numeric identifier
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for StructureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "STRUCTURE_{}", self.0)
    }
}

impl Serialize for StructureId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.0)
    }
}

impl<'de> Deserialize<'de> for StructureId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = u64::deserialize(deserializer)?;
        Ok(StructureId(id))
    }
}
