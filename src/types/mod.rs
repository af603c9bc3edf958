//! Core types for the schedule pipeline
//!
//! This module contains the identifier newtypes, the raw/canonical date
//! representations, and the run configuration.

pub mod canonical;
pub mod config;
pub mod identifiers;
pub mod raw_date;

pub use canonical::{CanonicalDate, CANONICAL_FORMAT};
pub use config::{CliArgs, ConfigError, OutputFormat, ScheduleConfig, DEFAULT_TIMEZONE};
pub use identifiers::{FormationId, StructureId};
pub use raw_date::{DateContainer, NestedDateValue, RawDateValue};
