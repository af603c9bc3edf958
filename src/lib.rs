//! Formation Schedule
//!
//! A batch pipeline that turns heterogeneous training-session date fields
//! into canonical calendar dates and partitions the sessions into upcoming
//! and past schedules.
//!
//! # Overview
//!
//! The records come from an external content store whose custom-field layer
//! persists dates in several shapes: formatted strings in half a dozen
//! layouts, epoch-seconds timestamps, structured datetime objects with or
//! without zone information, and wrapper mappings around any of those. This
//! crate normalizes every shape into a single `YYYY-MM-DD` form, compares
//! each record against "today" in a configured IANA time zone, and produces
//! two deterministically ordered lists ready for display.
//!
//! ## Key Properties
//!
//! - **Total normalization**: malformed input degrades to "absent", never an error
//! - **Pure given its inputs**: the wall clock is read once per run, and only
//!   to derive the reference date
//! - **Deterministic ordering**: stable sorts with fixed fallback keys for
//!   undated records
//! - **Optional diagnostics**: a hook observes which branch handled each
//!   value without ever affecting the result
//!
//! ## Quick Start
//!
//! ```rust
//! use formation_schedule::{
//!     DateNormalizer, Formation, FormationId, RawDateValue, RequestClock, SchedulePipeline,
//! };
//! use chrono::NaiveDate;
//!
//! let pipeline = SchedulePipeline::new(
//!     DateNormalizer::new(chrono_tz::Europe::Paris),
//!     RequestClock::fixed(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()),
//! );
//!
//! let buckets = pipeline.run(vec![
//!     Formation::new(FormationId::new(1), "Spring session")
//!         .with_date(RawDateValue::Text("2024-03-05".to_string())),
//!     Formation::new(FormationId::new(2), "Winter session")
//!         .with_date(RawDateValue::Text("01/12/2023".to_string())),
//! ]);
//!
//! assert_eq!(buckets.upcoming.len(), 1);
//! assert_eq!(buckets.past.len(), 1);
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: identifiers, raw/canonical date representations, configuration
//! - [`catalog`]: formation and structure records, input document handling
//! - [`schedule`]: normalization, classification, ordering, pipeline wiring

#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod catalog;
pub mod schedule;
pub mod types;

// Re-export all public types for convenience

// Core types and identifiers
pub use types::{
    CanonicalDate,
    CliArgs,
    ConfigError,
    DateContainer,
    // Identifiers
    FormationId,
    NestedDateValue,
    OutputFormat,
    // Raw date shapes
    RawDateValue,
    // Configuration
    ScheduleConfig,
    StructureId,
};

// Catalog records
pub use catalog::{CatalogDocument, Formation, Structure};

// Schedule pipeline
pub use schedule::{
    classify, sort_buckets, sort_past, sort_upcoming, DateNormalizer, DiagnosticSink,
    LoggingConfig, NormalizationBranch, NormalizationTrace, RequestClock, ScheduleBuckets,
    ScheduleError, SchedulePipeline, TracingSink,
};
