//! Schedule pipeline: normalization, classification, ordering
//!
//! This module contains the actual logic of the crate:
//!
//! - **DateNormalizer**: raw date field value → canonical `YYYY-MM-DD`, or absent
//! - **RequestClock**: "today" derived once per run from the configured zone
//! - **classify**: upcoming/past partition relative to the reference date
//! - **sorter**: stable in-bucket ordering with fallback keys for undated records
//! - **SchedulePipeline**: the composed entry point
//! - **ScheduleError** / **LoggingConfig**: error and logging plumbing
//!
//! # Usage Example
//!
//! ```rust
//! use formation_schedule::schedule::{RequestClock, DateNormalizer, SchedulePipeline};
//! use formation_schedule::catalog::Formation;
//! use formation_schedule::types::{FormationId, RawDateValue};
//! use chrono::NaiveDate;
//!
//! let normalizer = DateNormalizer::new(chrono_tz::Europe::Paris);
//! let clock = RequestClock::fixed(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
//! let pipeline = SchedulePipeline::new(normalizer, clock);
//!
//! let session = Formation::new(FormationId::new(1), "First aid refresher")
//!     .with_date(RawDateValue::Text("25/12/2024".to_string()));
//! let buckets = pipeline.run(vec![session]);
//! assert_eq!(buckets.upcoming.len(), 1);
//! ```

pub mod classifier;
pub mod clock;
pub mod error;
pub mod logging;
mod natural;
pub mod normalizer;
pub mod pipeline;
pub mod sorter;

pub use classifier::{classify, ScheduleBuckets};
pub use clock::RequestClock;
pub use error::ScheduleError;
pub use logging::LoggingConfig;
pub use normalizer::{
    DateNormalizer, DiagnosticSink, NormalizationBranch, NormalizationTrace, TracingSink,
};
pub use pipeline::SchedulePipeline;
pub use sorter::{sort_buckets, sort_past, sort_upcoming};
