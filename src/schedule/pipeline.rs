//! The end-to-end schedule pipeline
//!
//! Wires the normalizer, the request clock, and the classifier/sorter pair
//! into the single entry point callers use: records in, two ordered buckets
//! out.

use crate::catalog::Formation;
use crate::schedule::classifier::{classify, ScheduleBuckets};
use crate::schedule::clock::RequestClock;
use crate::schedule::error::ScheduleError;
use crate::schedule::normalizer::{DateNormalizer, DiagnosticSink, TracingSink};
use crate::schedule::sorter::sort_buckets;
use crate::types::ScheduleConfig;
use std::sync::Arc;
use tracing::info;

/// One configured pipeline run
#[derive(Debug, Clone)]
pub struct SchedulePipeline {
    normalizer: DateNormalizer,
    clock: RequestClock,
}

impl SchedulePipeline {
    /// Build a pipeline from explicit parts
    pub fn new(normalizer: DateNormalizer, clock: RequestClock) -> Self {
        Self { normalizer, clock }
    }

    /// Build a pipeline from a validated configuration
    ///
    /// Resolves the zone, derives "today" (honoring a fixed override), and
    /// attaches the tracing diagnostic sink when requested.
    pub fn from_config(config: &ScheduleConfig) -> Result<Self, ScheduleError> {
        let zone = config.zone()?;
        let clock = match config.today {
            Some(today) => RequestClock::fixed(today),
            None => RequestClock::for_zone(zone),
        };

        let mut normalizer = DateNormalizer::new(zone);
        if config.diagnostics {
            normalizer = normalizer.with_diagnostics(Arc::new(TracingSink));
        }

        info!(
            zone = %zone,
            today = %clock.today(),
            "schedule pipeline configured"
        );
        Ok(Self::new(normalizer, clock))
    }

    /// Attach a custom diagnostic sink
    pub fn with_diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.normalizer = self.normalizer.with_diagnostics(sink);
        self
    }

    /// The reference clock for this run
    pub fn clock(&self) -> &RequestClock {
        &self.clock
    }

    /// Classify and sort a batch of formations
    pub fn run(&self, formations: Vec<Formation>) -> ScheduleBuckets {
        let mut buckets = classify(formations, &self.normalizer, &self.clock);
        sort_buckets(&mut buckets);
        info!(
            upcoming = buckets.upcoming.len(),
            past = buckets.past.len(),
            "schedule partitioned"
        );
        buckets
    }
}
