//! Upcoming/past classification
//!
//! Splits a batch of formations into an upcoming and a past bucket relative
//! to the run's reference date. The bucket test is `date >= today`; a record
//! whose date cannot be normalized fails that test and therefore lands in
//! **past**. Downstream consumers rely on that placement, so it must not be
//! "fixed" to route undated records into upcoming.

use crate::catalog::Formation;
use crate::schedule::clock::RequestClock;
use crate::schedule::normalizer::DateNormalizer;
use crate::types::CanonicalDate;
use tracing::{debug, instrument};

/// The two partitions produced by one pipeline run
///
/// Until [`sort_buckets`](crate::schedule::sorter::sort_buckets) runs, each
/// bucket keeps the input's insertion order.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct ScheduleBuckets {
    /// Records dated today or later
    pub upcoming: Vec<Formation>,
    /// Records dated before today, plus records without a usable date
    pub past: Vec<Formation>,
}

impl ScheduleBuckets {
    /// Total number of records across both buckets
    pub fn len(&self) -> usize {
        self.upcoming.len() + self.past.len()
    }

    /// Whether both buckets are empty
    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty() && self.past.is_empty()
    }
}

/// Partition formations into upcoming and past buckets
///
/// Each record's date is normalized exactly once and cached on the record
/// as its `normalized_date` annotation; when normalization fails, the
/// record's publication date stands in, and failing that the record stays
/// undated. Insertion order is preserved within each bucket.
#[instrument(skip_all, fields(record_count = formations.len(), today = %clock.today()))]
pub fn classify(
    formations: Vec<Formation>,
    normalizer: &DateNormalizer,
    clock: &RequestClock,
) -> ScheduleBuckets {
    let today = clock.today();
    let mut buckets = ScheduleBuckets::default();

    for mut formation in formations {
        let normalized = normalizer
            .normalize(formation.date.as_ref())
            .or_else(|| formation.published.map(CanonicalDate::from_naive));
        formation.normalized_date = normalized;

        let is_upcoming = formation
            .normalized_date
            .as_ref()
            .map(|date| date >= today)
            .unwrap_or(false);

        debug!(
            formation = %formation.id,
            date = formation.normalized_date.as_ref().map(CanonicalDate::as_str),
            upcoming = is_upcoming,
            "classified formation"
        );

        if is_upcoming {
            buckets.upcoming.push(formation);
        } else {
            buckets.past.push(formation);
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FormationId, RawDateValue};
    use chrono::NaiveDate;

    fn clock() -> RequestClock {
        RequestClock::fixed(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
    }

    fn normalizer() -> DateNormalizer {
        DateNormalizer::new(chrono_tz::Europe::Paris)
    }

    fn dated(id: u64, date: &str) -> Formation {
        Formation::new(FormationId::new(id), format!("session {}", id))
            .with_date(RawDateValue::Text(date.to_string()))
    }

    #[test]
    fn test_today_is_upcoming() {
        let buckets = classify(vec![dated(1, "2024-06-15")], &normalizer(), &clock());
        assert_eq!(buckets.upcoming.len(), 1);
        assert!(buckets.past.is_empty());
    }

    #[test]
    fn test_yesterday_is_past() {
        let buckets = classify(vec![dated(1, "2024-06-14")], &normalizer(), &clock());
        assert!(buckets.upcoming.is_empty());
        assert_eq!(buckets.past.len(), 1);
    }

    #[test]
    fn test_undated_record_lands_in_past() {
        let record = Formation::new(FormationId::new(1), "undated");
        let buckets = classify(vec![record], &normalizer(), &clock());
        assert!(buckets.upcoming.is_empty());
        assert_eq!(buckets.past.len(), 1);
        assert!(buckets.past[0].normalized_date.is_none());
    }

    #[test]
    fn test_unparseable_date_lands_in_past() {
        let buckets = classify(vec![dated(1, "not a date")], &normalizer(), &clock());
        assert_eq!(buckets.past.len(), 1);
    }

    #[test]
    fn test_publication_date_stands_in_for_bad_date() {
        let record = dated(1, "not a date")
            .with_published(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
        let buckets = classify(vec![record], &normalizer(), &clock());
        assert_eq!(buckets.upcoming.len(), 1);
        assert_eq!(buckets.upcoming[0].normalized_date.as_ref().unwrap().as_str(), "2024-07-01");
    }

    #[test]
    fn test_normalized_date_is_cached_on_record() {
        let buckets = classify(vec![dated(1, "25/12/2024")], &normalizer(), &clock());
        assert_eq!(
            buckets.upcoming[0].schedule_date().unwrap().as_str(),
            "2024-12-25"
        );
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let buckets = classify(
            vec![dated(1, "2024-07-01"), dated(2, "2024-06-20"), dated(3, "2024-08-01")],
            &normalizer(),
            &clock(),
        );
        let ids: Vec<u64> = buckets.upcoming.iter().map(|f| f.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
