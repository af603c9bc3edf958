//! In-bucket ordering
//!
//! Upcoming records are shown soonest-first, past records most-recent-first.
//! Records without a date take a fallback sort key putting them at the end
//! of their bucket: `9999-12-31` ascending, `0000-01-01` descending. Both
//! sorts are stable, so equal-key records keep their classification order
//! and re-sorting a sorted bucket changes nothing.

use crate::catalog::Formation;
use crate::schedule::classifier::ScheduleBuckets;
use crate::types::CanonicalDate;

/// Sort upcoming records ascending by date, undated last
pub fn sort_upcoming(formations: &mut [Formation]) {
    formations.sort_by(|a, b| sort_key(a, true).cmp(&sort_key(b, true)));
}

/// Sort past records descending by date, undated last
pub fn sort_past(formations: &mut [Formation]) {
    formations.sort_by(|a, b| sort_key(b, false).cmp(&sort_key(a, false)));
}

/// Sort both buckets in place
pub fn sort_buckets(buckets: &mut ScheduleBuckets) {
    sort_upcoming(&mut buckets.upcoming);
    sort_past(&mut buckets.past);
}

fn sort_key(formation: &Formation, upcoming: bool) -> CanonicalDate {
    formation.normalized_date.clone().unwrap_or_else(|| {
        if upcoming {
            CanonicalDate::future_fallback()
        } else {
            CanonicalDate::past_fallback()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FormationId;

    fn record(id: u64, date: Option<&str>) -> Formation {
        let mut formation = Formation::new(FormationId::new(id), format!("session {}", id));
        formation.normalized_date = date.map(|d| CanonicalDate::parse(d).unwrap());
        formation
    }

    fn ids(formations: &[Formation]) -> Vec<u64> {
        formations.iter().map(|f| f.id.value()).collect()
    }

    #[test]
    fn test_upcoming_ascending_undated_last() {
        let mut formations = vec![
            record(1, Some("2024-09-01")),
            record(2, None),
            record(3, Some("2024-07-01")),
        ];
        sort_upcoming(&mut formations);
        assert_eq!(ids(&formations), vec![3, 1, 2]);
    }

    #[test]
    fn test_past_descending_undated_last() {
        let mut formations = vec![
            record(1, Some("2023-12-01")),
            record(2, None),
            record(3, Some("2024-01-10")),
        ];
        sort_past(&mut formations);
        assert_eq!(ids(&formations), vec![3, 1, 2]);
    }

    #[test]
    fn test_equal_dates_keep_insertion_order() {
        let mut formations = vec![
            record(1, Some("2024-07-01")),
            record(2, Some("2024-07-01")),
            record(3, Some("2024-07-01")),
        ];
        sort_upcoming(&mut formations);
        assert_eq!(ids(&formations), vec![1, 2, 3]);
    }

    #[test]
    fn test_sorting_is_idempotent() {
        let mut formations = vec![
            record(1, Some("2024-09-01")),
            record(2, None),
            record(3, Some("2024-07-01")),
            record(4, Some("2024-07-01")),
        ];
        sort_upcoming(&mut formations);
        let once = ids(&formations);
        sort_upcoming(&mut formations);
        assert_eq!(ids(&formations), once);
    }
}
