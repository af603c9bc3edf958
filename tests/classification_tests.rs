//! Integration tests for the upcoming/past classification policy

use chrono::NaiveDate;
use formation_schedule::*;

fn clock(today: &str) -> RequestClock {
    RequestClock::fixed(NaiveDate::parse_from_str(today, "%Y-%m-%d").unwrap())
}

fn normalizer() -> DateNormalizer {
    DateNormalizer::new(chrono_tz::Europe::Paris)
}

fn dated(id: u64, date: &str) -> Formation {
    Formation::new(FormationId::new(id), format!("session {}", id))
        .with_date(RawDateValue::Text(date.to_string()))
}

#[test]
fn test_boundary_today_is_upcoming_yesterday_is_past() {
    let buckets = classify(
        vec![dated(1, "2024-06-15"), dated(2, "2024-06-14"), dated(3, "2024-06-16")],
        &normalizer(),
        &clock("2024-06-15"),
    );
    let upcoming: Vec<u64> = buckets.upcoming.iter().map(|f| f.id.value()).collect();
    let past: Vec<u64> = buckets.past.iter().map(|f| f.id.value()).collect();
    assert_eq!(upcoming, vec![1, 3]);
    assert_eq!(past, vec![2]);
}

/// Records without a usable date fail the `date >= today` test and land in
/// past. Display code depends on this placement; do not reroute them.
#[test]
fn test_undated_records_are_classified_as_past() {
    let undated = Formation::new(FormationId::new(1), "no date set");
    let unparseable = dated(2, "sometime in spring");

    let buckets = classify(vec![undated, unparseable], &normalizer(), &clock("2024-06-15"));
    assert!(buckets.upcoming.is_empty());
    assert_eq!(buckets.past.len(), 2);
    assert!(buckets.past.iter().all(|f| f.normalized_date.is_none()));
}

#[test]
fn test_every_record_carries_its_annotation_after_classification() {
    let buckets = classify(
        vec![dated(1, "25/12/2024"), dated(2, "2023-01-15 09:00:00")],
        &normalizer(),
        &clock("2024-06-15"),
    );
    assert_eq!(buckets.upcoming[0].schedule_date().unwrap().as_str(), "2024-12-25");
    assert_eq!(buckets.past[0].schedule_date().unwrap().as_str(), "2023-01-15");
}

#[test]
fn test_publication_date_fallback_applies_before_classification() {
    let record = Formation::new(FormationId::new(1), "bad raw date")
        .with_date(RawDateValue::Text("???".to_string()))
        .with_published(NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());

    let buckets = classify(vec![record], &normalizer(), &clock("2024-06-15"));
    assert_eq!(buckets.upcoming.len(), 1);
    assert_eq!(buckets.upcoming[0].schedule_date().unwrap().as_str(), "2024-12-01");
}

#[test]
fn test_classification_preserves_insertion_order() {
    let buckets = classify(
        vec![dated(3, "2024-01-03"), dated(1, "2024-01-01"), dated(2, "2024-01-02")],
        &normalizer(),
        &clock("2024-06-15"),
    );
    let past: Vec<u64> = buckets.past.iter().map(|f| f.id.value()).collect();
    assert_eq!(past, vec![3, 1, 2]);
}

#[test]
fn test_empty_input_produces_two_empty_buckets() {
    let buckets = classify(Vec::new(), &normalizer(), &clock("2024-06-15"));
    assert!(buckets.is_empty());
    assert_eq!(buckets.len(), 0);
}
