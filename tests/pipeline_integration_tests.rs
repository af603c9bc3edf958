//! End-to-end pipeline tests: JSON document in, partitioned schedule out

use chrono::NaiveDate;
use formation_schedule::*;
use std::sync::{Arc, Mutex};

fn pipeline(today: &str) -> SchedulePipeline {
    SchedulePipeline::new(
        DateNormalizer::new(chrono_tz::Europe::Paris),
        RequestClock::fixed(NaiveDate::parse_from_str(today, "%Y-%m-%d").unwrap()),
    )
}

fn ids(formations: &[Formation]) -> Vec<u64> {
    formations.iter().map(|f| f.id.value()).collect()
}

/// The worked reference batch: four records, today 2024-02-01
#[test]
fn test_reference_batch() {
    let document: CatalogDocument = serde_json::from_str(
        r#"[
            {"id": 1, "title": "January session", "date": "2024-01-10"},
            {"id": 2, "title": "March session", "date": "2024-03-05"},
            {"id": 3, "title": "Undated session"},
            {"id": 4, "title": "December session", "date": "2023-12-01"}
        ]"#,
    )
    .unwrap();
    let (_, formations) = document.into_parts();
    let buckets = pipeline("2024-02-01").run(formations);

    assert_eq!(ids(&buckets.upcoming), vec![2]);
    // Past is descending with the undated record last
    assert_eq!(ids(&buckets.past), vec![1, 4, 3]);
}

/// A batch mixing every raw date shape flows through in one run
#[test]
fn test_mixed_shape_batch() {
    let document: CatalogDocument = serde_json::from_str(
        r#"[
            {"id": 1, "title": "French string", "date": "25/12/2024"},
            {"id": 2, "title": "Epoch", "date": 1704067200},
            {"id": 3, "title": "Zoned", "date": {"datetime": "2024-06-14T23:30:00-04:00"}},
            {"id": 4, "title": "Wrapped", "date": {"value": 1704067200}},
            {"id": 5, "title": "Broken", "date": "n/a"}
        ]"#,
    )
    .unwrap();
    let (_, formations) = document.into_parts();
    let buckets = pipeline("2024-06-15").run(formations);

    // Zoned record converts into Paris time and lands on 2024-06-15 (today)
    assert_eq!(ids(&buckets.upcoming), vec![3, 1]);
    // Epoch records share 2024-01-01; stable sort keeps input order; broken last
    assert_eq!(ids(&buckets.past), vec![2, 4, 5]);

    let dates: Vec<Option<&str>> = buckets
        .upcoming
        .iter()
        .chain(buckets.past.iter())
        .map(|f| f.schedule_date().map(CanonicalDate::as_str))
        .collect();
    assert_eq!(
        dates,
        vec![
            Some("2024-06-15"),
            Some("2024-12-25"),
            Some("2024-01-01"),
            Some("2024-01-01"),
            None
        ]
    );
}

#[test]
fn test_catalog_document_with_structures() {
    let document: CatalogDocument = serde_json::from_str(
        r#"{
            "structures": [
                {"id": 1, "name": "Beta association"},
                {"id": 2, "name": "Alpha institute"}
            ],
            "formations": [
                {"id": 10, "title": "a", "date": "2024-09-01", "structure_id": 1},
                {"id": 11, "title": "b", "date": "2024-03-01", "structure_id": 2}
            ]
        }"#,
    )
    .unwrap();
    let (structures, formations) = document.into_parts();
    assert_eq!(structures.len(), 2);

    let buckets = pipeline("2024-06-15").run(formations);
    assert_eq!(ids(&buckets.upcoming), vec![10]);
    assert_eq!(ids(&buckets.past), vec![11]);

    // The listing groups by structure, name ascending
    let mut sorted = structures.clone();
    catalog::sort_by_name(&mut sorted);
    assert_eq!(sorted[0].name, "Alpha institute");
    let linked = sorted[0].formations(&buckets.past);
    assert_eq!(linked.len(), 1);
    assert_eq!(linked[0].id.value(), 11);
}

/// The serialized output carries the computed annotation for every dated
/// record and omits it for undated ones
#[test]
fn test_output_serialization_includes_annotations() {
    let buckets = pipeline("2024-06-15").run(vec![
        Formation::new(FormationId::new(1), "dated")
            .with_date(RawDateValue::Text("2024-12-25".to_string())),
        Formation::new(FormationId::new(2), "undated"),
    ]);
    let json: serde_json::Value = serde_json::to_value(&buckets).unwrap();
    assert_eq!(json["upcoming"][0]["normalized_date"], "2024-12-25");
    assert!(json["past"][0].get("normalized_date").is_none());
}

#[derive(Debug, Default)]
struct CountingSink {
    count: Mutex<usize>,
}

impl DiagnosticSink for CountingSink {
    fn record(&self, _trace: &NormalizationTrace) {
        *self.count.lock().unwrap() += 1;
    }
}

/// Normalization runs exactly once per record, and diagnostics never change
/// the partition
#[test]
fn test_diagnostics_fire_once_per_record_without_affecting_output() {
    let records = vec![
        Formation::new(FormationId::new(1), "a")
            .with_date(RawDateValue::Text("2024-12-25".to_string())),
        Formation::new(FormationId::new(2), "b"),
        Formation::new(FormationId::new(3), "c")
            .with_date(RawDateValue::Text("garbage".to_string())),
    ];

    let sink = Arc::new(CountingSink::default());
    let observed = pipeline("2024-06-15")
        .with_diagnostics(sink.clone())
        .run(records.clone());
    let plain = pipeline("2024-06-15").run(records);

    assert_eq!(*sink.count.lock().unwrap(), 3);
    assert_eq!(observed, plain);
}
