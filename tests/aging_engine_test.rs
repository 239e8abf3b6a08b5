// ==========================================
// AgingClassifier integration tests
// ==========================================
// Test goal: partitioning, oldest-first ordering and severity
// bucketing of the pallet ledger
// Coverage: default policy boundaries, regular vs. adjustment
// tolerance, stable ordering, recomputation with a moving "now"
// ==========================================

use chrono::{DateTime, Duration, TimeZone, Utc};
use excipient_stock::config::AgingPolicy;
use excipient_stock::engine::AgingClassifier;
use excipient_stock::{AgingBucket, Pallet, StockType};

// ==========================================
// Test helpers
// ==========================================

/// Reference "now": 2026-08-01 12:00 UTC
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap()
}

/// Create a test pallet that arrived `days_ago` days before `now()`
fn pallet(id: &str, days_ago: i64, stock_type: StockType) -> Pallet {
    Pallet {
        pallet_id: id.to_string(),
        excipient_code: "EXC-LAC".to_string(),
        excipient_name: "LACTOSE".to_string(),
        quantity_kg: 500.0,
        room_id: "R1".to_string(),
        space_id: format!("S-{}", id),
        arrived_at: now() - Duration::days(days_ago),
        production_order_id: None,
        stock_type,
    }
}

// ==========================================
// Part 1: bucketing scenarios
// ==========================================

#[test]
fn test_scenario_1_regular_25_days_is_critical() {
    // Default policy: regular stock past 20 days is expired
    let classifier = AgingClassifier::new();
    let policy = AgingPolicy::default();

    let report = classifier.classify(
        &[pallet("P1", 25, StockType::Regular)],
        now(),
        &policy,
    );

    let critical = report.by_bucket.get(&AgingBucket::Critical);
    assert_eq!(critical.map(|v| v.len()), Some(1), "25 days > 20 is Critical");
}

#[test]
fn test_scenario_2_regular_5_days_is_normal() {
    let classifier = AgingClassifier::new();
    let policy = AgingPolicy::default();

    let report = classifier.classify(
        &[pallet("P1", 5, StockType::Regular)],
        now(),
        &policy,
    );

    let normal = report.by_bucket.get(&AgingBucket::Normal);
    assert_eq!(normal.map(|v| v.len()), Some(1), "5 days is Normal");
}

#[test]
fn test_scenario_3_adjustment_stock_is_more_tolerant() {
    // 25 days: Critical for regular stock, only Attention for
    // adjustment stock under the default policy
    let classifier = AgingClassifier::new();
    let policy = AgingPolicy::default();

    let report = classifier.classify(
        &[
            pallet("REG", 25, StockType::Regular),
            pallet("ADJ", 25, StockType::Adjustment),
        ],
        now(),
        &policy,
    );

    let critical = report.by_bucket.get(&AgingBucket::Critical).unwrap();
    assert_eq!(critical.len(), 1);
    assert_eq!(critical[0].pallet_id, "REG");

    let attention = report.by_bucket.get(&AgingBucket::Attention).unwrap();
    assert_eq!(attention.len(), 1);
    assert_eq!(attention[0].pallet_id, "ADJ");
}

#[test]
fn test_scenario_4_custom_thresholds_apply() {
    // Thresholds are a parameter, not a constant: a stricter policy
    // moves the same pallet into a worse bucket
    use excipient_stock::config::AgingThresholds;

    let classifier = AgingClassifier::new();
    let strict = AgingPolicy {
        regular: AgingThresholds {
            attention_days: 1,
            warning_days: 2,
            critical_days: 3,
        },
        adjustment: AgingThresholds {
            attention_days: 2,
            warning_days: 4,
            critical_days: 6,
        },
    };

    let report = classifier.classify(&[pallet("P1", 5, StockType::Regular)], now(), &strict);

    assert!(
        report.by_bucket.contains_key(&AgingBucket::Critical),
        "5 days > 3 under the strict policy"
    );
}

// ==========================================
// Part 2: partitioning and ordering
// ==========================================

#[test]
fn test_scenario_5_partitions_split_by_stock_type() {
    let classifier = AgingClassifier::new();
    let policy = AgingPolicy::default();

    let report = classifier.classify(
        &[
            pallet("R1", 3, StockType::Regular),
            pallet("A1", 8, StockType::Adjustment),
            pallet("R2", 12, StockType::Regular),
        ],
        now(),
        &policy,
    );

    assert_eq!(report.regular_lots.len(), 2);
    assert_eq!(report.adjustment_lots.len(), 1);
    assert_eq!(report.adjustment_lots[0].pallet_id, "A1");
}

#[test]
fn test_scenario_6_partitions_sorted_oldest_first() {
    let classifier = AgingClassifier::new();
    let policy = AgingPolicy::default();

    let report = classifier.classify(
        &[
            pallet("NEW", 2, StockType::Regular),
            pallet("OLD", 19, StockType::Regular),
            pallet("MID", 9, StockType::Regular),
        ],
        now(),
        &policy,
    );

    let ids: Vec<&str> = report
        .regular_lots
        .iter()
        .map(|p| p.pallet_id.as_str())
        .collect();
    assert_eq!(ids, vec!["OLD", "MID", "NEW"], "descending days-in-area");
}

#[test]
fn test_scenario_7_equal_age_keeps_input_order() {
    let classifier = AgingClassifier::new();
    let policy = AgingPolicy::default();

    let report = classifier.classify(
        &[
            pallet("FIRST", 10, StockType::Regular),
            pallet("SECOND", 10, StockType::Regular),
        ],
        now(),
        &policy,
    );

    let ids: Vec<&str> = report
        .regular_lots
        .iter()
        .map(|p| p.pallet_id.as_str())
        .collect();
    assert_eq!(ids, vec!["FIRST", "SECOND"], "stable sort on ties");
}

// ==========================================
// Part 3: edge cases
// ==========================================

#[test]
fn test_scenario_8_empty_ledger() {
    let classifier = AgingClassifier::new();
    let policy = AgingPolicy::default();

    let report = classifier.classify(&[], now(), &policy);

    assert!(report.regular_lots.is_empty());
    assert!(report.adjustment_lots.is_empty());
    assert!(report.by_bucket.is_empty());
    assert!(report.bucket_counts().is_empty());
}

#[test]
fn test_scenario_9_now_advances_buckets_move() {
    // Same ledger, later "now": the value is recomputed per call,
    // never read from a cache on the pallet
    let classifier = AgingClassifier::new();
    let policy = AgingPolicy::default();
    let ledger = vec![pallet("P1", 19, StockType::Regular)];

    let before = classifier.classify(&ledger, now(), &policy);
    assert!(before.by_bucket.contains_key(&AgingBucket::Warning), "19 days is Warning");

    let later = now() + Duration::days(3);
    let after = classifier.classify(&ledger, later, &policy);
    assert!(after.by_bucket.contains_key(&AgingBucket::Critical), "22 days is Critical");
}

#[test]
fn test_scenario_10_bucket_counts_cover_all_pallets() {
    let classifier = AgingClassifier::new();
    let policy = AgingPolicy::default();

    let ledger = vec![
        pallet("P1", 2, StockType::Regular),
        pallet("P2", 10, StockType::Regular),
        pallet("P3", 16, StockType::Regular),
        pallet("P4", 30, StockType::Regular),
        pallet("P5", 30, StockType::Adjustment),
    ];

    let report = classifier.classify(&ledger, now(), &policy);
    let total: usize = report.bucket_counts().values().sum();
    assert_eq!(total, ledger.len(), "every pallet lands in exactly one bucket");
}
