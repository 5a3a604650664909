use super::*;
use crate::test_fixtures::SnapshotBuilder;

fn batch_with_three_placements() -> (Snapshot, i32, [i32; 3]) {
    let mut b = SnapshotBuilder::new();
    let day = b.production_day("2025-09-09");
    let design = b.mix_design("824.1");
    let batch = b.mix_batch(day, design);
    let job = b.job("25-020", "Woodbury HS");
    let bed = b.bed();
    let pour = b.pour(job, bed);

    // Inserted out of start-time order on purpose.
    let p_late = b.placement(batch, pour, Some("14:00"), None, Some("Walls"), 6.0);
    let p_early = b.placement(batch, pour, Some("08:00"), None, Some("Walls"), 6.0);
    let p_mid = b.placement(batch, pour, Some("10:00"), None, Some("Walls"), 6.0);

    for &p in &[p_late, p_early, p_mid] {
        let set = b.test_set(p);
        b.test_day(set, 1, "2025-09-10", None);
    }

    (b.build(), batch, [p_early, p_mid, p_late])
}

#[test]
fn test_ordinals_follow_start_time() {
    let (snapshot, batch, [p_early, p_mid, p_late]) = batch_with_three_placements();
    let ordinals = placement_ordinals(&snapshot);

    assert_eq!(ordinals[&(batch, p_early)], 1);
    assert_eq!(ordinals[&(batch, p_mid)], 2);
    assert_eq!(ordinals[&(batch, p_late)], 3);
}

#[test]
fn test_oven_id_breaks_start_time_ties_lexically() {
    let mut b = SnapshotBuilder::new();
    let day = b.production_day("2025-09-09");
    let design = b.mix_design("824.1");
    let batch = b.mix_batch(day, design);
    let job = b.job("25-020", "Woodbury HS");
    let bed = b.bed();
    let pour = b.pour(job, bed);

    let p_b = b.placement(batch, pour, Some("08:00"), Some("B2"), None, 6.0);
    let p_a = b.placement(batch, pour, Some("08:00"), Some("A1"), None, 6.0);
    for &p in &[p_b, p_a] {
        let set = b.test_set(p);
        b.test_day(set, 1, "2025-09-10", None);
    }

    let ordinals = placement_ordinals(&b.build());
    assert_eq!(ordinals[&(batch, p_a)], 1);
    assert_eq!(ordinals[&(batch, p_b)], 2);
}

#[test]
fn test_only_one_day_tests_participate() {
    let mut b = SnapshotBuilder::new();
    let day = b.production_day("2025-09-09");
    let design = b.mix_design("824.1");
    let batch = b.mix_batch(day, design);
    let job = b.job("25-020", "Woodbury HS");
    let bed = b.bed();
    let pour = b.pour(job, bed);

    let placement = b.placement(batch, pour, Some("08:00"), None, None, 6.0);
    let set = b.test_set(placement);
    b.test_day(set, 7, "2025-09-16", None);
    b.test_day(set, 28, "2025-10-07", None);

    assert!(placement_ordinals(&b.build()).is_empty());
}

#[test]
fn test_placement_counted_once_across_multiple_one_day_entries() {
    let mut b = SnapshotBuilder::new();
    let day = b.production_day("2025-09-09");
    let design = b.mix_design("824.1");
    let batch = b.mix_batch(day, design);
    let job = b.job("25-020", "Woodbury HS");
    let bed = b.bed();
    let pour = b.pour(job, bed);

    let first = b.placement(batch, pour, Some("08:00"), None, None, 6.0);
    let second = b.placement(batch, pour, Some("10:00"), None, None, 6.0);

    // Two separate test sets on the same placement, each with a 1-day entry.
    for _ in 0..2 {
        let set = b.test_set(first);
        b.test_day(set, 1, "2025-09-10", None);
    }
    let set = b.test_set(second);
    b.test_day(set, 1, "2025-09-10", None);

    let ordinals = placement_ordinals(&b.build());
    assert_eq!(ordinals.len(), 2);
    assert_eq!(ordinals[&(batch, first)], 1);
    assert_eq!(ordinals[&(batch, second)], 2);
}
