//! Historical concrete-test report
//!
//! Joins placement, mix-batch, requirement, and cylinder-break data into one
//! denormalized row per test-set day. Every field is display-formatted here:
//! downstream consumers compare these strings byte-for-byte, so the date and
//! rounding rules in this module are part of the contract.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::age::age_of_test;
use crate::entities::Delivery;
use crate::sequence::ordinals_from_contexts;
use crate::snapshot::{Snapshot, SnapshotIndex, TestDayContext};

/// One report row. All fields are pre-formatted display strings; absent
/// values render as empty strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub test_id: String,
    pub cylinder_id: String,
    pub casting_date: String,
    pub mix_design: String,
    pub volume: String,
    pub bed_id: String,
    pub batching_start_time: String,
    pub job_code: String,
    pub job_name: String,
    pub truck_numbers: String,
    pub pour_id: String,
    pub piece_type: String,
    pub oven_id: String,
    pub age_of_test: String,
    pub testing_date: String,
    pub required_psi: String,
    pub break1: String,
    pub break2: String,
    pub break3: String,
    pub average_psi: String,
    pub comments: String,
}

/// Build the full report, one row per (test set, test-set day).
///
/// Row order: production date, then mix batch id, then batch-level (7/28-day)
/// entries before placement-level (1-day) entries, then placement start time,
/// oven id, and day number, all ascending.
pub fn build_report(snapshot: &Snapshot) -> Vec<ReportRow> {
    let index = SnapshotIndex::new(snapshot);
    let mut contexts = index.test_day_contexts();
    let ordinals = ordinals_from_contexts(&contexts);

    contexts.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));

    contexts
        .iter()
        .map(|ctx| build_row(ctx, &ordinals))
        .collect()
}

type RowKey<'a> = (NaiveDate, i32, bool, Option<NaiveTime>, Option<&'a str>, i32);

fn sort_key<'a>(ctx: &'a TestDayContext<'_>) -> RowKey<'a> {
    (
        ctx.production_day.date,
        ctx.mix_batch.mix_batch_id,
        ctx.day.day_num == 1,
        ctx.placement.start_time,
        ctx.placement.oven_id.as_deref(),
        ctx.day.day_num,
    )
}

fn build_row(ctx: &TestDayContext<'_>, ordinals: &HashMap<(i32, i32), u32>) -> ReportRow {
    let mix_batch_id = ctx.mix_batch.mix_batch_id;

    // 1-day tests are placement-scoped and carry the placement's ordinal as
    // a suffix; 7/28-day tests identify the whole batch.
    let test_id = if ctx.day.day_num == 1 {
        let suffix = ordinals
            .get(&(mix_batch_id, ctx.placement.placement_id))
            .copied()
            .unwrap_or(1);
        format!("{}.{}", mix_batch_id, suffix)
    } else {
        mix_batch_id.to_string()
    };

    let break_at = |i: usize| {
        ctx.cylinders
            .get(i)
            .and_then(|c| c.break_psi)
            .map(|v| v.to_string())
            .unwrap_or_default()
    };

    let breaks: Vec<f64> = ctx
        .cylinders
        .iter()
        .filter_map(|c| c.break_psi)
        .map(f64::from)
        .collect();
    let average_psi = if breaks.is_empty() {
        String::new()
    } else {
        // f64::round is half-away-from-zero, matching the report contract.
        let mean = breaks.iter().sum::<f64>() / breaks.len() as f64;
        (mean.round() as i64).to_string()
    };

    let (age_of_test, testing_date) = match ctx.day.date_tested {
        Some(tested) => (
            age_of_test(ctx.production_day.date, ctx.placement.start_time, Some(tested)),
            format_test_date(tested),
        ),
        // Untested 1-day entries stay blank; there is no scheduled-date
        // fallback for same-day tests.
        None if ctx.day.day_num == 1 => (String::new(), String::new()),
        None => (
            ctx.day.day_num.to_string(),
            format_test_date(ctx.day.date_due),
        ),
    };

    ReportRow {
        test_id,
        cylinder_id: format!("{}C", ctx.day.day_num),
        casting_date: ctx.production_day.date.format("%m/%d/%Y").to_string(),
        mix_design: ctx.mix_design.code.clone(),
        volume: format_volume(ctx.placement.volume),
        bed_id: ctx.bed.bed_id.to_string(),
        batching_start_time: ctx
            .placement
            .start_time
            .map(format_start_time)
            .unwrap_or_default(),
        job_code: ctx.job.code.clone(),
        job_name: ctx.job.name.clone(),
        truck_numbers: joined_truck_numbers(&ctx.deliveries),
        pour_id: ctx.pour.pour_id.to_string(),
        piece_type: ctx.placement.piece_type.clone().unwrap_or_default(),
        oven_id: ctx.placement.oven_id.clone().unwrap_or_default(),
        age_of_test,
        testing_date,
        required_psi: ctx.required_psi.to_string(),
        break1: break_at(0),
        break2: break_at(1),
        break3: break_at(2),
        average_psi,
        comments: ctx.day.comments.clone().unwrap_or_default(),
    }
}

/// Render a test date for display: `M/d` when the value is exactly midnight,
/// `M/d/yy H:mm` (24-hour clock, unpadded hour) otherwise.
pub fn format_test_date(value: NaiveDateTime) -> String {
    if value.time() == NaiveTime::MIN {
        value.format("%-m/%-d").to_string()
    } else {
        value.format("%-m/%-d/%y %-H:%M").to_string()
    }
}

/// Truck ids joined with ", ". Ids that parse as integers sort numerically
/// and ahead of those that don't; ties and non-numeric ids compare lexically.
fn joined_truck_numbers(deliveries: &[&Delivery]) -> String {
    let mut trucks: Vec<&str> = deliveries.iter().map(|d| d.truck_id.as_str()).collect();
    trucks.sort_by_key(|t| (t.parse::<i64>().unwrap_or(i64::MAX), *t));
    trucks.join(", ")
}

/// Up to two decimals, trailing zeros trimmed ("8", "8.5", "8.25").
fn format_volume(volume: f64) -> String {
    let fixed = format!("{:.2}", volume);
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Unpadded hour, two-digit minutes.
fn format_start_time(time: NaiveTime) -> String {
    use chrono::Timelike;
    format!("{}:{:02}", time.hour(), time.minute())
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
