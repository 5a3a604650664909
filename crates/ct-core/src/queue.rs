//! Tester worklist queries
//!
//! Classifies scheduled test-set days against "today" into the combined
//! overdue/upcoming queue, a point lookup, and a forward-looking window.
//! Queue rows are emitted per cylinder: one schedule entry carries 2-3
//! specimens and the tester handles each one.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::snapshot::{Snapshot, SnapshotIndex, TestDayContext};

/// One pending or scheduled cylinder on the tester's worklist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueueRow {
    pub test_cylinder_code: String,
    pub oven_id: Option<String>,
    pub day_num: i32,
    pub cast_date: NaiveDate,
    pub cast_time: Option<NaiveTime>,
    pub job_code: String,
    pub job_name: String,
    pub mix_design_code: String,
    pub required_psi: i32,
    pub piece_type: String,
    pub test_set_id: i32,
    pub test_set_day_id: i32,
    pub date_due: NaiveDateTime,
    pub date_tested: Option<NaiveDateTime>,
}

/// A placement that never had cylinders made.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UntestedPlacement {
    pub pour_id: i32,
    pub placement_id: i32,
    pub cast_date: NaiveDate,
    pub cast_time: Option<NaiveTime>,
    pub job_code: String,
    pub job_name: String,
    pub mix_design_code: String,
    pub piece_type: String,
    pub volume: f64,
}

/// One schedule entry with full context and its cylinder list; the read side
/// of result recording.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestDayDetails {
    pub test_set_day_id: i32,
    pub day_num: i32,
    pub comments: Option<String>,
    pub date_due: NaiveDateTime,
    pub date_tested: Option<NaiveDateTime>,
    pub job_code: String,
    pub job_name: String,
    pub mix_design_code: String,
    pub required_psi: i32,
    pub piece_type: String,
    pub cast_date: NaiveDate,
    pub cast_time: Option<NaiveTime>,
    pub cylinders: Vec<CylinderBreak>,
}

/// One cylinder within [`TestDayDetails`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CylinderBreak {
    pub test_cylinder_id: i32,
    pub code: String,
    pub break_psi: Option<i32>,
}

/// The combined queue up to `end_date`: overdue-and-untested entries
/// regardless of horizon, plus everything due between today and `end_date`
/// regardless of tested state. Sorted by due date, then schedule id.
pub fn test_queue(snapshot: &Snapshot, today: NaiveDate, end_date: NaiveDateTime) -> Vec<QueueRow> {
    let today_start = today.and_time(NaiveTime::MIN);
    let index = SnapshotIndex::new(snapshot);

    let mut rows: Vec<QueueRow> = index
        .test_day_contexts()
        .iter()
        .filter(|ctx| {
            let due = ctx.day.date_due;
            (due < today_start && ctx.day.date_tested.is_none())
                || (due >= today_start && due <= end_date)
        })
        .flat_map(cylinder_rows)
        .collect();

    sort_queue(&mut rows);
    rows
}

/// The queue projection for a single schedule entry (first cylinder row), or
/// `None` when the id is unknown.
pub fn queue_item(snapshot: &Snapshot, test_set_day_id: i32) -> Option<QueueRow> {
    let index = SnapshotIndex::new(snapshot);
    let day = snapshot
        .test_set_days
        .iter()
        .find(|d| d.test_set_day_id == test_set_day_id)?;
    let ctx = index.test_day_context(day)?;
    cylinder_rows(&ctx).into_iter().next()
}

/// Entries due within the next `days` days: from tomorrow 00:00 through the
/// end of the `days`-th day, inclusive.
pub fn upcoming_tests(snapshot: &Snapshot, today: NaiveDate, days: i64) -> Vec<QueueRow> {
    let start = (today + Duration::days(1)).and_time(NaiveTime::MIN);
    let end = end_of_day(today + Duration::days(days));
    let index = SnapshotIndex::new(snapshot);

    let mut rows: Vec<QueueRow> = index
        .test_day_contexts()
        .iter()
        .filter(|ctx| ctx.day.date_due >= start && ctx.day.date_due <= end)
        .flat_map(cylinder_rows)
        .collect();

    sort_queue(&mut rows);
    rows
}

/// Placements with a batching start time but no test sets at all, cast within
/// the last `days_back` days.
pub fn untested_placements(
    snapshot: &Snapshot,
    today: NaiveDate,
    days_back: i64,
) -> Vec<UntestedPlacement> {
    let cutoff = today - Duration::days(days_back);
    let index = SnapshotIndex::new(snapshot);

    snapshot
        .placements
        .iter()
        .filter(|p| p.start_time.is_some())
        .filter(|p| !index.test_sets_by_placement.contains_key(&p.placement_id))
        .filter_map(|p| {
            let mix_batch = index.mix_batches.get(&p.mix_batch_id)?;
            let production_day = index.production_days.get(&mix_batch.production_day_id)?;
            if production_day.date < cutoff {
                return None;
            }
            let mix_design = index.mix_designs.get(&mix_batch.mix_design_id)?;
            let pour = index.pours.get(&p.pour_id)?;
            let job = index.jobs.get(&pour.job_id)?;

            Some(UntestedPlacement {
                pour_id: pour.pour_id,
                placement_id: p.placement_id,
                cast_date: production_day.date,
                cast_time: p.start_time,
                job_code: job.code.clone(),
                job_name: job.name.clone(),
                mix_design_code: mix_design.code.clone(),
                piece_type: p.piece_type.clone().unwrap_or_default(),
                volume: p.volume,
            })
        })
        .collect()
}

/// Full detail view of one schedule entry, or `None` when the id is unknown.
pub fn test_day_details(snapshot: &Snapshot, test_set_day_id: i32) -> Option<TestDayDetails> {
    let index = SnapshotIndex::new(snapshot);
    let day = snapshot
        .test_set_days
        .iter()
        .find(|d| d.test_set_day_id == test_set_day_id)?;
    let ctx = index.test_day_context(day)?;

    Some(TestDayDetails {
        test_set_day_id: day.test_set_day_id,
        day_num: day.day_num,
        comments: day.comments.clone(),
        date_due: day.date_due,
        date_tested: day.date_tested,
        job_code: ctx.job.code.clone(),
        job_name: ctx.job.name.clone(),
        mix_design_code: ctx.mix_design.code.clone(),
        required_psi: ctx.required_psi,
        piece_type: ctx.placement.piece_type.clone().unwrap_or_default(),
        cast_date: ctx.production_day.date,
        cast_time: ctx.placement.start_time,
        cylinders: ctx
            .cylinders
            .iter()
            .map(|c| CylinderBreak {
                test_cylinder_id: c.test_cylinder_id,
                code: c.code.clone(),
                break_psi: c.break_psi,
            })
            .collect(),
    })
}

/// Last instant of `date` at nanosecond precision; the inclusive upper bound
/// for whole-day windows.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN) + Duration::days(1) - Duration::nanoseconds(1)
}

fn cylinder_rows(ctx: &TestDayContext<'_>) -> Vec<QueueRow> {
    ctx.cylinders
        .iter()
        .map(|cylinder| QueueRow {
            test_cylinder_code: cylinder.code.clone(),
            oven_id: ctx.placement.oven_id.clone(),
            day_num: ctx.day.day_num,
            cast_date: ctx.production_day.date,
            cast_time: ctx.placement.start_time,
            job_code: ctx.job.code.clone(),
            job_name: ctx.job.name.clone(),
            mix_design_code: ctx.mix_design.code.clone(),
            required_psi: ctx.required_psi,
            piece_type: ctx.placement.piece_type.clone().unwrap_or_default(),
            test_set_id: ctx.test_set.test_set_id,
            test_set_day_id: ctx.day.test_set_day_id,
            date_due: ctx.day.date_due,
            date_tested: ctx.day.date_tested,
        })
        .collect()
}

fn sort_queue(rows: &mut [QueueRow]) {
    rows.sort_by_key(|r| (r.date_due, r.test_set_day_id));
}

#[cfg(test)]
#[path = "queue_test.rs"]
mod tests;
