//! Test-result recording
//!
//! The only write path in the engine. Validates the tester's submission
//! against the schedule entry and applies it in place; any invalid cylinder
//! id aborts the whole write with no partial mutation.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::snapshot::Snapshot;

/// A tester's submission for one schedule entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordTestResult {
    pub test_set_day_id: i32,
    pub date_tested: NaiveDateTime,
    pub comments: Option<String>,
    pub cylinder_breaks: Vec<CylinderBreakInput>,
}

/// One crushed cylinder's reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CylinderBreakInput {
    pub test_cylinder_id: i32,
    pub break_psi: i32,
}

/// Validate and apply a submission to the snapshot.
///
/// Fails with NotFound for an unknown schedule id, and with a validation
/// error when the test date precedes the casting date or any cylinder id
/// belongs to a different schedule entry. On success sets the entry's
/// tested date and comments and each named cylinder's break reading.
pub fn apply_test_result(snapshot: &mut Snapshot, request: &RecordTestResult) -> CoreResult<()> {
    let day_idx = snapshot
        .test_set_days
        .iter()
        .position(|d| d.test_set_day_id == request.test_set_day_id)
        .ok_or(CoreError::TestDayNotFound {
            id: request.test_set_day_id,
        })?;
    let test_set_id = snapshot.test_set_days[day_idx].test_set_id;

    // Ancestry resolves by construction; a broken link skips the date check
    // rather than failing the write.
    if let Some(cast_date) = casting_date(snapshot, test_set_id) {
        if request.date_tested.date() < cast_date {
            log::warn!(
                "rejecting test result for day {}: tested {} before cast {}",
                request.test_set_day_id,
                request.date_tested.date(),
                cast_date
            );
            return Err(CoreError::TestDateBeforeCast {
                date_tested: request.date_tested.date(),
                cast_date,
            });
        }
    }

    let valid_ids: HashSet<i32> = snapshot
        .test_cylinders
        .iter()
        .filter(|c| c.test_set_day_id == request.test_set_day_id)
        .map(|c| c.test_cylinder_id)
        .collect();
    for cylinder_break in &request.cylinder_breaks {
        if !valid_ids.contains(&cylinder_break.test_cylinder_id) {
            log::warn!(
                "rejecting test result for day {}: cylinder {} belongs elsewhere",
                request.test_set_day_id,
                cylinder_break.test_cylinder_id
            );
            return Err(CoreError::CylinderNotInTestDay {
                cylinder_id: cylinder_break.test_cylinder_id,
                test_set_day_id: request.test_set_day_id,
            });
        }
    }

    let day = &mut snapshot.test_set_days[day_idx];
    day.date_tested = Some(request.date_tested);
    day.comments = request.comments.clone();

    for cylinder_break in &request.cylinder_breaks {
        if let Some(cylinder) = snapshot
            .test_cylinders
            .iter_mut()
            .find(|c| c.test_cylinder_id == cylinder_break.test_cylinder_id)
        {
            cylinder.break_psi = Some(cylinder_break.break_psi);
        }
    }

    log::debug!(
        "recorded test result for day {} ({} breaks)",
        request.test_set_day_id,
        request.cylinder_breaks.len()
    );
    Ok(())
}

fn casting_date(snapshot: &Snapshot, test_set_id: i32) -> Option<NaiveDate> {
    let test_set = snapshot
        .test_sets
        .iter()
        .find(|t| t.test_set_id == test_set_id)?;
    let placement = snapshot
        .placements
        .iter()
        .find(|p| p.placement_id == test_set.placement_id)?;
    let mix_batch = snapshot
        .mix_batches
        .iter()
        .find(|m| m.mix_batch_id == placement.mix_batch_id)?;
    let production_day = snapshot
        .production_days
        .iter()
        .find(|d| d.production_day_id == mix_batch.production_day_id)?;
    Some(production_day.date)
}

#[cfg(test)]
#[path = "record_test.rs"]
mod tests;
