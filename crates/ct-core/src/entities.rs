//! Plant data model
//!
//! Plain records as materialized by the storage collaborator. The core only
//! reads these; the single exception is the result-recording path, which
//! mutates `TestSetDay` and `TestCylinder` in place.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A calendar date on which concrete was produced. Unique by date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionDay {
    pub production_day_id: i32,
    pub date: NaiveDate,
}

/// A concrete formulation, identified by a code (e.g. "824.1").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixDesign {
    pub mix_design_id: i32,
    pub code: String,
}

/// Required PSI threshold for one mix design at one test age.
///
/// At most one requirement exists per (mix design, test type).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixDesignRequirement {
    pub mix_design_requirement_id: i32,
    pub mix_design_id: i32,
    /// Test age in days: 1, 7, or 28
    pub test_type: i32,
    pub required_psi: i32,
}

/// One mix design poured on one production day; parent of all placements
/// made from that batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixBatch {
    pub mix_batch_id: i32,
    pub production_day_id: i32,
    pub mix_design_id: i32,
}

/// A construction job (e.g. "25-020 Woodbury HS").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub job_id: i32,
    pub code: String,
    pub name: String,
}

/// A casting bed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bed {
    pub bed_id: i32,
}

/// One pour: a job on a bed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pour {
    pub pour_id: i32,
    pub job_id: i32,
    pub bed_id: i32,
}

/// One concrete placement, the unit tests are scheduled against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub placement_id: i32,
    pub pour_id: i32,
    pub mix_batch_id: i32,
    /// e.g. "Walls", "Tees", "Slabs"
    pub piece_type: Option<String>,
    /// Cubic yards placed
    pub volume: f64,
    /// Batching start time-of-day
    pub start_time: Option<NaiveTime>,
    pub oven_id: Option<String>,
}

/// One truck delivery for a placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    pub delivery_id: i32,
    pub placement_id: i32,
    /// e.g. "3", "6", "7"
    pub truck_id: String,
}

/// The set of scheduled tests for one placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestSet {
    pub test_set_id: i32,
    pub placement_id: i32,
}

/// One scheduled test age for a test set.
///
/// `date_due` is the production date plus `day_num` days, fixed at scheduling
/// time. The entry counts as tested exactly when `date_tested` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestSetDay {
    pub test_set_day_id: i32,
    pub test_set_id: i32,
    /// Test age in days: 1, 7, or 28
    pub day_num: i32,
    pub date_due: NaiveDateTime,
    pub date_tested: Option<NaiveDateTime>,
    pub comments: Option<String>,
}

/// One physical specimen: a label and a break result once crushed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCylinder {
    pub test_cylinder_id: i32,
    pub test_set_day_id: i32,
    pub code: String,
    pub break_psi: Option<i32>,
}
