//! ct-core - Core library for Casttrack
//!
//! This crate provides the plant data model, the in-memory snapshot contract,
//! and the pure test-scheduling computations shared across all Casttrack
//! components: age calculation, placement sequencing, report building, queue
//! classification, and test-result recording.

pub mod age;
pub mod entities;
pub mod error;
pub mod queue;
pub mod record;
pub mod report;
pub mod sequence;
pub mod snapshot;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use age::age_of_test;
pub use entities::{
    Bed, Delivery, Job, MixBatch, MixDesign, MixDesignRequirement, Placement, Pour, ProductionDay,
    TestCylinder, TestSet, TestSetDay,
};
pub use error::{CoreError, CoreResult};
pub use queue::{
    end_of_day, queue_item, test_day_details, test_queue, untested_placements, upcoming_tests,
    CylinderBreak, QueueRow, TestDayDetails, UntestedPlacement,
};
pub use record::{apply_test_result, CylinderBreakInput, RecordTestResult};
pub use report::{build_report, format_test_date, ReportRow};
pub use sequence::placement_ordinals;
pub use snapshot::Snapshot;
