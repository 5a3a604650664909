//! Error types for ct-core

use chrono::NaiveDate;
use thiserror::Error;

/// Core error type for Casttrack
///
/// Pure computations never raise these; only the result-recording path does.
#[derive(Error, Debug)]
pub enum CoreError {
    /// C001: Schedule entry does not exist
    #[error("[C001] Test set day not found: {id}")]
    TestDayNotFound { id: i32 },

    /// C002: Test date precedes the casting date
    #[error("[C002] Test date {date_tested} precedes casting date {cast_date}")]
    TestDateBeforeCast {
        date_tested: NaiveDate,
        cast_date: NaiveDate,
    },

    /// C003: Cylinder does not belong to the schedule entry being recorded
    #[error("[C003] Test cylinder {cylinder_id} does not belong to test set day {test_set_day_id}")]
    CylinderNotInTestDay {
        cylinder_id: i32,
        test_set_day_id: i32,
    },
}

impl CoreError {
    /// True for caller-input validation failures (as opposed to lookups that
    /// found nothing).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CoreError::TestDateBeforeCast { .. } | CoreError::CylinderNotInTestDay { .. }
        )
    }
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
