//! Command implementations

pub mod common;
pub mod queue;
pub mod record;
pub mod report;
pub mod show;
pub mod untested;
pub mod upcoming;
