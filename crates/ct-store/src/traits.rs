//! Snapshot store trait definition

use crate::error::StoreResult;
use async_trait::async_trait;
use ct_core::{RecordTestResult, Snapshot};

/// Storage abstraction for Casttrack
///
/// Implementations must be Send + Sync for async operation.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Materialize the full entity graph for the computation core
    async fn load_snapshot(&self) -> StoreResult<Snapshot>;

    /// Validate and apply a tester's submission, then persist
    async fn record_result(&self, request: &RecordTestResult) -> StoreResult<()>;
}
