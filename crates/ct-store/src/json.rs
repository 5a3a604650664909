//! JSON-file snapshot store

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use ct_core::{apply_test_result, RecordTestResult, Snapshot};
use tokio::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::traits::SnapshotStore;

/// File-backed store holding the whole record set as one JSON document.
///
/// Reads hand out snapshot clones; the recording path takes the write lock
/// for the full validate + mutate + persist sequence, so concurrent
/// recorders serialize (last write wins).
#[derive(Debug)]
pub struct JsonFileStore {
    state: RwLock<Snapshot>,
    path: Option<PathBuf>,
}

impl JsonFileStore {
    /// Open an existing snapshot file
    pub fn open(path: &Path) -> StoreResult<Self> {
        if !path.exists() {
            return Err(StoreError::SnapshotNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let snapshot: Snapshot = serde_json::from_str(&content)?;
        log::debug!(
            "loaded snapshot from {} ({} schedule entries)",
            path.display(),
            snapshot.test_set_days.len()
        );

        Ok(Self {
            state: RwLock::new(snapshot),
            path: Some(path.to_path_buf()),
        })
    }

    /// Create a store with no backing file (tests, fixtures)
    pub fn in_memory(snapshot: Snapshot) -> Self {
        Self {
            state: RwLock::new(snapshot),
            path: None,
        }
    }

    /// Persist the current state atomically.
    ///
    /// Uses write-to-temp-then-rename so a crash mid-write cannot corrupt
    /// the data file. No-op for in-memory stores.
    fn save(&self, snapshot: &Snapshot) -> StoreResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let temp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(snapshot)?;
        std::fs::write(&temp_path, json)?;
        std::fs::rename(&temp_path, path)?;

        Ok(())
    }
}

#[async_trait]
impl SnapshotStore for JsonFileStore {
    async fn load_snapshot(&self) -> StoreResult<Snapshot> {
        Ok(self.state.read().await.clone())
    }

    async fn record_result(&self, request: &RecordTestResult) -> StoreResult<()> {
        let mut state = self.state.write().await;
        apply_test_result(&mut state, request)?;
        self.save(&state)?;
        Ok(())
    }
}
