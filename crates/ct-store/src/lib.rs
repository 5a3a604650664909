//! ct-store - Storage collaborator for Casttrack
//!
//! This crate provides the `SnapshotStore` trait and the JSON-file-backed
//! implementation. The store materializes the full entity graph once per
//! request; the result-recording write path runs read + validate + mutate +
//! persist as one logical unit under an exclusive lock.

pub mod error;
pub mod json;
pub mod traits;

pub use error::StoreError;
pub use json::JsonFileStore;
pub use traits::SnapshotStore;
