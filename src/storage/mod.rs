//! Snapshot persistence and history editing
//!
//! This module provides:
//! - Versioned full-copy snapshot storage, one file per calendar day
//! - The second-to-last read policy (one-generation rollback)
//! - Cross-snapshot rewriting of a lesson's encoded date

pub mod history;
pub mod snapshots;

pub use history::HistoryEditor;
pub use snapshots::{Result, SnapshotError, SnapshotId, SnapshotRow, SnapshotStore};
