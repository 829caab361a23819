use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

use studyloop::schedule::LessonStore;
use studyloop::storage::SnapshotStore;

/// Shared application state for CLI commands
pub struct App {
    pub snapshots: SnapshotStore,
}

impl App {
    pub fn new(schedules_dir: PathBuf) -> Self {
        Self {
            snapshots: SnapshotStore::new(schedules_dir),
        }
    }

    pub fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    /// Load a schedule into a lesson store via the standard read policy
    pub fn open(&self, name: &str) -> Result<LessonStore> {
        let lessons = self
            .snapshots
            .load(name)
            .with_context(|| format!("Failed to load schedule '{}'", name))?;
        Ok(LessonStore::from_lessons(lessons))
    }
}
