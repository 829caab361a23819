//! Versioned snapshot persistence for schedules.
//!
//! Directory structure:
//! ```text
//! schedules/{name}/
//! ├── root.csv          # First save (full lesson list)
//! ├── 2024-03-01.csv    # One snapshot per later save day
//! └── 2024-03-04.csv
//! ```
//!
//! Every snapshot is a complete copy of the lesson list, never a diff, so
//! the history is an append-only log of full generations. At most one
//! snapshot exists per calendar day; saving twice the same day overwrites
//! that day's file.
//!
//! `load` deliberately returns the **second-to-last** snapshot when more
//! than one exists: the most recent save stays out of the active working
//! copy until another save supersedes it. This one-generation lag is a
//! crude, always-available single-step rollback — a user's newest save
//! never destroys the previous stable state until a further save pushes
//! it out.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::schedule::codec::{self, NameDecodeError};
use crate::schedule::models::Lesson;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("schedule '{0}' does not exist")]
    ScheduleNotFound(String),

    #[error(transparent)]
    Name(#[from] NameDecodeError),
}

pub type Result<T> = std::result::Result<T, SnapshotError>;

/// Identifier of one snapshot within a schedule: the file stem.
///
/// `Root` orders before every date, so sorting identifiers always yields
/// the save order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SnapshotId {
    Root,
    Day(NaiveDate),
}

impl SnapshotId {
    pub fn file_name(&self) -> String {
        format!("{}.csv", self)
    }

    /// Parse a snapshot file stem (`root` or `YYYY-MM-DD`)
    fn from_stem(stem: &str) -> Option<Self> {
        if stem == "root" {
            Some(SnapshotId::Root)
        } else {
            NaiveDate::parse_from_str(stem, "%Y-%m-%d")
                .ok()
                .map(SnapshotId::Day)
        }
    }
}

impl fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotId::Root => write!(f, "root"),
            SnapshotId::Day(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

/// One persisted lesson row, exactly the on-disk column layout:
/// `name;last_date;level`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotRow {
    pub name: String,
    pub last_date: NaiveDate,
    pub level: f64,
}

fn row_from_lesson(lesson: &Lesson) -> SnapshotRow {
    SnapshotRow {
        name: lesson.display_name(),
        last_date: lesson.last_date,
        level: lesson.level,
    }
}

fn lesson_from_row(row: SnapshotRow) -> Result<Lesson> {
    let (topic, scheduled) = codec::decode(&row.name)?;
    Ok(Lesson {
        topic,
        scheduled,
        last_date: row.last_date,
        level: row.level,
    })
}

/// Snapshot storage rooted at a schedules directory
pub struct SnapshotStore {
    schedules_root: PathBuf,
}

impl SnapshotStore {
    pub fn new(schedules_root: PathBuf) -> Self {
        Self { schedules_root }
    }

    /// Directory holding one schedule's snapshots
    pub fn schedule_dir(&self, schedule: &str) -> PathBuf {
        self.schedules_root.join(schedule)
    }

    fn snapshot_path(&self, schedule: &str, id: SnapshotId) -> PathBuf {
        self.schedule_dir(schedule).join(id.file_name())
    }

    /// Names of all schedules with a storage directory, sorted
    pub fn list_schedules(&self) -> Result<Vec<String>> {
        if !self.schedules_root.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.schedules_root)? {
            let entry = entry?;
            if entry.path().is_dir() {
                names.push(entry.file_name().to_string_lossy().to_string());
            }
        }

        names.sort();
        Ok(names)
    }

    /// Snapshot identifiers of a schedule in save order (root first,
    /// then dates ascending)
    pub fn list_snapshots(&self, schedule: &str) -> Result<Vec<SnapshotId>> {
        let dir = self.schedule_dir(schedule);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().map_or(false, |ext| ext == "csv") {
                if let Some(id) = path
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .and_then(SnapshotId::from_stem)
                {
                    ids.push(id);
                }
            }
        }

        ids.sort();
        Ok(ids)
    }

    /// Write the full current lesson list as a new generation.
    ///
    /// Creates the schedule directory with a single `root` snapshot on
    /// first save; afterwards writes (or overwrites) today's snapshot.
    pub fn save(&self, schedule: &str, lessons: &[Lesson], today: NaiveDate) -> Result<SnapshotId> {
        let dir = self.schedule_dir(schedule);
        let id = if !dir.exists() {
            fs::create_dir_all(&dir)?;
            SnapshotId::Root
        } else {
            SnapshotId::Day(today)
        };

        self.write_snapshot(schedule, id, lessons)?;
        log::info!(
            "Saved {} lessons to {}/{}",
            lessons.len(),
            schedule,
            id.file_name()
        );
        Ok(id)
    }

    /// Load the working copy of a schedule.
    ///
    /// Zero snapshots is an error; a single snapshot is loaded as-is; with
    /// more than one, the second-to-last in save order is loaded (see the
    /// module docs for why the newest is skipped). With exactly two
    /// snapshots this means the older of the two.
    pub fn load(&self, schedule: &str) -> Result<Vec<Lesson>> {
        let ids = self.list_snapshots(schedule)?;
        let id = match ids.len() {
            0 => return Err(SnapshotError::ScheduleNotFound(schedule.to_string())),
            1 => ids[0],
            n => ids[n - 2],
        };

        log::debug!("Loading {}/{}", schedule, id.file_name());
        self.read_snapshot(schedule, id)
    }

    /// Read one snapshot's full lesson list
    pub fn read_snapshot(&self, schedule: &str, id: SnapshotId) -> Result<Vec<Lesson>> {
        self.read_rows(schedule, id)?
            .into_iter()
            .map(lesson_from_row)
            .collect()
    }

    /// Write one snapshot from a lesson list
    pub fn write_snapshot(&self, schedule: &str, id: SnapshotId, lessons: &[Lesson]) -> Result<()> {
        let rows: Vec<SnapshotRow> = lessons.iter().map(row_from_lesson).collect();
        self.write_rows(schedule, id, &rows)
    }

    /// Read one snapshot's raw rows without decoding the name column
    pub fn read_rows(&self, schedule: &str, id: SnapshotId) -> Result<Vec<SnapshotRow>> {
        let path = self.snapshot_path(schedule, id);
        let mut reader = csv::ReaderBuilder::new().delimiter(b';').from_path(&path)?;

        let mut rows = Vec::new();
        for row in reader.deserialize() {
            rows.push(row?);
        }
        Ok(rows)
    }

    /// Overwrite one snapshot with raw rows
    pub fn write_rows(&self, schedule: &str, id: SnapshotId, rows: &[SnapshotRow]) -> Result<()> {
        let path = self.snapshot_path(schedule, id);
        let mut writer = csv::WriterBuilder::new().delimiter(b';').from_path(&path)?;

        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}
