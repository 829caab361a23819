//! Level-progression time series reconstructed from snapshot history.
//!
//! Because every snapshot is a full copy of the lesson list, the snapshot
//! history doubles as a per-lesson level time series. This module rebuilds
//! one series per distinct lesson name, sampled at each date-named
//! snapshot, and filters it down to a step-wise view: only samples where
//! the level changed are kept, plus the sample immediately preceding each
//! change. The root snapshot carries no date and is skipped; series that
//! never left level 0 are dropped.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::storage::{Result, SnapshotId, SnapshotStore};

/// One (snapshot date, level) sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub date: NaiveDate,
    pub level: f64,
}

/// One lesson's retained progression samples, in date order
#[derive(Debug, Clone)]
pub struct Series {
    pub name: String,
    pub samples: Vec<Sample>,
}

/// Build the per-lesson progression series for a schedule.
pub fn progression_series(snapshots: &SnapshotStore, schedule: &str) -> Result<Vec<Series>> {
    // lesson name -> snapshot date -> level
    let mut by_name: BTreeMap<String, BTreeMap<NaiveDate, f64>> = BTreeMap::new();
    for id in snapshots.list_snapshots(schedule)? {
        let date = match id {
            SnapshotId::Day(date) => date,
            SnapshotId::Root => continue,
        };
        for row in snapshots.read_rows(schedule, id)? {
            by_name.entry(row.name).or_default().insert(date, row.level);
        }
    }

    let mut series = Vec::new();
    for (name, points) in by_name {
        let points: Vec<Sample> = points
            .into_iter()
            .map(|(date, level)| Sample { date, level })
            .collect();

        let samples = retain_level_changes(&points);
        if samples.iter().map(|s| s.level).sum::<f64>() == 0.0 {
            continue;
        }
        series.push(Series { name, samples });
    }
    Ok(series)
}

/// Keep samples whose level differs from the previous sample, plus the
/// sample immediately preceding each change.
fn retain_level_changes(points: &[Sample]) -> Vec<Sample> {
    let mut keep = vec![false; points.len()];
    for i in 1..points.len() {
        if points[i].level != points[i - 1].level {
            keep[i] = true;
            keep[i - 1] = true;
        }
    }

    points
        .iter()
        .zip(keep)
        .filter(|(_, kept)| *kept)
        .map(|(sample, _)| *sample)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::models::Lesson;
    use chrono::{Datelike, Local};
    use tempfile::TempDir;

    fn this_year(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(Local::now().year(), m, day).unwrap()
    }

    fn sample(m: u32, day: u32, level: f64) -> Sample {
        Sample {
            date: this_year(m, day),
            level,
        }
    }

    #[test]
    fn test_retain_level_changes_keeps_step_edges() {
        let points = vec![
            sample(3, 1, 0.0),
            sample(3, 2, 0.0),
            sample(3, 3, 0.1),
            sample(3, 4, 0.1),
            sample(3, 5, 0.2),
        ];

        let kept = retain_level_changes(&points);
        assert_eq!(
            kept,
            vec![
                sample(3, 2, 0.0),
                sample(3, 3, 0.1),
                sample(3, 4, 0.1),
                sample(3, 5, 0.2),
            ]
        );
    }

    #[test]
    fn test_retain_level_changes_flat_series() {
        let points = vec![sample(3, 1, 0.3), sample(3, 2, 0.3)];
        assert!(retain_level_changes(&points).is_empty());
    }

    #[test]
    fn test_series_skip_root_and_flat_lessons() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path().to_path_buf());

        let mut physics = Lesson::new("Physics", this_year(3, 4));
        let idle = Lesson::new("Chemistry", this_year(3, 5));

        // Root snapshot, then three daily generations with Physics
        // progressing and Chemistry stuck at level 0
        store
            .save("maths", &[physics.clone(), idle.clone()], this_year(3, 9))
            .unwrap();
        store
            .save("maths", &[physics.clone(), idle.clone()], this_year(3, 10))
            .unwrap();
        physics.level = 0.1;
        store
            .save("maths", &[physics.clone(), idle.clone()], this_year(3, 11))
            .unwrap();
        physics.level = 0.2;
        store
            .save("maths", &[physics.clone(), idle.clone()], this_year(3, 12))
            .unwrap();

        let series = progression_series(&store, "maths").unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].name, physics.display_name());
        assert_eq!(
            series[0].samples,
            vec![
                sample(3, 10, 0.0),
                sample(3, 11, 0.1),
                sample(3, 12, 0.2),
            ]
        );
    }

    #[test]
    fn test_series_empty_without_date_snapshots() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path().to_path_buf());

        // Only the root snapshot exists
        store
            .save("maths", &[Lesson::new("Physics", this_year(3, 4))], this_year(3, 9))
            .unwrap();

        assert!(progression_series(&store, "maths").unwrap().is_empty());
    }
}
