//! Cross-snapshot lesson date edits.
//!
//! Every save stores a full copy of all lessons, so one lesson occurrence
//! is duplicated verbatim across many historical snapshots. Moving a
//! lesson to a new date must therefore be propagated to every snapshot
//! containing it, or later operations filtering lessons by their encoded
//! date would silently miss the stale copies in older files.
//!
//! The edit walks the files one by one and is not atomic across them; an
//! interruption can leave earlier files updated and later ones not. This
//! is an accepted limitation and is not retried.

use chrono::NaiveDate;

use super::snapshots::{Result, SnapshotStore};
use crate::schedule::codec;

/// Rewrites one encoded lesson name across a schedule's whole history
pub struct HistoryEditor<'a> {
    snapshots: &'a SnapshotStore,
}

impl<'a> HistoryEditor<'a> {
    pub fn new(snapshots: &'a SnapshotStore) -> Self {
        Self { snapshots }
    }

    /// Move the lesson named exactly `old_name` to `new_date` in every
    /// snapshot containing it: the name is re-encoded with the new date
    /// and `last_date` is set to it. Snapshots without a matching row are
    /// left untouched.
    ///
    /// Returns the number of snapshots rewritten. The caller should reload
    /// the schedule through the standard load policy afterwards.
    pub fn edit_lesson(&self, schedule: &str, old_name: &str, new_date: NaiveDate) -> Result<usize> {
        let (topic, _) = codec::decode(old_name)?;
        let new_name = codec::encode(&topic, new_date);

        let mut touched = 0;
        for id in self.snapshots.list_snapshots(schedule)? {
            let mut rows = self.snapshots.read_rows(schedule, id)?;

            let mut changed = false;
            for row in rows.iter_mut().filter(|row| row.name == old_name) {
                row.name = new_name.clone();
                row.last_date = new_date;
                changed = true;
            }

            if changed {
                self.snapshots.write_rows(schedule, id, &rows)?;
                touched += 1;
                log::debug!("Rewrote '{}' in {}/{}", old_name, schedule, id.file_name());
            }
        }

        log::info!(
            "Moved '{}' to {} across {} snapshots of '{}'",
            old_name,
            new_date,
            touched,
            schedule
        );
        Ok(touched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::models::Lesson;
    use crate::storage::snapshots::SnapshotId;
    use chrono::{Datelike, Local};
    use std::fs;
    use tempfile::TempDir;

    fn this_year(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(Local::now().year(), m, day).unwrap()
    }

    /// Three generations: root plus two date snapshots, all containing
    /// Physics and Chemistry
    fn seed(store: &SnapshotStore) -> Vec<Lesson> {
        let lessons = vec![
            Lesson::new("Physics", this_year(3, 4)),
            Lesson::new("Chemistry", this_year(3, 5)),
        ];
        store.save("maths", &lessons, this_year(3, 10)).unwrap();
        store.save("maths", &lessons, this_year(3, 10)).unwrap();
        store.save("maths", &lessons, this_year(3, 11)).unwrap();
        lessons
    }

    #[test]
    fn test_edit_updates_every_snapshot() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path().to_path_buf());
        let lessons = seed(&store);

        let old_name = lessons[0].display_name();
        let new_date = this_year(3, 18);
        let touched = HistoryEditor::new(&store)
            .edit_lesson("maths", &old_name, new_date)
            .unwrap();

        assert_eq!(touched, 3);
        let new_name = codec::encode("Physics", new_date);
        for id in store.list_snapshots("maths").unwrap() {
            let rows = store.read_rows("maths", id).unwrap();
            let row = rows.iter().find(|r| r.name == new_name).unwrap();
            assert_eq!(row.last_date, new_date);
            assert!(!rows.iter().any(|r| r.name == old_name));
        }
    }

    #[test]
    fn test_edit_leaves_unrelated_rows_alone() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path().to_path_buf());
        let lessons = seed(&store);

        HistoryEditor::new(&store)
            .edit_lesson("maths", &lessons[0].display_name(), this_year(3, 18))
            .unwrap();

        let rows = store.read_rows("maths", SnapshotId::Root).unwrap();
        let chemistry = rows.iter().find(|r| r.name == lessons[1].display_name());
        assert!(chemistry.is_some());
        assert_eq!(chemistry.unwrap().last_date, this_year(3, 5));
    }

    #[test]
    fn test_edit_skips_snapshots_without_the_lesson() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path().to_path_buf());

        // Root holds only Chemistry; the later snapshot holds both
        let chemistry = Lesson::new("Chemistry", this_year(3, 5));
        let physics = Lesson::new("Physics", this_year(3, 4));
        store.save("maths", &[chemistry.clone()], this_year(3, 10)).unwrap();
        store
            .save("maths", &[chemistry, physics.clone()], this_year(3, 11))
            .unwrap();

        let root_path = store.schedule_dir("maths").join("root.csv");
        let before = fs::read_to_string(&root_path).unwrap();

        let touched = HistoryEditor::new(&store)
            .edit_lesson("maths", &physics.display_name(), this_year(3, 18))
            .unwrap();

        assert_eq!(touched, 1);
        assert_eq!(fs::read_to_string(&root_path).unwrap(), before);
    }

    #[test]
    fn test_edit_rejects_undecodable_name() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path().to_path_buf());
        seed(&store);

        let result = HistoryEditor::new(&store).edit_lesson("maths", "Physics", this_year(3, 18));
        assert!(result.is_err());
    }
}
