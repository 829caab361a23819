//! In-memory lesson collection with due and forecast queries.

use chrono::NaiveDate;

use super::interval::next_review_date;
use super::models::{Lesson, TimetableRule};

/// Ordered, index-stable collection of a schedule's lessons.
///
/// Lessons keep the order they were added in (timetable expansion order,
/// or row order when loaded from a snapshot); sessions walk them by index
/// and replace records in place with updated copies.
#[derive(Debug, Default)]
pub struct LessonStore {
    lessons: Vec<Lesson>,
}

impl LessonStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lessons(lessons: Vec<Lesson>) -> Self {
        Self { lessons }
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    /// Expand a timetable rule into one level-0 lesson per occurrence.
    pub fn add_lessons(&mut self, rule: &TimetableRule) {
        for date in rule.occurrences() {
            self.lessons.push(Lesson::new(rule.topic.clone(), date));
        }
    }

    /// Replace the lesson at `index` with an updated record.
    pub fn replace(&mut self, index: usize, lesson: Lesson) {
        self.lessons[index] = lesson;
    }

    /// Indices of lessons due or overdue at `today`, in store order.
    pub fn due_indices(&self, today: NaiveDate) -> Vec<usize> {
        self.lessons
            .iter()
            .enumerate()
            .filter(|(_, lesson)| next_review_date(lesson.last_date, lesson.level) <= today)
            .map(|(index, _)| index)
            .collect()
    }

    /// Lessons whose computed next review date has arrived or passed.
    pub fn due(&self, today: NaiveDate) -> Vec<&Lesson> {
        self.lessons
            .iter()
            .filter(|lesson| next_review_date(lesson.last_date, lesson.level) <= today)
            .collect()
    }

    /// Heuristic review load at a future date.
    ///
    /// For each lesson, ten synthetic levels `level + 0.1*k` (k = 0..=9)
    /// are probed and the lesson is included once per probe whose review
    /// date lands exactly on `date`. Duplicates across probes show load
    /// clustering and are deliberately not collapsed. This assumes
    /// incremental mastery growth; it is a forecast, not a simulation.
    pub fn forecast(&self, date: NaiveDate) -> Vec<&Lesson> {
        let mut matches = Vec::new();
        for k in 0..10 {
            let delta = 0.1 * k as f64;
            matches.extend(
                self.lessons
                    .iter()
                    .filter(|lesson| next_review_date(lesson.last_date, lesson.level + delta) == date),
            );
        }
        matches
    }
}
