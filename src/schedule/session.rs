//! Per-lesson review outcome application.
//!
//! A study session walks the due lessons strictly in store order; each
//! lesson receives exactly one outcome. The update itself is a pure
//! transformation producing a new record, stored back by index.

use chrono::NaiveDate;

use super::interval::next_review_date;
use super::models::Lesson;

/// Report of one applied review, for rendering by the caller
#[derive(Debug, Clone)]
pub struct ReviewReport {
    /// How many days past the computed review date the session happened
    pub days_late: i64,
    pub old_level: f64,
    pub new_level: f64,
    /// Next review date computed from the updated record
    pub next_review: NaiveDate,
}

/// Days past the lesson's computed review date. Always >= 0 for a due lesson.
pub fn days_late(lesson: &Lesson, today: NaiveDate) -> i64 {
    (today - next_review_date(lesson.last_date, lesson.level)).num_days()
}

/// Apply one study outcome to a lesson, returning the updated record.
///
/// Understood: the 0.1 reward shrinks by 0.01 per day of lateness and can
/// turn negative. Not understood: a fixed -0.1. The level stays clamped to
/// [0, 1]. `last_date` is always reset to `today` — a lesson answered
/// incorrectly still restarts its review clock, at the reduced level, so
/// the next offset is computed from the lower score.
pub fn apply_outcome(lesson: &Lesson, understood: bool, today: NaiveDate) -> (Lesson, ReviewReport) {
    let days_late = days_late(lesson, today);
    let progression = if understood {
        0.1 - 0.01 * days_late as f64
    } else {
        -0.1
    };
    let new_level = (lesson.level + progression).clamp(0.0, 1.0);

    let mut updated = lesson.clone();
    updated.level = new_level;
    updated.last_date = today;

    let report = ReviewReport {
        days_late,
        old_level: lesson.level,
        new_level,
        next_review: next_review_date(today, new_level),
    };

    (updated, report)
}
