//! Data models for schedules and lessons

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use super::codec;

/// One trackable topic occurrence with a mastery level and last-reviewed date
#[derive(Debug, Clone, PartialEq)]
pub struct Lesson {
    /// Bare topic label, without the encoded date tag
    pub topic: String,
    /// Originally scheduled occurrence date; carried in the display name
    pub scheduled: NaiveDate,
    /// Date of the most recent study event, or `scheduled` if never studied
    pub last_date: NaiveDate,
    /// Continuous mastery score in [0, 1]
    pub level: f64,
}

impl Lesson {
    pub fn new(topic: impl Into<String>, scheduled: NaiveDate) -> Self {
        Self {
            topic: topic.into(),
            scheduled,
            last_date: scheduled,
            level: 0.0,
        }
    }

    /// Display name doubling as the persisted identifier: `"topic (dd Mon)"`.
    ///
    /// Regenerated on demand from the structured fields rather than stored.
    pub fn display_name(&self) -> String {
        codec::encode(&self.topic, self.scheduled)
    }
}

/// Recurring class timetable rule that lessons are expanded from
#[derive(Debug, Clone)]
pub struct TimetableRule {
    pub topic: String,
    /// First day of the range (inclusive)
    pub start: NaiveDate,
    /// Last day of the range (exclusive)
    pub end: NaiveDate,
    pub weekdays: Vec<Weekday>,
}

impl TimetableRule {
    /// All occurrence dates: days in `[start, end)` falling on one of the
    /// rule's weekdays, in calendar order.
    pub fn occurrences(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let days = (self.end - self.start).num_days().max(0);
        (0..days)
            .map(move |i| self.start + Duration::days(i))
            .filter(move |date| self.weekdays.contains(&date.weekday()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_new_lesson_defaults() {
        let lesson = Lesson::new("Physics", d(2024, 3, 5));
        assert_eq!(lesson.last_date, d(2024, 3, 5));
        assert_eq!(lesson.level, 0.0);
        assert_eq!(lesson.display_name(), "Physics (05 Mar)");
    }

    #[test]
    fn test_occurrences_filter_weekdays() {
        // 2024-01-01 is a Monday
        let rule = TimetableRule {
            topic: "Physics".to_string(),
            start: d(2024, 1, 1),
            end: d(2024, 1, 15),
            weekdays: vec![Weekday::Mon, Weekday::Fri],
        };
        let dates: Vec<NaiveDate> = rule.occurrences().collect();
        assert_eq!(
            dates,
            vec![d(2024, 1, 1), d(2024, 1, 5), d(2024, 1, 8), d(2024, 1, 12)]
        );
    }

    #[test]
    fn test_occurrences_end_exclusive() {
        // End date itself never produces a lesson
        let rule = TimetableRule {
            topic: "Physics".to_string(),
            start: d(2024, 1, 1),
            end: d(2024, 1, 8),
            weekdays: vec![Weekday::Mon],
        };
        let dates: Vec<NaiveDate> = rule.occurrences().collect();
        assert_eq!(dates, vec![d(2024, 1, 1)]);
    }

    #[test]
    fn test_occurrences_empty_range() {
        let rule = TimetableRule {
            topic: "Physics".to_string(),
            start: d(2024, 1, 8),
            end: d(2024, 1, 1),
            weekdays: vec![Weekday::Mon],
        };
        assert_eq!(rule.occurrences().count(), 0);
    }
}
