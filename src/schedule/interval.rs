//! Review interval growth model.
//!
//! Review spacing follows Fibonacci-like growth (1, 1, 2, 3, 5, 8, 13, …
//! days) as mastery increases, but the mastery level is continuous, so the
//! sequence is evaluated through its analytic continuation (Binet's formula
//! with the oscillating correction term) instead of jumping discretely at
//! each 0.1 boundary. The result is continuous and monotonically
//! non-decreasing as the level rises from 0 to 1.

use chrono::{Duration, NaiveDate};

/// Days until the next review for a given mastery level.
///
/// Evaluates the real-argument Fibonacci continuation at `y = 10*level + 2`
/// and rounds to the nearest whole day. Level 0 maps to 1 day, level 1 to
/// 144 days.
pub fn next_review_offset(level: f64) -> i64 {
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let y = 10.0 * level + 2.0;
    let fib = (phi.powf(y) - (std::f64::consts::PI * y).cos() * phi.powf(-y)) / 5.0_f64.sqrt();
    fib.round() as i64
}

/// Date of the next review given the last study date and current level.
pub fn next_review_date(last_date: NaiveDate, level: f64) -> NaiveDate {
    last_date + Duration::days(next_review_offset(level))
}
