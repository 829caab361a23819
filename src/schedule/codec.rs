//! Encoded lesson display names.
//!
//! A lesson's display name doubles as its persisted identifier:
//! `"<topic> (<day> <month-abbrev>)"`, e.g. `"Physics (05 Mar)"`. The year
//! is not part of the encoding; decoding combines the date fragment with a
//! caller-supplied year (the current local year in practice). Two lessons
//! sharing a day and month across different years are therefore
//! indistinguishable — a known limitation that is preserved rather than
//! resolved by guessing.

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NameDecodeError {
    #[error("lesson name '{0}' has no '(<day> <month>)' date tag")]
    MissingDateTag(String),

    #[error("lesson name '{name}' has an invalid date tag '({day} {month})'")]
    InvalidDate {
        name: String,
        day: String,
        month: String,
    },
}

pub type Result<T> = std::result::Result<T, NameDecodeError>;

/// Regex for the trailing date tag in an encoded name
/// Matches patterns like "Physics (05 Mar)" or "Linear Algebra (9 Jan)"
fn date_tag_regex() -> Regex {
    Regex::new(r"^(.+) \((\d{1,2}) ([A-Za-z]{3})\)$").unwrap()
}

/// Encode a topic and its date into the display form `"topic (dd Mon)"`.
pub fn encode(topic: &str, date: NaiveDate) -> String {
    format!("{} ({})", topic, date.format("%d %b"))
}

/// Decode an encoded name into its bare topic and date, assuming `year`.
pub fn decode_with_year(name: &str, year: i32) -> Result<(String, NaiveDate)> {
    let caps = date_tag_regex()
        .captures(name)
        .ok_or_else(|| NameDecodeError::MissingDateTag(name.to_string()))?;

    let topic = caps[1].to_string();
    let date = NaiveDate::parse_from_str(&format!("{} {} {}", &caps[2], &caps[3], year), "%d %b %Y")
        .map_err(|_| NameDecodeError::InvalidDate {
            name: name.to_string(),
            day: caps[2].to_string(),
            month: caps[3].to_string(),
        })?;

    Ok((topic, date))
}

/// Decode an encoded name, assuming the current local year.
pub fn decode(name: &str) -> Result<(String, NaiveDate)> {
    decode_with_year(name, chrono::Local::now().year())
}
