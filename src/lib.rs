//! studyloop — a personal spaced-repetition study scheduler.
//!
//! Lessons derived from a recurring class timetable carry a continuous
//! mastery level in [0, 1]; review spacing grows Fibonacci-like as mastery
//! increases. Every save appends a full snapshot of the lesson list to the
//! schedule's history, and loading returns the second-to-last snapshot,
//! giving an always-available one-generation rollback.

pub mod progression;
pub mod schedule;
pub mod storage;
