//! Lesson scheduling
//!
//! This module provides:
//! - Timetable expansion into dated lessons
//! - The continuous review interval model
//! - Due and forecast queries over a lesson collection
//! - Review outcome application during a study session

pub mod codec;
pub mod interval;
pub mod models;
pub mod session;
pub mod store;

pub use models::*;
pub use store::LessonStore;
