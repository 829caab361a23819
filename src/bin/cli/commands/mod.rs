pub mod create;
pub mod edit;
pub mod list;
pub mod progress;
pub mod study;
