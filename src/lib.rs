//! Academic records library
//!
//! Keeps students, courses and enrollments in memory, enforces the
//! per-semester credit cap, computes credit-weighted GPAs and renders
//! transcripts. CSV import/export, backups and summary reports live
//! alongside the store; the `ccrm` binary wraps it all in a console.

pub mod config;
pub mod core;

pub use crate::core::error::{DataError, Entity, RecordsError};
pub use crate::core::get_version;
pub use crate::core::models::{Course, Enrollment, Grade, Semester, Student};
pub use crate::core::records::RecordStore;
