//! CLI command handlers for `ccrm`.
//!
//! Each subcommand is implemented in its own submodule.

pub mod backup;
pub mod config;
pub mod info;
pub mod menu;
pub mod report;

use campus_records::config::Config;
use campus_records::core::io::{self as records_io, COURSES_FILE, STUDENTS_FILE};
use campus_records::RecordStore;
use logger::{info, warn};
use std::path::Path;

/// Build the record store and load `students.csv` / `courses.csv` from the
/// configured data directory when they exist
///
/// A file that fails to import is reported and skipped; rows read before
/// the failure stay loaded.
pub fn load_store(config: &Config) -> RecordStore {
    let mut store = RecordStore::new(config.records.max_credits);
    let data_dir = Path::new(&config.paths.data_dir);

    let students = data_dir.join(STUDENTS_FILE);
    if students.is_file() {
        match records_io::import_students(&mut store, &students) {
            Ok(count) => info!("Loaded {} students from {}", count, students.display()),
            Err(e) => warn!("Could not load {}: {}", students.display(), e),
        }
    }

    let courses = data_dir.join(COURSES_FILE);
    if courses.is_file() {
        match records_io::import_courses(&mut store, &courses) {
            Ok(count) => info!("Loaded {} courses from {}", count, courses.display()),
            Err(e) => warn!("Could not load {}: {}", courses.display(), e),
        }
    }

    store
}
