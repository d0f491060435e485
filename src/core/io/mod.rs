//! File exchange for the record store: CSV import/export and backups

pub mod backup;
pub mod csv_io;

pub use backup::{create_backup, directory_size, list_by_depth};
pub use csv_io::{export_courses, export_students, import_courses, import_students};

/// File name used for student records inside data and backup directories
pub const STUDENTS_FILE: &str = "students.csv";

/// File name used for the course catalog inside data and backup directories
pub const COURSES_FILE: &str = "courses.csv";
