//! CSV import and export of students and courses
//!
//! Rows are (de)serialized through `serde` with the `csv` crate. Imports go
//! through the store one row at a time, so a failing row leaves the rows
//! before it in place.

use crate::core::error::DataError;
use crate::core::models::{Course, Semester, Student};
use crate::core::records::RecordStore;
use logger::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One line of a students file
#[derive(Debug, Serialize, Deserialize)]
struct StudentRow {
    id: String,
    reg_no: String,
    full_name: String,
    email: String,
    #[serde(default)]
    active: Option<bool>,
}

impl From<&Student> for StudentRow {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id.clone(),
            reg_no: student.reg_no.clone(),
            full_name: student.full_name.clone(),
            email: student.email.clone(),
            active: Some(student.active),
        }
    }
}

/// One line of a courses file
#[derive(Debug, Serialize, Deserialize)]
struct CourseRow {
    code: String,
    title: String,
    credits: u32,
    instructor_id: String,
    semester: String,
    department: String,
}

impl From<&Course> for CourseRow {
    fn from(course: &Course) -> Self {
        Self {
            code: course.code.clone(),
            title: course.title.clone(),
            credits: course.credits,
            instructor_id: course.instructor_id.clone(),
            semester: course.semester.code().to_string(),
            department: course.department.clone(),
        }
    }
}

impl CourseRow {
    fn into_course(self, line: u64) -> Result<Course, DataError> {
        let semester: Semester = self
            .semester
            .parse()
            .map_err(|message| DataError::InvalidRow { line, message })?;
        Ok(Course::new(
            self.code,
            self.title,
            self.credits,
            self.instructor_id,
            semester,
            self.department,
        ))
    }
}

/// Import students from a CSV file into the store
///
/// # Returns
/// The number of students imported
///
/// # Errors
/// Returns an error if the file cannot be read or a row is malformed
pub fn import_students<P: AsRef<Path>>(store: &mut RecordStore, path: P) -> Result<usize, DataError> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut count = 0;
    for record in reader.records() {
        let record = record?;
        let row: StudentRow = record.deserialize(Some(&headers))?;

        let mut student = Student::new(row.id, row.reg_no, row.full_name, row.email);
        student.active = row.active.unwrap_or(true);
        debug!("Importing student {}", student.id);
        store.add_student(student);
        count += 1;
    }

    info!("Imported {} students from {}", count, path.display());
    Ok(count)
}

/// Import courses from a CSV file into the store
///
/// # Returns
/// The number of courses imported
///
/// # Errors
/// Returns an error if the file cannot be read, a row is malformed, or a
/// semester name is not recognized
pub fn import_courses<P: AsRef<Path>>(store: &mut RecordStore, path: P) -> Result<usize, DataError> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut count = 0;
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, csv::Position::line);
        let row: CourseRow = record.deserialize(Some(&headers))?;

        let course = row.into_course(line)?;
        debug!("Importing course {}", course.code);
        store
            .add_course(course)
            .map_err(|e| DataError::InvalidRow {
                line,
                message: e.to_string(),
            })?;
        count += 1;
    }

    info!("Imported {} courses from {}", count, path.display());
    Ok(count)
}

/// Export every student, sorted by id, to a CSV file
///
/// # Returns
/// The number of students written
///
/// # Errors
/// Returns an error if the file cannot be written
pub fn export_students<P: AsRef<Path>>(store: &RecordStore, path: P) -> Result<usize, DataError> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)?;

    let students = store.all_students();
    for student in &students {
        writer.serialize(StudentRow::from(*student))?;
    }
    writer.flush()?;

    info!("Exported {} students to {}", students.len(), path.display());
    Ok(students.len())
}

/// Export every course, sorted by code, to a CSV file
///
/// # Returns
/// The number of courses written
///
/// # Errors
/// Returns an error if the file cannot be written
pub fn export_courses<P: AsRef<Path>>(store: &RecordStore, path: P) -> Result<usize, DataError> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)?;

    let courses = store.all_courses();
    for course in &courses {
        writer.serialize(CourseRow::from(*course))?;
    }
    writer.flush()?;

    info!("Exported {} courses to {}", courses.len(), path.display());
    Ok(courses.len())
}
