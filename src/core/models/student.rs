//! Student model

use serde::{Deserialize, Serialize};
use std::fmt;

/// A registered student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Unique student identifier
    pub id: String,

    /// Registration number
    pub reg_no: String,

    /// Full name
    pub full_name: String,

    /// Contact email
    pub email: String,

    /// Deactivated students are kept but hidden from active listings
    pub active: bool,

    /// Grade point average over active graded enrollments
    pub gpa: f64,

    /// Codes of active courses, in enrollment order
    enrolled_courses: Vec<String>,
}

impl Student {
    /// Create a new, active student with no courses and a GPA of 0.0
    #[must_use]
    pub const fn new(id: String, reg_no: String, full_name: String, email: String) -> Self {
        Self {
            id,
            reg_no,
            full_name,
            email,
            active: true,
            gpa: 0.0,
            enrolled_courses: Vec::new(),
        }
    }

    /// Codes of active courses, in enrollment order
    #[must_use]
    pub fn enrolled_courses(&self) -> &[String] {
        &self.enrolled_courses
    }

    /// Add a course code to the enrolled list (ignored if already present)
    pub fn enroll_in(&mut self, course_code: &str) {
        if !self.enrolled_courses.iter().any(|c| c == course_code) {
            self.enrolled_courses.push(course_code.to_string());
        }
    }

    /// Remove a course code from the enrolled list
    pub fn unenroll_from(&mut self, course_code: &str) {
        self.enrolled_courses.retain(|c| c != course_code);
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Reg No: {} | Name: {} | Email: {} | Status: {}",
            self.id,
            self.reg_no,
            self.full_name,
            self.email,
            if self.active { "Active" } else { "Inactive" }
        )
    }
}
