//! Course model

use super::Semester;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A course in the catalog, keyed by its code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course code (e.g., "CS101")
    pub code: String,

    /// Course title (e.g., "Introduction to Programming")
    pub title: String,

    /// Credit count
    pub credits: u32,

    /// Identifier of the teaching instructor
    pub instructor_id: String,

    /// Semester the course runs in
    pub semester: Semester,

    /// Owning department (e.g., "Computer Science")
    pub department: String,
}

impl Course {
    /// Create a new course
    #[must_use]
    pub const fn new(
        code: String,
        title: String,
        credits: u32,
        instructor_id: String,
        semester: Semester,
        department: String,
    ) -> Self {
        Self {
            code,
            title,
            credits,
            instructor_id,
            semester,
            department,
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({} credits) | Instructor: {} | {} | {}",
            self.code,
            self.title,
            self.credits,
            self.instructor_id,
            self.semester,
            self.department
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation() {
        let course = Course::new(
            "CS101".to_string(),
            "Intro to Programming".to_string(),
            4,
            "I100".to_string(),
            Semester::Fall,
            "Computer Science".to_string(),
        );

        assert_eq!(course.code, "CS101");
        assert_eq!(course.credits, 4);
        assert_eq!(course.semester, Semester::Fall);
    }

    #[test]
    fn test_course_display() {
        let course = Course::new(
            "MA201".to_string(),
            "Linear Algebra".to_string(),
            3,
            "I200".to_string(),
            Semester::Spring,
            "Mathematics".to_string(),
        );

        assert_eq!(
            course.to_string(),
            "MA201 - Linear Algebra (3 credits) | Instructor: I200 | Spring | Mathematics"
        );
    }
}
