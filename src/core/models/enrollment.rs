//! Enrollment model

use super::Grade;
use serde::{Deserialize, Serialize};

/// One attempt of a student at a course
///
/// Unenrolling flips `active` off instead of removing the record, so a
/// student's list keeps the full history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    /// Enrolled student
    pub student_id: String,

    /// Enrolled course
    pub course_code: String,

    /// False once the student unenrolls
    pub active: bool,

    /// Letter grade, once marks are recorded
    pub grade: Option<Grade>,

    /// Raw marks out of 100
    pub marks: Option<f64>,
}

impl Enrollment {
    /// Create a new active, ungraded enrollment
    #[must_use]
    pub const fn new(student_id: String, course_code: String) -> Self {
        Self {
            student_id,
            course_code,
            active: true,
            grade: None,
            marks: None,
        }
    }

    /// Store marks and derive the letter grade from them
    pub fn record_grade(&mut self, marks: f64) -> Grade {
        let grade = Grade::from_marks(marks);
        self.marks = Some(marks);
        self.grade = Some(grade);
        grade
    }

    /// Whether this enrollment is the active one for `course_code`
    #[must_use]
    pub fn is_active_for(&self, course_code: &str) -> bool {
        self.active && self.course_code == course_code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_grade_sets_marks_and_letter() {
        let mut enrollment = Enrollment::new("S001".to_string(), "CS101".to_string());
        assert!(enrollment.grade.is_none());

        let grade = enrollment.record_grade(84.5);
        assert_eq!(grade, Grade::B);
        assert_eq!(enrollment.grade, Some(Grade::B));
        assert_eq!(enrollment.marks, Some(84.5));
    }

    #[test]
    fn test_inactive_enrollment_does_not_match() {
        let mut enrollment = Enrollment::new("S001".to_string(), "CS101".to_string());
        assert!(enrollment.is_active_for("CS101"));
        enrollment.active = false;
        assert!(!enrollment.is_active_for("CS101"));
    }
}
