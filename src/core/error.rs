//! Error types for record keeping and data exchange

use std::fmt;

/// Kind of record an identifier failed to resolve to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    /// A student identifier
    Student,
    /// A course code
    Course,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Student => f.write_str("Student"),
            Self::Course => f.write_str("Course"),
        }
    }
}

/// Business-rule failures raised by the record store
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordsError {
    /// Unknown student or course identifier
    #[error("{entity} not found: {id}")]
    NotFound {
        /// What was being looked up
        entity: Entity,
        /// The identifier that did not resolve
        id: String,
    },

    /// The student already holds an active enrollment in the course
    #[error("Student {student_id} already enrolled in course: {course_code}")]
    DuplicateEnrollment {
        /// Student identifier
        student_id: String,
        /// Course code
        course_code: String,
    },

    /// Granting the enrollment would push the student past the credit cap
    #[error("Credit limit exceeded. Current: {current}, Adding: {adding}, Max: {max}")]
    CreditLimitExceeded {
        /// Credits the student already carries
        current: u32,
        /// Credits of the requested course
        adding: u32,
        /// Configured per-semester cap
        max: u32,
    },

    /// A course must carry at least one credit
    #[error("Course {code} must carry at least one credit")]
    InvalidCredits {
        /// Course code
        code: String,
    },
}

impl RecordsError {
    pub(crate) fn student_not_found(id: &str) -> Self {
        Self::NotFound {
            entity: Entity::Student,
            id: id.to_string(),
        }
    }

    pub(crate) fn course_not_found(code: &str) -> Self {
        Self::NotFound {
            entity: Entity::Course,
            id: code.to_string(),
        }
    }
}

/// Failures while importing, exporting or backing up record files
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// Underlying filesystem error
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV structure or a field that failed to deserialize
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A well-formed row whose values are not acceptable
    #[error("Invalid row {line}: {message}")]
    InvalidRow {
        /// 1-based line number in the file (header is line 1)
        line: u64,
        /// What was wrong with the row
        message: String,
    },
}
