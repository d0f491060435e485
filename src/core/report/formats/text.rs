//! Plain-text summary report

use crate::core::report::{RecordsSummary, ReportGenerator};
use std::error::Error;
use std::fmt::Write;

/// Plain-text report generator
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TextReporter {
    fn render(&self, summary: &RecordsSummary) -> Result<String, Box<dyn Error>> {
        let mut out = String::new();

        writeln!(out, "=== Records Summary ===")?;
        writeln!(
            out,
            "Students: {} ({} active)",
            summary.total_students, summary.active_students
        )?;
        writeln!(out, "Courses: {}", summary.total_courses)?;
        writeln!(out, "Active enrollments: {}", summary.active_enrollments)?;
        writeln!(out, "Credit cap: {}", summary.max_credits)?;

        writeln!(out, "\nGPA distribution:")?;
        for (label, count) in summary.gpa_distribution.rows() {
            writeln!(out, "  {label:<10} {count}")?;
        }

        writeln!(out, "\nTop students:")?;
        if summary.top_students.is_empty() {
            writeln!(out, "  (no graded students)")?;
        }
        for (rank, student) in summary.top_students.iter().enumerate() {
            writeln!(
                out,
                "  {}. {} ({}) - GPA {:.2}",
                rank + 1,
                student.name,
                student.id,
                student.gpa
            )?;
        }

        writeln!(out, "\nCourses by department:")?;
        for (department, count) in &summary.courses_by_department {
            writeln!(out, "  {department}: {count}")?;
        }

        writeln!(out, "\nCourses by semester:")?;
        for (semester, count) in &summary.courses_by_semester {
            writeln!(out, "  {semester}: {count}")?;
        }

        Ok(out)
    }
}
