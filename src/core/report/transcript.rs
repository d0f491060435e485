//! Plain-text student transcripts

use crate::core::models::{Course, Enrollment, Student};
use std::fmt::Write;

/// Render a transcript for `student`
///
/// Lists every active enrollment whose course resolves through `lookup`,
/// showing `N/A` for ungraded courses and `0.0` for missing marks.
pub fn render<'a>(
    student: &Student,
    enrollments: &[Enrollment],
    lookup: impl Fn(&str) -> Option<&'a Course>,
) -> String {
    let mut out = String::new();

    out.push_str("=== TRANSCRIPT ===\n");
    let _ = writeln!(out, "Student: {}", student.full_name);
    let _ = writeln!(out, "Registration No: {}", student.reg_no);
    let _ = writeln!(out, "GPA: {:.2}\n", student.gpa);

    out.push_str("Course Records:\n");
    out.push_str("Code\tTitle\t\t\tCredits\tGrade\tMarks\n");
    out.push_str("----\t-----\t\t\t-------\t-----\t-----\n");

    for enrollment in enrollments.iter().filter(|e| e.active) {
        let Some(course) = lookup(&enrollment.course_code) else {
            continue;
        };
        let grade = enrollment.grade.map_or("N/A", |g| g.letter());
        let _ = writeln!(
            out,
            "{}\t{:<20}\t{}\t{}\t{:.1}",
            course.code,
            course.title,
            course.credits,
            grade,
            enrollment.marks.unwrap_or(0.0)
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use crate::core::models::{Course, Semester, Student};
    use crate::core::records::RecordStore;

    fn store() -> RecordStore {
        let mut store = RecordStore::new(18);
        store.add_student(Student::new(
            "S1".to_string(),
            "REG-001".to_string(),
            "Ada Lovelace".to_string(),
            "ada@example.edu".to_string(),
        ));
        for (code, title, credits) in [("CS101", "Programming", 3), ("MA201", "Linear Algebra", 4)] {
            store
                .add_course(Course::new(
                    code.to_string(),
                    title.to_string(),
                    credits,
                    "I100".to_string(),
                    Semester::Fall,
                    "Science".to_string(),
                ))
                .unwrap();
        }
        store
    }

    #[test]
    fn test_transcript_lists_active_enrollments() {
        let mut store = store();
        store.enroll("S1", "CS101").unwrap();
        store.enroll("S1", "MA201").unwrap();
        store.record_grade("S1", "CS101", 92.0);

        let transcript = store.transcript("S1");

        assert!(transcript.starts_with("=== TRANSCRIPT ===\n"));
        assert!(transcript.contains("Student: Ada Lovelace\n"));
        assert!(transcript.contains("Registration No: REG-001\n"));
        assert!(transcript.contains("GPA: 4.00\n"));
        assert!(transcript.contains("CS101\tProgramming         \t3\tA\t92.0\n"));
        assert!(transcript.contains("MA201\tLinear Algebra      \t4\tN/A\t0.0\n"));
    }

    #[test]
    fn test_transcript_skips_dropped_courses() {
        let mut store = store();
        store.enroll("S1", "CS101").unwrap();
        store.enroll("S1", "MA201").unwrap();
        store.unenroll("S1", "MA201");

        let transcript = store.transcript("S1");
        assert!(transcript.contains("CS101\t"));
        assert!(!transcript.contains("MA201"));
    }
}
