//! Aggregate statistics over the whole record store

use crate::core::models::{Semester, Student};
use crate::core::records::RecordStore;

/// Number of students listed in the top-GPA table
pub const TOP_STUDENT_COUNT: usize = 5;

/// Active students bucketed by GPA
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GpaDistribution {
    /// GPA of 3.5 and above
    pub excellent: usize,
    /// 3.0 up to 3.5
    pub good: usize,
    /// 2.0 up to 3.0
    pub satisfactory: usize,
    /// Below 2.0
    pub below: usize,
    /// No graded active enrollment yet
    pub ungraded: usize,
}

impl GpaDistribution {
    fn add(&mut self, gpa: Option<f64>) {
        match gpa {
            None => self.ungraded += 1,
            Some(g) if g >= 3.5 => self.excellent += 1,
            Some(g) if g >= 3.0 => self.good += 1,
            Some(g) if g >= 2.0 => self.satisfactory += 1,
            Some(_) => self.below += 1,
        }
    }

    /// Rows of (label, count) in display order
    #[must_use]
    pub const fn rows(&self) -> [(&'static str, usize); 5] {
        [
            ("3.5 - 4.0", self.excellent),
            ("3.0 - 3.5", self.good),
            ("2.0 - 3.0", self.satisfactory),
            ("Below 2.0", self.below),
            ("Ungraded", self.ungraded),
        ]
    }
}

/// A row of the top-students table
#[derive(Debug, Clone, PartialEq)]
pub struct RankedStudent {
    /// Student identifier
    pub id: String,
    /// Full name
    pub name: String,
    /// Current GPA
    pub gpa: f64,
}

/// Summary statistics for a record store
#[derive(Debug, Clone)]
pub struct RecordsSummary {
    /// All registered students
    pub total_students: usize,
    /// Students not deactivated
    pub active_students: usize,
    /// Courses in the catalog
    pub total_courses: usize,
    /// Active enrollments across all students
    pub active_enrollments: usize,
    /// Credit cap in force
    pub max_credits: u32,
    /// GPA buckets over active students
    pub gpa_distribution: GpaDistribution,
    /// Best active, graded students (highest GPA first)
    pub top_students: Vec<RankedStudent>,
    /// Course count per department, sorted by department name
    pub courses_by_department: Vec<(String, usize)>,
    /// Course count per semester
    pub courses_by_semester: Vec<(Semester, usize)>,
}

impl RecordsSummary {
    /// Compute summary statistics from the store
    #[must_use]
    pub fn from_store(store: &RecordStore) -> Self {
        let active: Vec<&Student> = store.active_students();

        let mut gpa_distribution = GpaDistribution::default();
        let mut top_students = Vec::new();
        for student in &active {
            let gpa = graded_gpa(store, student);
            gpa_distribution.add(gpa);
            if let Some(gpa) = gpa {
                top_students.push(RankedStudent {
                    id: student.id.clone(),
                    name: student.full_name.clone(),
                    gpa,
                });
            }
        }
        top_students.sort_by(|a, b| b.gpa.total_cmp(&a.gpa).then_with(|| a.id.cmp(&b.id)));
        top_students.truncate(TOP_STUDENT_COUNT);

        let courses = store.all_courses();
        let mut courses_by_department: Vec<(String, usize)> = Vec::new();
        for course in &courses {
            match courses_by_department
                .iter_mut()
                .find(|(dept, _)| dept.eq_ignore_ascii_case(&course.department))
            {
                Some((_, count)) => *count += 1,
                None => courses_by_department.push((course.department.clone(), 1)),
            }
        }
        courses_by_department.sort_by(|a, b| a.0.cmp(&b.0));

        let courses_by_semester = Semester::ALL
            .iter()
            .map(|&sem| (sem, courses.iter().filter(|c| c.semester == sem).count()))
            .collect();

        let active_enrollments = store
            .all_students()
            .iter()
            .map(|s| store.enrollments(&s.id).iter().filter(|e| e.active).count())
            .sum();

        Self {
            total_students: store.all_students().len(),
            active_students: active.len(),
            total_courses: courses.len(),
            active_enrollments,
            max_credits: store.max_credits(),
            gpa_distribution,
            top_students,
            courses_by_department,
            courses_by_semester,
        }
    }
}

/// GPA of a student who has at least one active graded enrollment
fn graded_gpa(store: &RecordStore, student: &Student) -> Option<f64> {
    store
        .enrollments(&student.id)
        .iter()
        .any(|e| e.active && e.grade.is_some())
        .then_some(student.gpa)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Course;

    fn populated() -> RecordStore {
        let mut store = RecordStore::new(18);
        for (id, name) in [("S1", "Ada"), ("S2", "Grace"), ("S3", "Alan"), ("S4", "Edsger")] {
            store.add_student(Student::new(
                id.to_string(),
                format!("REG-{id}"),
                name.to_string(),
                format!("{id}@example.edu"),
            ));
        }
        for (code, dept, sem) in [
            ("CS101", "Computer Science", Semester::Fall),
            ("CS201", "computer science", Semester::Spring),
            ("MA101", "Mathematics", Semester::Fall),
        ] {
            store
                .add_course(Course::new(
                    code.to_string(),
                    code.to_string(),
                    3,
                    "I1".to_string(),
                    sem,
                    dept.to_string(),
                ))
                .unwrap();
        }

        store.enroll("S1", "CS101").unwrap();
        store.record_grade("S1", "CS101", 95.0); // 4.0
        store.enroll("S2", "CS101").unwrap();
        store.record_grade("S2", "CS101", 81.0); // 3.0
        store.enroll("S3", "MA101").unwrap(); // ungraded
        store.deactivate_student("S4").unwrap();
        store
    }

    #[test]
    fn test_counts() {
        let summary = RecordsSummary::from_store(&populated());

        assert_eq!(summary.total_students, 4);
        assert_eq!(summary.active_students, 3);
        assert_eq!(summary.total_courses, 3);
        assert_eq!(summary.active_enrollments, 3);
        assert_eq!(summary.max_credits, 18);
    }

    #[test]
    fn test_gpa_distribution_and_ranking() {
        let summary = RecordsSummary::from_store(&populated());

        assert_eq!(
            summary.gpa_distribution,
            GpaDistribution {
                excellent: 1,
                good: 1,
                satisfactory: 0,
                below: 0,
                ungraded: 1,
            }
        );
        let ranked: Vec<&str> = summary.top_students.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ranked, ["S1", "S2"]);
    }

    #[test]
    fn test_course_breakdowns() {
        let summary = RecordsSummary::from_store(&populated());

        assert_eq!(
            summary.courses_by_department,
            vec![
                ("Computer Science".to_string(), 2),
                ("Mathematics".to_string(), 1)
            ]
        );
        assert_eq!(
            summary.courses_by_semester,
            vec![
                (Semester::Spring, 1),
                (Semester::Summer, 0),
                (Semester::Fall, 2)
            ]
        );
    }
}
