//! In-memory record store: students, courses and their enrollments
//!
//! All business rules live here. Enrollment is validated against the
//! duplicate and credit-cap rules, grades feed a credit-weighted GPA, and
//! transcripts are rendered from the stored records.

use super::error::RecordsError;
use super::models::{Course, Enrollment, Grade, Semester, Student};
use super::report::transcript;
use logger::{debug, info, warn};
use std::collections::HashMap;

/// Credit cap used when none is configured
pub const DEFAULT_MAX_CREDITS: u32 = 18;

/// Holds every record and enforces the enrollment rules
#[derive(Debug, Clone)]
pub struct RecordStore {
    /// Students indexed by identifier
    students: HashMap<String, Student>,

    /// Courses indexed by code
    courses: HashMap<String, Course>,

    /// Per-student enrollment history, oldest first
    enrollments: HashMap<String, Vec<Enrollment>>,

    /// Maximum credits a student may carry at once
    max_credits: u32,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CREDITS)
    }
}

impl RecordStore {
    /// Create an empty store with the given per-semester credit cap
    #[must_use]
    pub fn new(max_credits: u32) -> Self {
        Self {
            students: HashMap::new(),
            courses: HashMap::new(),
            enrollments: HashMap::new(),
            max_credits,
        }
    }

    /// The configured credit cap
    #[must_use]
    pub const fn max_credits(&self) -> u32 {
        self.max_credits
    }

    // --- Students ---

    /// Register a student
    ///
    /// A student with an existing identifier is replaced and starts over with
    /// an empty enrollment history.
    ///
    /// # Returns
    /// `true` if the identifier was new
    pub fn add_student(&mut self, student: Student) -> bool {
        let id = student.id.clone();
        self.enrollments.insert(id.clone(), Vec::new());
        let is_new = self.students.insert(id.clone(), student).is_none();
        if !is_new {
            warn!("Replaced existing student record {id}");
        }
        is_new
    }

    /// Look up a student by identifier
    #[must_use]
    pub fn student(&self, student_id: &str) -> Option<&Student> {
        self.students.get(student_id)
    }

    /// All students, sorted by identifier
    #[must_use]
    pub fn all_students(&self) -> Vec<&Student> {
        let mut students: Vec<&Student> = self.students.values().collect();
        students.sort_by(|a, b| a.id.cmp(&b.id));
        students
    }

    /// Active students, sorted by identifier
    #[must_use]
    pub fn active_students(&self) -> Vec<&Student> {
        self.all_students()
            .into_iter()
            .filter(|s| s.active)
            .collect()
    }

    /// Update a student's profile
    ///
    /// `None` or blank values keep the current name/email.
    ///
    /// # Errors
    /// Returns `NotFound` if the student is unknown
    pub fn update_student(
        &mut self,
        student_id: &str,
        full_name: Option<&str>,
        email: Option<&str>,
    ) -> Result<(), RecordsError> {
        let student = self
            .students
            .get_mut(student_id)
            .ok_or_else(|| RecordsError::student_not_found(student_id))?;

        if let Some(name) = full_name.map(str::trim).filter(|n| !n.is_empty()) {
            student.full_name = name.to_string();
        }
        if let Some(email) = email.map(str::trim).filter(|e| !e.is_empty()) {
            student.email = email.to_string();
        }
        Ok(())
    }

    /// Mark a student inactive; records are never deleted
    ///
    /// # Errors
    /// Returns `NotFound` if the student is unknown
    pub fn deactivate_student(&mut self, student_id: &str) -> Result<(), RecordsError> {
        let student = self
            .students
            .get_mut(student_id)
            .ok_or_else(|| RecordsError::student_not_found(student_id))?;
        student.active = false;
        info!("Deactivated student {student_id}");
        Ok(())
    }

    // --- Courses ---

    /// Add a course, replacing any course with the same code
    ///
    /// # Returns
    /// `true` if the code was new
    ///
    /// # Errors
    /// Returns `InvalidCredits` if the course carries no credits
    pub fn add_course(&mut self, course: Course) -> Result<bool, RecordsError> {
        if course.credits == 0 {
            return Err(RecordsError::InvalidCredits { code: course.code });
        }
        Ok(self.courses.insert(course.code.clone(), course).is_none())
    }

    /// Look up a course by code
    #[must_use]
    pub fn course(&self, course_code: &str) -> Option<&Course> {
        self.courses.get(course_code)
    }

    /// All courses, sorted by code
    #[must_use]
    pub fn all_courses(&self) -> Vec<&Course> {
        let mut courses: Vec<&Course> = self.courses.values().collect();
        courses.sort_by(|a, b| a.code.cmp(&b.code));
        courses
    }

    /// Courses taught by an instructor (exact match)
    #[must_use]
    pub fn courses_by_instructor(&self, instructor_id: &str) -> Vec<&Course> {
        self.courses_where(|c| c.instructor_id == instructor_id)
    }

    /// Courses of a department (case-insensitive)
    #[must_use]
    pub fn courses_by_department(&self, department: &str) -> Vec<&Course> {
        self.courses_where(|c| c.department.eq_ignore_ascii_case(department))
    }

    /// Courses offered in a semester
    #[must_use]
    pub fn courses_by_semester(&self, semester: Semester) -> Vec<&Course> {
        self.courses_where(|c| c.semester == semester)
    }

    fn courses_where(&self, predicate: impl Fn(&Course) -> bool) -> Vec<&Course> {
        self.all_courses()
            .into_iter()
            .filter(|c| predicate(c))
            .collect()
    }

    // --- Enrollment ---

    /// Full enrollment history of a student (active and inactive)
    #[must_use]
    pub fn enrollments(&self, student_id: &str) -> &[Enrollment] {
        self.enrollments
            .get(student_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The student's active courses in enrollment order
    ///
    /// Codes that no longer resolve to a course are skipped.
    #[must_use]
    pub fn enrolled_courses(&self, student_id: &str) -> Vec<&Course> {
        self.student(student_id)
            .map(|s| {
                s.enrolled_courses()
                    .iter()
                    .filter_map(|code| self.courses.get(code))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Sum of credits over a student's active enrollments
    #[must_use]
    pub fn active_credits(&self, student_id: &str) -> u32 {
        self.enrollments(student_id)
            .iter()
            .filter(|e| e.active)
            .filter_map(|e| self.courses.get(&e.course_code))
            .fold(0_u32, |total, c| total.saturating_add(c.credits))
    }

    /// Enroll a student in a course
    ///
    /// # Errors
    /// - `NotFound` if the student or the course is unknown (student checked first)
    /// - `DuplicateEnrollment` if the student is already actively enrolled in the course
    /// - `CreditLimitExceeded` if the course would push active credits past the cap
    pub fn enroll(&mut self, student_id: &str, course_code: &str) -> Result<(), RecordsError> {
        if !self.students.contains_key(student_id) {
            return Err(RecordsError::student_not_found(student_id));
        }
        let adding = self
            .courses
            .get(course_code)
            .map(|c| c.credits)
            .ok_or_else(|| RecordsError::course_not_found(course_code))?;

        if self
            .enrollments(student_id)
            .iter()
            .any(|e| e.is_active_for(course_code))
        {
            return Err(RecordsError::DuplicateEnrollment {
                student_id: student_id.to_string(),
                course_code: course_code.to_string(),
            });
        }

        let current = self.active_credits(student_id);
        let total = current.checked_add(adding).filter(|t| *t <= self.max_credits);
        let Some(total) = total else {
            debug!(
                "Rejected {student_id} -> {course_code}: {current} + {adding} > {}",
                self.max_credits
            );
            return Err(RecordsError::CreditLimitExceeded {
                current,
                adding,
                max: self.max_credits,
            });
        };

        self.enrollments
            .entry(student_id.to_string())
            .or_default()
            .push(Enrollment::new(
                student_id.to_string(),
                course_code.to_string(),
            ));
        if let Some(student) = self.students.get_mut(student_id) {
            student.enroll_in(course_code);
        }

        info!(
            "Enrolled {student_id} in {course_code} ({total} of {} credits)",
            self.max_credits
        );
        Ok(())
    }

    /// Drop a student's active enrollment in a course
    ///
    /// The enrollment is kept as inactive history. Unknown students or
    /// courses without an active enrollment are ignored.
    ///
    /// # Returns
    /// `true` if an active enrollment was found and deactivated
    pub fn unenroll(&mut self, student_id: &str, course_code: &str) -> bool {
        let Some(enrollment) = self
            .enrollments
            .get_mut(student_id)
            .and_then(|list| list.iter_mut().find(|e| e.is_active_for(course_code)))
        else {
            debug!("No active enrollment of {student_id} in {course_code}; nothing to drop");
            return false;
        };

        enrollment.active = false;
        if let Some(student) = self.students.get_mut(student_id) {
            student.unenroll_from(course_code);
        }
        info!("Unenrolled {student_id} from {course_code}");
        true
    }

    // --- Grades ---

    /// Record marks for a student's active enrollment and refresh the GPA
    ///
    /// Unknown students and courses without an active enrollment are ignored.
    ///
    /// # Returns
    /// The derived letter grade, or `None` when nothing was recorded
    pub fn record_grade(
        &mut self,
        student_id: &str,
        course_code: &str,
        marks: f64,
    ) -> Option<Grade> {
        let list = self.enrollments.get_mut(student_id)?;
        let grade = list
            .iter_mut()
            .find(|e| e.is_active_for(course_code))
            .map(|e| e.record_grade(marks));

        self.update_gpa(student_id);

        match grade {
            Some(g) => info!("Recorded {g} ({marks:.1}) for {student_id} in {course_code}"),
            None => debug!("No active enrollment of {student_id} in {course_code}; grade ignored"),
        }
        grade
    }

    /// Recompute GPA as Σ(points × credits) / Σ(credits) over active graded
    /// enrollments. Left untouched when there are none.
    fn update_gpa(&mut self, student_id: &str) {
        let (quality_points, credits) = self
            .enrollments(student_id)
            .iter()
            .filter(|e| e.active)
            .filter_map(|e| {
                let grade = e.grade?;
                let course = self.courses.get(&e.course_code)?;
                Some((grade.points() * f64::from(course.credits), course.credits))
            })
            .fold((0.0, 0_u32), |(points, total), (p, c)| (points + p, total.saturating_add(c)));

        if credits == 0 {
            return;
        }

        let gpa = quality_points / f64::from(credits);
        if let Some(student) = self.students.get_mut(student_id) {
            student.gpa = gpa;
            debug!("GPA of {student_id} is now {gpa:.2}");
        }
    }

    // --- Reporting ---

    /// Render a student's transcript
    ///
    /// Returns `Student not found: <id>` instead of failing for unknown students.
    #[must_use]
    pub fn transcript(&self, student_id: &str) -> String {
        self.student(student_id).map_or_else(
            || format!("Student not found: {student_id}"),
            |student| {
                transcript::render(student, self.enrollments(student_id), |code| {
                    self.course(code)
                })
            },
        )
    }
}
