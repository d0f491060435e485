//! End-to-end enrollment, grading and transcript scenarios

use campus_records::{Course, Entity, Grade, RecordStore, RecordsError, Semester, Student};

fn student(id: &str, name: &str) -> Student {
    Student::new(
        id.to_string(),
        format!("REG-{id}"),
        name.to_string(),
        format!("{}@campus.edu", id.to_lowercase()),
    )
}

fn course(code: &str, title: &str, credits: u32) -> Course {
    Course::new(
        code.to_string(),
        title.to_string(),
        credits,
        "I100".to_string(),
        Semester::Fall,
        "Computer Science".to_string(),
    )
}

fn store_with_catalog() -> RecordStore {
    let mut store = RecordStore::new(18);
    store.add_student(student("S1", "Ada Lovelace"));
    store.add_course(course("CS101", "Programming", 4)).unwrap();
    store.add_course(course("CS102", "Data Structures", 4)).unwrap();
    store.add_course(course("CS201", "Algorithms", 3)).unwrap();
    store.add_course(course("MA101", "Calculus", 3)).unwrap();
    store
}

#[test]
fn weighted_gpa_across_two_courses() {
    let mut store = store_with_catalog();
    store.enroll("S1", "CS101").unwrap();
    store.enroll("S1", "CS201").unwrap();

    assert_eq!(store.record_grade("S1", "CS101", 95.0), Some(Grade::A));
    assert_eq!(store.record_grade("S1", "CS201", 75.0), Some(Grade::C));

    // (4.0 * 4 + 2.0 * 3) / 7
    let gpa = store.student("S1").unwrap().gpa;
    assert!((gpa - 22.0 / 7.0).abs() < 1e-9);
    assert!(store.transcript("S1").contains("GPA: 3.14"));
}

#[test]
fn credit_cap_blocks_enrollment_and_is_freed_by_unenroll() {
    let mut store = RecordStore::new(10);
    store.add_student(student("S1", "Ada Lovelace"));
    store.add_course(course("CS101", "Programming", 4)).unwrap();
    store.add_course(course("CS102", "Data Structures", 4)).unwrap();
    store.add_course(course("CS201", "Algorithms", 3)).unwrap();

    store.enroll("S1", "CS101").unwrap();
    store.enroll("S1", "CS102").unwrap();
    assert_eq!(
        store.enroll("S1", "CS201"),
        Err(RecordsError::CreditLimitExceeded {
            current: 8,
            adding: 3,
            max: 10
        })
    );

    assert!(store.unenroll("S1", "CS102"));
    store.enroll("S1", "CS201").unwrap();
    assert_eq!(store.active_credits("S1"), 7);
}

#[test]
fn duplicate_then_reenroll_after_drop() {
    let mut store = store_with_catalog();
    store.enroll("S1", "MA101").unwrap();

    assert!(matches!(
        store.enroll("S1", "MA101"),
        Err(RecordsError::DuplicateEnrollment { .. })
    ));

    assert!(store.unenroll("S1", "MA101"));
    store.enroll("S1", "MA101").unwrap();

    let history = store.enrollments("S1");
    assert_eq!(history.len(), 2);
    assert_eq!(history.iter().filter(|e| e.active).count(), 1);
    assert_eq!(store.student("S1").unwrap().enrolled_courses(), ["MA101"]);
}

#[test]
fn unknown_identifiers_are_not_found() {
    let mut store = store_with_catalog();

    let err = store.enroll("S404", "CS101").unwrap_err();
    assert!(matches!(
        err,
        RecordsError::NotFound {
            entity: Entity::Student,
            ..
        }
    ));
    assert_eq!(err.to_string(), "Student not found: S404");

    let err = store.enroll("S1", "XX999").unwrap_err();
    assert_eq!(err.to_string(), "Course not found: XX999");
}

#[test]
fn dropped_course_leaves_transcript_and_gpa() {
    let mut store = store_with_catalog();
    store.enroll("S1", "CS101").unwrap();
    store.enroll("S1", "MA101").unwrap();
    store.record_grade("S1", "CS101", 85.0);
    store.record_grade("S1", "MA101", 55.0);
    assert!((store.student("S1").unwrap().gpa - 12.0 / 7.0).abs() < 1e-9);

    store.unenroll("S1", "MA101");
    // GPA is recomputed only when a grade is recorded
    assert!((store.student("S1").unwrap().gpa - 12.0 / 7.0).abs() < 1e-9);

    let transcript = store.transcript("S1");
    assert!(transcript.contains("CS101"));
    assert!(!transcript.contains("MA101"));
}

#[test]
fn transcript_for_unknown_student_is_a_message() {
    let store = store_with_catalog();
    assert_eq!(store.transcript("S404"), "Student not found: S404");
}
