//! Data models for the records manager

pub mod course;
pub mod enrollment;
pub mod grade;
pub mod semester;
pub mod student;

pub use course::Course;
pub use enrollment::Enrollment;
pub use grade::Grade;
pub use semester::Semester;
pub use student::Student;
