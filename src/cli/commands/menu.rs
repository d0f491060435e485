//! Interactive records console
//!
//! A numbered main menu with one submenu per area. Every prompt reads one
//! trimmed line from the input; failures inside an action are printed and
//! the session continues. End of input closes the console.

use campus_records::config::Config;
use campus_records::core::io::{self as records_io, COURSES_FILE, STUDENTS_FILE};
use campus_records::core::platform::PlatformInfo;
use campus_records::core::report::{RecordsSummary, ReportGenerator, TextReporter};
use campus_records::{Course, RecordStore, Semester, Student};
use logger::debug;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

type ActionResult = Result<(), Box<dyn Error>>;

const STUDENT_ITEMS: [&str; 5] = [
    "Add Student",
    "List All Students",
    "View Student Profile",
    "Update Student",
    "Deactivate Student",
];
const COURSE_ITEMS: [&str; 5] = [
    "Add Course",
    "List All Courses",
    "Search Courses by Instructor",
    "Search Courses by Department",
    "Search Courses by Semester",
];
const ENROLLMENT_ITEMS: [&str; 3] = [
    "Enroll Student in Course",
    "Unenroll Student from Course",
    "View Student Enrollments",
];
const GRADE_ITEMS: [&str; 2] = ["Record Grade", "View Transcript"];
const DATA_ITEMS: [&str; 4] = [
    "Import Students from CSV",
    "Import Courses from CSV",
    "Export Students to CSV",
    "Export Courses to CSV",
];
const BACKUP_ITEMS: [&str; 3] = [
    "Create Backup",
    "Show Backup Directory Size",
    "List Backup Files by Depth",
];

/// Console session over a record store
pub struct Console<'a, R, W> {
    store: &'a mut RecordStore,
    config: &'a Config,
    input: R,
    output: W,
}

/// Run the console on standard input and output
pub fn run(store: &mut RecordStore, config: &Config) {
    let stdin = io::stdin();
    let mut console = Console::new(store, config, stdin.lock(), io::stdout());
    if let Err(e) = console.run() {
        eprintln!("✗ Console error: {e}");
    }
}

fn is_end_of_input(err: &(dyn Error + 'static)) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::UnexpectedEof)
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    /// Create a console reading from `input` and writing to `output`
    pub fn new(store: &'a mut RecordStore, config: &'a Config, input: R, output: W) -> Self {
        Self {
            store,
            config,
            input,
            output,
        }
    }

    /// Run the main menu until the user exits or input ends
    ///
    /// # Errors
    /// Returns an error if the output cannot be written
    pub fn run(&mut self) -> ActionResult {
        writeln!(self.output, "=== Campus Course & Records Manager ===")?;

        match self.main_loop() {
            Err(e) if is_end_of_input(e.as_ref()) => Ok(()),
            other => other,
        }
    }

    fn main_loop(&mut self) -> ActionResult {
        loop {
            writeln!(self.output, "\n=== Main Menu ===")?;
            writeln!(self.output, "1. Manage Students")?;
            writeln!(self.output, "2. Manage Courses")?;
            writeln!(self.output, "3. Manage Enrollments")?;
            writeln!(self.output, "4. Manage Grades")?;
            writeln!(self.output, "5. Import/Export Data")?;
            writeln!(self.output, "6. Backup")?;
            writeln!(self.output, "7. Show Reports")?;
            writeln!(self.output, "8. Platform Information")?;
            writeln!(self.output, "0. Exit")?;

            let choice = self.prompt("Enter your choice: ")?;
            debug!("Main menu choice: {}", choice);
            let result = match choice.as_str() {
                "1" => self.submenu("Student Management", &STUDENT_ITEMS, Self::student_action),
                "2" => self.submenu("Course Management", &COURSE_ITEMS, Self::course_action),
                "3" => self.submenu(
                    "Enrollment Management",
                    &ENROLLMENT_ITEMS,
                    Self::enrollment_action,
                ),
                "4" => self.submenu("Grade Management", &GRADE_ITEMS, Self::grade_action),
                "5" => self.submenu("Import/Export Data", &DATA_ITEMS, Self::data_action),
                "6" => self.submenu("Backup", &BACKUP_ITEMS, Self::backup_action),
                "7" => self.show_reports(),
                "8" => self.show_platform_info(),
                "0" => {
                    writeln!(self.output, "Thank you for using CCRM!")?;
                    return Ok(());
                }
                _ => self.invalid_choice(),
            };
            self.report_failure(result)?;
        }
    }

    fn submenu(
        &mut self,
        title: &str,
        items: &[&str],
        action: fn(&mut Self, usize) -> ActionResult,
    ) -> ActionResult {
        loop {
            writeln!(self.output, "\n=== {title} ===")?;
            for (index, item) in items.iter().enumerate() {
                writeln!(self.output, "{}. {item}", index + 1)?;
            }
            writeln!(self.output, "0. Back to Main Menu")?;

            let choice = self.prompt("Enter your choice: ")?;
            if choice == "0" {
                return Ok(());
            }
            let result = match choice.parse::<usize>() {
                Ok(index) if (1..=items.len()).contains(&index) => action(self, index),
                _ => self.invalid_choice(),
            };
            self.report_failure(result)?;
        }
    }

    /// Print a failed action and carry on; end of input still unwinds
    fn report_failure(&mut self, result: ActionResult) -> ActionResult {
        match result {
            Err(e) if is_end_of_input(e.as_ref()) => Err(e),
            Err(e) => {
                writeln!(self.output, "Error: {e}")?;
                Ok(())
            }
            Ok(()) => Ok(()),
        }
    }

    fn invalid_choice(&mut self) -> ActionResult {
        writeln!(self.output, "Invalid choice. Please try again.")?;
        Ok(())
    }

    fn prompt(&mut self, message: &str) -> io::Result<String> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::ErrorKind::UnexpectedEof.into());
        }
        Ok(line.trim().to_string())
    }

    fn prompt_semester(&mut self) -> Result<Semester, Box<dyn Error>> {
        writeln!(self.output, "Select Semester:")?;
        for (index, semester) in Semester::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {semester}", index + 1)?;
        }
        let index: usize = self.prompt("Enter your choice: ")?.parse()?;
        Semester::from_menu_index(index)
            .ok_or_else(|| format!("Invalid semester choice: {index}").into())
    }

    fn student_action(&mut self, choice: usize) -> ActionResult {
        match choice {
            1 => {
                let id = self.prompt("Enter Student ID: ")?;
                let reg_no = self.prompt("Enter Registration Number: ")?;
                let full_name = self.prompt("Enter Full Name: ")?;
                let email = self.prompt("Enter Email: ")?;
                self.store.add_student(Student::new(id, reg_no, full_name, email));
                writeln!(self.output, "Student added successfully!")?;
            }
            2 => {
                let students = self.store.active_students();
                if students.is_empty() {
                    writeln!(self.output, "No active students found.")?;
                } else {
                    writeln!(self.output, "\nActive Students:")?;
                    for student in students {
                        writeln!(self.output, "{student}")?;
                    }
                }
            }
            3 => {
                let id = self.prompt("Enter Student ID: ")?;
                match self.store.student(&id) {
                    Some(student) => {
                        writeln!(self.output, "\n{student}")?;
                        writeln!(
                            self.output,
                            "Enrolled Courses: [{}]",
                            student.enrolled_courses().join(", ")
                        )?;
                        writeln!(self.output, "GPA: {:.2}", student.gpa)?;
                    }
                    None => writeln!(self.output, "Student not found.")?,
                }
            }
            4 => {
                let id = self.prompt("Enter Student ID: ")?;
                if self.store.student(&id).is_none() {
                    writeln!(self.output, "Student not found.")?;
                    return Ok(());
                }
                let name = self.prompt("Enter new Full Name (or press Enter to keep current): ")?;
                let email = self.prompt("Enter new Email (or press Enter to keep current): ")?;
                self.store.update_student(&id, Some(&name), Some(&email))?;
                writeln!(self.output, "Student updated successfully!")?;
            }
            _ => {
                let id = self.prompt("Enter Student ID: ")?;
                self.store.deactivate_student(&id)?;
                writeln!(self.output, "Student deactivated successfully!")?;
            }
        }
        Ok(())
    }

    fn course_action(&mut self, choice: usize) -> ActionResult {
        match choice {
            1 => {
                let code = self.prompt("Enter Course Code: ")?;
                let title = self.prompt("Enter Course Title: ")?;
                let credits: u32 = self.prompt("Enter Credits: ")?.parse()?;
                let instructor_id = self.prompt("Enter Instructor ID: ")?;
                let semester = self.prompt_semester()?;
                let department = self.prompt("Enter Department: ")?;
                self.store.add_course(Course::new(
                    code,
                    title,
                    credits,
                    instructor_id,
                    semester,
                    department,
                ))?;
                writeln!(self.output, "Course added successfully!")?;
            }
            2 => {
                let courses = self.store.all_courses();
                print_course_list(&mut self.output, "All Courses", "No courses found.", &courses)?;
            }
            3 => {
                let instructor = self.prompt("Enter Instructor ID: ")?;
                let courses = self.store.courses_by_instructor(&instructor);
                print_course_list(
                    &mut self.output,
                    &format!("Courses by Instructor {instructor}"),
                    &format!("No courses found for instructor: {instructor}"),
                    &courses,
                )?;
            }
            4 => {
                let department = self.prompt("Enter Department: ")?;
                let courses = self.store.courses_by_department(&department);
                print_course_list(
                    &mut self.output,
                    &format!("Courses in Department {department}"),
                    &format!("No courses found for department: {department}"),
                    &courses,
                )?;
            }
            _ => {
                let semester = self.prompt_semester()?;
                let courses = self.store.courses_by_semester(semester);
                print_course_list(
                    &mut self.output,
                    &format!("Courses in {semester} Semester"),
                    &format!("No courses found for semester: {semester}"),
                    &courses,
                )?;
            }
        }
        Ok(())
    }

    fn enrollment_action(&mut self, choice: usize) -> ActionResult {
        let student_id = self.prompt("Enter Student ID: ")?;
        match choice {
            1 => {
                let code = self.prompt("Enter Course Code: ")?;
                match self.store.enroll(&student_id, &code) {
                    Ok(()) => writeln!(self.output, "Student enrolled successfully!")?,
                    Err(e) => writeln!(self.output, "Enrollment failed: {e}")?,
                }
            }
            2 => {
                let code = self.prompt("Enter Course Code: ")?;
                if self.store.unenroll(&student_id, &code) {
                    writeln!(self.output, "Student unenrolled successfully!")?;
                } else {
                    writeln!(
                        self.output,
                        "No active enrollment for {student_id} in {code}."
                    )?;
                }
            }
            _ => {
                let Some(student) = self.store.student(&student_id) else {
                    writeln!(self.output, "Student not found.")?;
                    return Ok(());
                };
                writeln!(self.output, "\nEnrollments for {}:", student.full_name)?;
                for course in self.store.enrolled_courses(&student_id) {
                    writeln!(self.output, "- {}: {}", course.code, course.title)?;
                }
            }
        }
        Ok(())
    }

    fn grade_action(&mut self, choice: usize) -> ActionResult {
        let student_id = self.prompt("Enter Student ID: ")?;
        if choice == 1 {
            let code = self.prompt("Enter Course Code: ")?;
            let marks: f64 = self.prompt("Enter Marks (0-100): ")?.parse()?;
            match self.store.record_grade(&student_id, &code, marks) {
                Some(grade) => writeln!(self.output, "Grade recorded successfully! ({grade})")?,
                None => writeln!(
                    self.output,
                    "No active enrollment for {student_id} in {code}."
                )?,
            }
        } else {
            let transcript = self.store.transcript(&student_id);
            writeln!(self.output, "\n{transcript}")?;
        }
        Ok(())
    }

    fn data_action(&mut self, choice: usize) -> ActionResult {
        match choice {
            1 => {
                let path = self.prompt("Enter CSV file path: ")?;
                let count = records_io::import_students(self.store, &path)?;
                writeln!(self.output, "Imported {count} students successfully!")?;
            }
            2 => {
                let path = self.prompt("Enter CSV file path: ")?;
                let count = records_io::import_courses(self.store, &path)?;
                writeln!(self.output, "Imported {count} courses successfully!")?;
            }
            3 => {
                let path = self.export_path(STUDENTS_FILE)?;
                let count = records_io::export_students(self.store, &path)?;
                writeln!(self.output, "Exported {count} students to: {}", path.display())?;
            }
            _ => {
                let path = self.export_path(COURSES_FILE)?;
                let count = records_io::export_courses(self.store, &path)?;
                writeln!(self.output, "Exported {count} courses to: {}", path.display())?;
            }
        }
        Ok(())
    }

    /// `<data_dir>/<stem>_export.csv`, creating the data directory
    fn export_path(&self, file_name: &str) -> io::Result<PathBuf> {
        let data_dir = PathBuf::from(&self.config.paths.data_dir);
        std::fs::create_dir_all(&data_dir)?;
        let stem = file_name.trim_end_matches(".csv");
        Ok(data_dir.join(format!("{stem}_export.csv")))
    }

    fn backup_action(&mut self, choice: usize) -> ActionResult {
        let backup_dir = PathBuf::from(&self.config.paths.backup_dir);
        match choice {
            1 => {
                let dir = records_io::create_backup(self.store, &backup_dir)?;
                writeln!(self.output, "Backup created at: {}", dir.display())?;
            }
            2 => {
                let size = records_io::directory_size(&backup_dir)?;
                writeln!(self.output, "Backup directory size: {size} bytes")?;
            }
            _ => {
                let depth: usize = self.prompt("Enter max depth: ")?.parse()?;
                for (level, path) in records_io::list_by_depth(&backup_dir, depth)? {
                    writeln!(self.output, "{}{}", "  ".repeat(level - 1), path.display())?;
                }
            }
        }
        Ok(())
    }

    fn show_reports(&mut self) -> ActionResult {
        let summary = RecordsSummary::from_store(self.store);
        let report = TextReporter::new().render(&summary)?;
        write!(self.output, "\n{report}")?;
        Ok(())
    }

    fn show_platform_info(&mut self) -> ActionResult {
        writeln!(self.output, "\n{}", PlatformInfo::collect(self.config))?;
        Ok(())
    }
}

fn print_course_list<W: Write>(
    output: &mut W,
    heading: &str,
    empty: &str,
    courses: &[&Course],
) -> io::Result<()> {
    if courses.is_empty() {
        writeln!(output, "{empty}")?;
    } else {
        writeln!(output, "\n{heading}:")?;
        for course in courses {
            writeln!(output, "{course}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn test_config(dir: &TempDir) -> Config {
        let mut config = Config::from_defaults();
        config.paths.data_dir = dir.path().join("data").to_string_lossy().to_string();
        config.paths.backup_dir = dir.path().join("backups").to_string_lossy().to_string();
        config
    }

    fn run_session(store: &mut RecordStore, config: &Config, script: &str) -> String {
        let mut output = Vec::new();
        Console::new(store, config, Cursor::new(script.to_string()), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_exit_immediately() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);
        let mut store = RecordStore::default();

        let out = run_session(&mut store, &config, "0\n");
        assert!(out.contains("=== Main Menu ==="));
        assert!(out.ends_with("Thank you for using CCRM!\n"));
    }

    #[test]
    fn test_end_of_input_closes_console() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);
        let mut store = RecordStore::default();

        let out = run_session(&mut store, &config, "1\n1\nS1\n");
        assert!(!out.contains("Student added"));
        assert!(store.student("S1").is_none());
    }

    #[test]
    fn test_add_enroll_grade_and_transcript() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);
        let mut store = RecordStore::default();
        let script = "\
1\n1\nS1\nREG1\nAda Lovelace\nada@example.edu\n0\n\
2\n1\nCS101\nProgramming\n3\nI1\n3\nComputer Science\n0\n\
3\n1\nS1\nCS101\n0\n\
4\n1\nS1\nCS101\n92\n2\nS1\n0\n\
0\n";

        let out = run_session(&mut store, &config, script);

        assert!(out.contains("Student added successfully!"));
        assert!(out.contains("Course added successfully!"));
        assert!(out.contains("Student enrolled successfully!"));
        assert!(out.contains("Grade recorded successfully! (A)"));
        assert!(out.contains("=== TRANSCRIPT ==="));
        assert!(out.contains("GPA: 4.00"));
        assert_eq!(store.course("CS101").unwrap().semester, Semester::Fall);
    }

    #[test]
    fn test_failures_are_printed_and_session_continues() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);
        let mut store = RecordStore::default();
        let script = "\
3\n1\nS9\nCS101\n0\n\
2\n1\nCS101\nProgramming\nthree\n0\n\
9\n\
0\n";

        let out = run_session(&mut store, &config, script);

        assert!(out.contains("Enrollment failed: Student not found: S9"));
        assert!(out.contains("Error: invalid digit found in string"));
        assert!(out.contains("Invalid choice. Please try again."));
        assert!(out.ends_with("Thank you for using CCRM!\n"));
    }

    #[test]
    fn test_zero_credit_course_is_refused() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);
        let mut store = RecordStore::default();

        let out = run_session(
            &mut store,
            &config,
            "2\n1\nSEM000\nSeminar\n0\nI1\n1\nGeneral\n2\n0\n0\n",
        );

        assert!(out.contains("Error: Course SEM000 must carry at least one credit"));
        assert!(!out.contains("Course added successfully!"));
        assert!(out.contains("No courses found."));
        assert!(store.course("SEM000").is_none());
    }

    #[test]
    fn test_update_and_deactivate_student() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);
        let mut store = RecordStore::default();
        store.add_student(Student::new(
            "S1".to_string(),
            "R1".to_string(),
            "Ada".to_string(),
            "ada@example.edu".to_string(),
        ));
        let script = "1\n4\nS1\n\nada@new.edu\n5\nS1\n2\n0\n0\n";

        let out = run_session(&mut store, &config, script);

        let student = store.student("S1").unwrap();
        assert_eq!(student.full_name, "Ada");
        assert_eq!(student.email, "ada@new.edu");
        assert!(!student.active);
        assert!(out.contains("No active students found."));
    }

    #[test]
    fn test_export_and_backup() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);
        let mut store = RecordStore::default();
        store.add_student(Student::new(
            "S1".to_string(),
            "R1".to_string(),
            "Ada".to_string(),
            "ada@example.edu".to_string(),
        ));

        let out = run_session(&mut store, &config, "5\n3\n0\n6\n1\n2\n3\n2\n0\n0\n");

        assert!(out.contains("Exported 1 students to:"));
        assert!(dir.path().join("data").join("students_export.csv").is_file());
        assert!(out.contains("Backup created at:"));
        assert!(out.contains("Backup directory size:"));
        assert!(out.contains("students.csv"));
    }

    #[test]
    fn test_reports_and_platform_info() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);
        let mut store = RecordStore::default();

        let out = run_session(&mut store, &config, "7\n8\n0\n");

        assert!(out.contains("=== Records Summary ==="));
        assert!(out.contains("Credit cap per semester: 18"));
    }
}
