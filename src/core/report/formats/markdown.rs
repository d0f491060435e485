//! Markdown summary report
//!
//! Fills an embedded template with Markdown tables, suitable for pasting
//! into wikis or rendering on a code host.

use crate::core::report::{RecordsSummary, ReportGenerator};
use std::error::Error;
use std::fmt::Write;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/summary.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    fn render_template(summary: &RecordsSummary) -> String {
        fill_template(MARKDOWN_TEMPLATE, |key| {
            let value = match key {
                "generated_at" => chrono::Local::now().format("%Y-%m-%d %H:%M").to_string(),
                "total_students" => summary.total_students.to_string(),
                "active_students" => summary.active_students.to_string(),
                "total_courses" => summary.total_courses.to_string(),
                "active_enrollments" => summary.active_enrollments.to_string(),
                "max_credits" => summary.max_credits.to_string(),
                "gpa_distribution" => Self::gpa_table(summary),
                "top_students" => Self::top_students_table(summary),
                "courses_by_department" => Self::count_table(
                    "Department",
                    summary
                        .courses_by_department
                        .iter()
                        .map(|(d, c)| (d.clone(), *c)),
                ),
                "courses_by_semester" => Self::count_table(
                    "Semester",
                    summary
                        .courses_by_semester
                        .iter()
                        .map(|(s, c)| (s.to_string(), *c)),
                ),
                _ => return None,
            };
            Some(value)
        })
    }

    fn gpa_table(summary: &RecordsSummary) -> String {
        let rows = summary
            .gpa_distribution
            .rows()
            .into_iter()
            .map(|(label, count)| (label.to_string(), count));
        Self::count_table("GPA", rows)
    }

    fn top_students_table(summary: &RecordsSummary) -> String {
        if summary.top_students.is_empty() {
            return "_No graded students yet._\n".to_string();
        }

        let mut table = String::from("| Rank | Student | ID | GPA |\n|---|---|---|---|\n");
        for (rank, student) in summary.top_students.iter().enumerate() {
            let _ = writeln!(
                table,
                "| {} | {} | {} | {:.2} |",
                rank + 1,
                student.name,
                student.id,
                student.gpa
            );
        }
        table
    }

    fn count_table(label: &str, rows: impl Iterator<Item = (String, usize)>) -> String {
        let mut table = format!("| {label} | Count |\n|---|---|\n");
        for (name, count) in rows {
            let _ = writeln!(table, "| {name} | {count} |");
        }
        table
    }
}

/// Replace each `{{key}}` in `template` with `value(key)` in one pass
///
/// Substituted text is never rescanned. Unknown keys are left as written.
fn fill_template(template: &str, value: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            rest = &rest[start..];
            break;
        };
        match value(&after[..end]) {
            Some(text) => out.push_str(&text),
            None => out.push_str(&rest[start..start + end + 4]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, summary: &RecordsSummary) -> Result<String, Box<dyn Error>> {
        Ok(Self::render_template(summary))
    }
}
