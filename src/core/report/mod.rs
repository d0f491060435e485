//! Report generation for the records manager
//!
//! Transcripts are rendered per student; the summary report aggregates the
//! whole store and can be written as plain text or Markdown.

pub mod formats;
pub mod summary;
pub mod transcript;

use std::error::Error;
use std::path::Path;

pub use formats::{MarkdownReporter, ReportFormat, TextReporter};
pub use summary::RecordsSummary;

/// Trait for summary report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, summary: &RecordsSummary, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(summary)?;
        std::fs::write(output_path, content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, summary: &RecordsSummary) -> Result<String, Box<dyn Error>>;
}

/// Build the generator for a format
#[must_use]
pub fn generator_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Text => Box::new(TextReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
    }
}
