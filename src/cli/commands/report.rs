//! Report command handler

use campus_records::config::Config;
use campus_records::core::report::{generator_for, RecordsSummary, ReportFormat};
use campus_records::RecordStore;
use logger::info;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Render the summary report and print it or write it to a file
pub fn run(store: &RecordStore, format: &str, output: Option<&Path>, config: &Config) {
    match generate(store, format, output, config) {
        Ok(Some(path)) => println!("✓ Report generated: {}", path.display()),
        Ok(None) => {}
        Err(e) => {
            eprintln!("✗ Report failed: {e}");
            std::process::exit(1);
        }
    }
}

/// Generate the report; returns the written path, or `None` when printed
///
/// A bare file name (no directory part) is placed in the configured
/// reports directory, and a name without an extension gets the format's
/// extension.
///
/// # Errors
/// Returns an error if the format is unknown or the file cannot be written
pub fn generate(
    store: &RecordStore,
    format: &str,
    output: Option<&Path>,
    config: &Config,
) -> Result<Option<PathBuf>, Box<dyn Error>> {
    let format: ReportFormat = format.parse()?;
    let generator = generator_for(format);
    let summary = RecordsSummary::from_store(store);

    let Some(output) = output else {
        print!("{}", generator.render(&summary)?);
        return Ok(None);
    };

    let mut path = if output.parent().is_some_and(|p| !p.as_os_str().is_empty()) {
        output.to_path_buf()
    } else {
        Path::new(&config.paths.reports_dir).join(output)
    };
    if path.extension().is_none() {
        path.set_extension(format.extension());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    generator.generate(&summary, &path)?;
    info!("Wrote {} report to {}", format, path.display());
    Ok(Some(path))
}
