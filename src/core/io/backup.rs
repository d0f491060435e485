//! Timestamped backups and directory inspection helpers

use super::{csv_io, COURSES_FILE, STUDENTS_FILE};
use crate::core::error::DataError;
use crate::core::records::RecordStore;
use logger::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Prefix of every backup directory name
pub const BACKUP_PREFIX: &str = "backup_";

/// Export the store into a new `backup_<YYYYMMDD_HHMMSS>` directory
///
/// # Returns
/// Path of the created backup directory
///
/// # Errors
/// Returns an error if the directory or either export file cannot be written
pub fn create_backup<P: AsRef<Path>>(store: &RecordStore, backup_root: P) -> Result<PathBuf, DataError> {
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let dir = backup_root.as_ref().join(format!("{BACKUP_PREFIX}{stamp}"));
    fs::create_dir_all(&dir)?;

    csv_io::export_students(store, dir.join(STUDENTS_FILE))?;
    csv_io::export_courses(store, dir.join(COURSES_FILE))?;

    info!("Backup created at {}", dir.display());
    Ok(dir)
}

/// Total size in bytes of all regular files below `path`
///
/// # Errors
/// Returns an error if any directory cannot be read
pub fn directory_size<P: AsRef<Path>>(path: P) -> Result<u64, DataError> {
    let mut total = 0;
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            total += directory_size(entry.path())?;
        } else if file_type.is_file() {
            total += entry.metadata()?.len();
        }
    }
    Ok(total)
}

/// Every entry below `path` down to `max_depth` levels, sorted by path
///
/// Direct children of `path` are at depth 1. A `max_depth` of 0 yields
/// nothing.
///
/// # Errors
/// Returns an error if any directory cannot be read
pub fn list_by_depth<P: AsRef<Path>>(path: P, max_depth: usize) -> Result<Vec<(usize, PathBuf)>, DataError> {
    let mut entries = Vec::new();
    collect_entries(path.as_ref(), 1, max_depth, &mut entries)?;
    entries.sort_by(|a, b| a.1.cmp(&b.1));
    Ok(entries)
}

fn collect_entries(
    dir: &Path,
    depth: usize,
    max_depth: usize,
    out: &mut Vec<(usize, PathBuf)>,
) -> Result<(), DataError> {
    if depth > max_depth {
        return Ok(());
    }
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            collect_entries(&path, depth + 1, max_depth, out)?;
        }
        out.push((depth, path));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Student;
    use tempfile::TempDir;

    #[test]
    fn test_create_backup_exports_both_files() {
        let root = TempDir::new().unwrap();
        let mut store = RecordStore::default();
        store.add_student(Student::new(
            "S1".to_string(),
            "R1".to_string(),
            "Ada".to_string(),
            "ada@example.edu".to_string(),
        ));

        let dir = create_backup(&store, root.path()).unwrap();

        let name = dir.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with(BACKUP_PREFIX));
        assert_eq!(name.len(), BACKUP_PREFIX.len() + "YYYYMMDD_HHMMSS".len());
        assert!(dir.join(STUDENTS_FILE).is_file());
        assert!(dir.join(COURSES_FILE).is_file());
    }

    #[test]
    fn test_directory_size_is_recursive() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("a.txt"), "12345").unwrap();
        fs::create_dir(root.path().join("sub")).unwrap();
        fs::write(root.path().join("sub").join("b.txt"), "123").unwrap();

        assert_eq!(directory_size(root.path()).unwrap(), 8);
    }

    #[test]
    fn test_list_by_depth_limits_levels() {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("a").join("b")).unwrap();
        fs::write(root.path().join("a").join("b").join("c.txt"), "x").unwrap();
        fs::write(root.path().join("z.txt"), "x").unwrap();

        let shallow = list_by_depth(root.path(), 1).unwrap();
        assert_eq!(
            shallow,
            vec![(1, root.path().join("a")), (1, root.path().join("z.txt"))]
        );

        let deep = list_by_depth(root.path(), 3).unwrap();
        let depths: Vec<usize> = deep.iter().map(|(d, _)| *d).collect();
        assert_eq!(depths, vec![1, 2, 3, 1]);
        assert!(list_by_depth(root.path(), 0).unwrap().is_empty());
    }

    #[test]
    fn test_missing_directory_is_error() {
        assert!(directory_size("/nonexistent/backups").is_err());
    }
}
