//! Runtime and environment information shown by `ccrm info`

use crate::config::Config;
use std::fmt;
use std::path::PathBuf;

/// Snapshot of the application build and its configured locations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformInfo {
    /// Crate version
    pub version: &'static str,
    /// Operating system family (e.g., "linux")
    pub os: &'static str,
    /// CPU architecture (e.g., "x86_64")
    pub arch: &'static str,
    /// Configuration file in use
    pub config_file: PathBuf,
    /// Directory CSV data is loaded from and exported to
    pub data_dir: String,
    /// Directory backups are created under
    pub backup_dir: String,
    /// Per-semester credit cap
    pub max_credits: u32,
}

impl PlatformInfo {
    /// Collect platform information for the given configuration
    #[must_use]
    pub fn collect(config: &Config) -> Self {
        Self {
            version: super::get_version(),
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
            config_file: Config::get_config_file_path(),
            data_dir: config.paths.data_dir.clone(),
            backup_dir: config.paths.backup_dir.clone(),
            max_credits: config.records.max_credits,
        }
    }
}

impl fmt::Display for PlatformInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Campus Records v{}", self.version)?;
        writeln!(f, "Platform: {} ({})", self.os, self.arch)?;
        writeln!(f, "Config file: {}", self.config_file.display())?;
        writeln!(f, "Data directory: {}", self.data_dir)?;
        writeln!(f, "Backup directory: {}", self.backup_dir)?;
        write!(f, "Credit cap per semester: {}", self.max_credits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_reflects_config() {
        let mut config = Config::from_defaults();
        config.records.max_credits = 21;
        config.paths.data_dir = "/srv/records".to_string();

        let info = PlatformInfo::collect(&config);

        assert_eq!(info.max_credits, 21);
        assert_eq!(info.os, std::env::consts::OS);
        let text = info.to_string();
        assert!(text.contains("Data directory: /srv/records"));
        assert!(text.contains("Credit cap per semester: 21"));
    }
}
