//! Settings for the records manager: logging, the credit cap and data paths
//!
//! The user file lives in [`Config::get_app_dir`]. Values missing from it are
//! filled from defaults compiled into the binary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Stands for the application directory inside path values
const APP_DIR_VARIABLE: &str = "$CAMPUS_RECORDS";

/// `[logging]` table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Threshold name: error, warn, info or debug
    #[serde(default)]
    pub level: String,
    /// Log file; empty disables file output
    #[serde(default)]
    pub file: String,
    /// Print verbose diagnostics
    #[serde(default)]
    pub verbose: bool,
}

/// `[records]` table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordsConfig {
    /// Per-semester credit cap; 0 is replaced by the default on load
    #[serde(default)]
    pub max_credits: u32,
}

/// `[paths]` table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Holds `students.csv` and `courses.csv`, plus console exports
    #[serde(default)]
    pub data_dir: String,
    /// Parent of the `backup_*` directories
    #[serde(default)]
    pub backup_dir: String,
    /// Where `ccrm report` writes by default
    #[serde(default)]
    pub reports_dir: String,
}

/// Full configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// `[logging]`
    pub logging: LoggingConfig,
    /// `[records]`
    #[serde(default)]
    pub records: RecordsConfig,
    /// `[paths]`
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Values given on the command line; `None` keeps the file's value
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// `--config-level`
    pub level: Option<String>,
    /// `--config-log-file`
    pub file: Option<String>,
    /// `--config-verbose`
    pub verbose: Option<bool>,
    /// `--max-credits`
    pub max_credits: Option<u32>,
    /// `--data-dir` or `--config-data-dir`
    pub data_dir: Option<String>,
    /// `--backup-dir` or `--config-backup-dir`
    pub backup_dir: Option<String>,
    /// `--reports-dir`
    pub reports_dir: Option<String>,
}

/// Keys understood by get/set/unset, after dash normalization
const KEYS: [&str; 7] = [
    "level",
    "file",
    "verbose",
    "max_credits",
    "data_dir",
    "backup_dir",
    "reports_dir",
];

/// Map `max-credits` style spellings onto the stored key name
fn canonical_key(key: &str) -> Result<String, String> {
    let canonical = key.replace('-', "_");
    if KEYS.contains(&canonical.as_str()) {
        Ok(canonical)
    } else {
        Err(format!("Unknown config key: '{key}'"))
    }
}

fn fill_if_empty(value: &mut String, default: &str) -> bool {
    if value.is_empty() && !default.is_empty() {
        *value = default.to_string();
        true
    } else {
        false
    }
}

impl Config {
    /// Application directory under the platform config dir
    /// (e.g. `~/.config/campus-records` on Linux)
    #[must_use]
    pub fn get_app_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("campus-records")
    }

    /// Copy defaults into every empty string and a zero credit cap
    ///
    /// Returns `true` when something was filled in.
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        changed |= fill_if_empty(&mut self.logging.level, &defaults.logging.level);
        changed |= fill_if_empty(&mut self.logging.file, &defaults.logging.file);
        changed |= fill_if_empty(&mut self.paths.data_dir, &defaults.paths.data_dir);
        changed |= fill_if_empty(&mut self.paths.backup_dir, &defaults.paths.backup_dir);
        changed |= fill_if_empty(&mut self.paths.reports_dir, &defaults.paths.reports_dir);

        if self.records.max_credits == 0 && defaults.records.max_credits != 0 {
            self.records.max_credits = defaults.records.max_credits;
            changed = true;
        }

        changed
    }

    /// Apply command-line values for this run without saving them
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        let strings = [
            (&overrides.level, &mut self.logging.level),
            (&overrides.file, &mut self.logging.file),
            (&overrides.data_dir, &mut self.paths.data_dir),
            (&overrides.backup_dir, &mut self.paths.backup_dir),
            (&overrides.reports_dir, &mut self.paths.reports_dir),
        ];
        for (value, target) in strings {
            if let Some(value) = value {
                target.clone_from(value);
            }
        }

        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(max_credits) = overrides.max_credits {
            self.records.max_credits = max_credits;
        }
    }

    /// `config.toml` in release builds, `dconfig.toml` in debug builds
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_app_dir().join(CONFIG_FILE_NAME)
    }

    fn expand_variables(value: &mut String) {
        if value.contains(APP_DIR_VARIABLE) {
            let app_dir = Self::get_app_dir();
            *value = value.replace(APP_DIR_VARIABLE, &app_dir.to_string_lossy());
        }
    }

    /// Parse a config and expand `$CAMPUS_RECORDS` in the log file and paths
    ///
    /// # Errors
    ///
    /// Returns the TOML error for malformed input or mistyped values.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        Self::expand_variables(&mut config.logging.file);
        Self::expand_variables(&mut config.paths.data_dir);
        Self::expand_variables(&mut config.paths.backup_dir);
        Self::expand_variables(&mut config.paths.reports_dir);

        Ok(config)
    }

    /// Built-in defaults for the current build profile
    ///
    /// # Panics
    /// Panics if the bundled default file is not valid TOML.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Read the user file, filling gaps from defaults
    ///
    /// The first run writes the defaults out. An unreadable or invalid file
    /// is left alone and the defaults are used for this run.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if !config_file.exists() {
            let _ = defaults.save();
            return defaults;
        }

        let parsed = fs::read_to_string(&config_file)
            .ok()
            .and_then(|content| Self::from_toml(&content).ok());
        match parsed {
            Some(mut config) => {
                if config.merge_defaults(&defaults) {
                    let _ = config.save();
                }
                config
            }
            None => defaults,
        }
    }

    /// Write this config to the user file
    ///
    /// # Errors
    /// Returns an error when the directory or file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_file, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Current value of `key` as text, `None` for unknown keys
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match canonical_key(key).ok()?.as_str() {
            "level" => self.logging.level.clone(),
            "file" => self.logging.file.clone(),
            "verbose" => self.logging.verbose.to_string(),
            "max_credits" => self.records.max_credits.to_string(),
            "data_dir" => self.paths.data_dir.clone(),
            "backup_dir" => self.paths.backup_dir.clone(),
            _ => self.paths.reports_dir.clone(),
        };
        Some(value)
    }

    /// Change `key` in memory; [`save`](Config::save) persists it
    ///
    /// # Errors
    /// Unknown keys, a `verbose` that is not `true`/`false`, and a credit cap
    /// that is not a positive integer.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match canonical_key(key)?.as_str() {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "max_credits" => {
                self.records.max_credits = value
                    .parse::<u32>()
                    .ok()
                    .filter(|credits| *credits > 0)
                    .ok_or_else(|| format!("Invalid credit cap for 'max_credits': '{value}'"))?;
            }
            "data_dir" => self.paths.data_dir = value.to_string(),
            "backup_dir" => self.paths.backup_dir = value.to_string(),
            _ => self.paths.reports_dir = value.to_string(),
        }
        Ok(())
    }

    /// Put `key` back to its value in `defaults`
    ///
    /// # Errors
    /// Returns an error for unknown keys.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        let key = canonical_key(key)?;
        if let Some(value) = defaults.get(&key) {
            self.set(&key, &value)?;
        }
        Ok(())
    }

    /// Delete the user file; the next [`load`](Config::load) writes fresh defaults
    ///
    /// # Errors
    /// Returns an error if an existing file cannot be removed.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[records]")?;
        writeln!(f, "  max_credits = {}", self.records.max_credits)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  data_dir = \"{}\"", self.paths.data_dir)?;
        writeln!(f, "  backup_dir = \"{}\"", self.paths.backup_dir)?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        Ok(())
    }
}
