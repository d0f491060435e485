//! Backup command handler

use crate::args::BackupSubcommand;
use campus_records::config::Config;
use campus_records::core::io as records_io;
use campus_records::RecordStore;
use std::path::PathBuf;

/// Dispatch backup subcommands against the configured backup directory
pub fn run(subcommand: &BackupSubcommand, store: &RecordStore, config: &Config) {
    let backup_dir = PathBuf::from(&config.paths.backup_dir);

    match subcommand {
        BackupSubcommand::Create => match records_io::create_backup(store, &backup_dir) {
            Ok(dir) => println!("✓ Backup created at: {}", dir.display()),
            Err(e) => {
                eprintln!("✗ Backup failed: {e}");
                std::process::exit(1);
            }
        },
        BackupSubcommand::Size => match records_io::directory_size(&backup_dir) {
            Ok(size) => println!("Backup directory size: {size} bytes"),
            Err(e) => {
                eprintln!("✗ Cannot read {}: {e}", backup_dir.display());
                std::process::exit(1);
            }
        },
        BackupSubcommand::List { depth } => match records_io::list_by_depth(&backup_dir, *depth) {
            Ok(entries) => {
                for (level, path) in entries {
                    println!("{}{}", "  ".repeat(level - 1), path.display());
                }
            }
            Err(e) => {
                eprintln!("✗ Cannot read {}: {e}", backup_dir.display());
                std::process::exit(1);
            }
        },
    }
}
