//! Integration tests for the records manager settings

use campus_records::config::{Config, ConfigOverrides};

#[test]
fn test_defaults_cap_at_eighteen_credits() {
    let config = Config::from_defaults();

    assert_eq!(config.records.max_credits, 18);
    assert!(!config.paths.data_dir.is_empty());
    assert!(!config.paths.backup_dir.is_empty());
    assert!(!config.paths.reports_dir.is_empty());
}

#[test]
fn test_paths_expand_app_dir() {
    let toml_str = r#"
[logging]
level = "info"

[paths]
data_dir = "$CAMPUS_RECORDS/data"
backup_dir = "$CAMPUS_RECORDS/backups"
reports_dir = "./reports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");
    let app_dir = Config::get_app_dir();

    assert_eq!(
        config.paths.data_dir,
        app_dir.join("data").to_string_lossy()
    );
    assert_eq!(
        config.paths.backup_dir,
        app_dir.join("backups").to_string_lossy()
    );
    assert_eq!(config.paths.reports_dir, "./reports");
}

#[test]
fn test_zero_cap_in_file_takes_default() {
    let toml_str = r#"
[logging]
level = "warn"

[records]
max_credits = 0

[paths]
data_dir = "/srv/registrar"
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    let defaults = Config::from_defaults();

    assert!(config.merge_defaults(&defaults));
    assert_eq!(config.records.max_credits, 18);
    assert_eq!(config.paths.data_dir, "/srv/registrar");
    assert_eq!(config.paths.backup_dir, defaults.paths.backup_dir);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_dashed_and_underscored_keys_agree() {
    let mut config = Config::from_defaults();

    config
        .set("max-credits", "21")
        .expect("Failed to set max credits");
    assert_eq!(config.get("max_credits").unwrap(), "21");

    config
        .set("backup_dir", "/srv/backups")
        .expect("Failed to set backup dir");
    assert_eq!(config.get("backup-dir").unwrap(), "/srv/backups");

    assert!(config.get("semester").is_none());
    assert_eq!(
        config.set("semester", "FALL").unwrap_err(),
        "Unknown config key: 'semester'"
    );
}

#[test]
fn test_credit_cap_must_be_positive() {
    let mut config = Config::from_defaults();

    assert!(config.set("max_credits", "0").is_err());
    assert!(config.set("max_credits", "-3").is_err());
    assert!(config.set("max_credits", "lots").is_err());
    assert!(config.set("verbose", "sometimes").is_err());
    assert_eq!(config.records.max_credits, 18);
}

#[test]
fn test_unset_restores_default_cap() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("max_credits", "30").expect("Failed to set cap");
    config.set("data_dir", "/tmp/elsewhere").expect("Failed to set data dir");

    config
        .unset("max-credits", &defaults)
        .expect("Failed to unset cap");
    config
        .unset("data_dir", &defaults)
        .expect("Failed to unset data dir");

    assert_eq!(config.records.max_credits, 18);
    assert_eq!(config.paths.data_dir, defaults.paths.data_dir);
    assert!(config.unset("nope", &defaults).is_err());
}

#[test]
fn test_cli_cap_override_is_not_saved() {
    let mut config = Config::from_defaults();
    let before = config.paths.data_dir.clone();

    config.apply_overrides(&ConfigOverrides {
        max_credits: Some(12),
        reports_dir: Some("./term_reports".to_string()),
        ..ConfigOverrides::default()
    });

    assert_eq!(config.records.max_credits, 12);
    assert_eq!(config.paths.reports_dir, "./term_reports");
    assert_eq!(config.paths.data_dir, before);

    let reloaded = Config::from_defaults();
    assert_eq!(reloaded.records.max_credits, 18);
}

#[test]
fn test_display_shows_records_table() {
    let shown = Config::from_defaults().to_string();

    assert!(shown.contains("[records]\n  max_credits = 18"));
}
