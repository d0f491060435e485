//! Config command handler

use crate::args::ConfigSubcommand;
use campus_records::config::Config;
use logger::Level;
use std::io::{self, BufRead, Write};

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    let result = match subcommand {
        None => Ok(show(config, None)),
        Some(ConfigSubcommand::Get { key }) => Ok(show(config, key.as_deref())),
        Some(ConfigSubcommand::Set { key, value }) => {
            apply_set(config, &key, &value).and_then(|msg| persist(config).map(|()| msg))
        }
        Some(ConfigSubcommand::Unset { key }) => {
            apply_unset(config, defaults, &key).and_then(|msg| persist(config).map(|()| msg))
        }
        Some(ConfigSubcommand::Reset) => {
            let stdin = io::stdin();
            reset(&mut stdin.lock(), &mut io::stdout())
        }
    };

    match result {
        Ok(message) => print!("{message}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

/// Render one value, or the whole config when no key is given
fn show(config: &Config, key: Option<&str>) -> String {
    match key {
        Some(k) => config
            .get(k)
            .map_or_else(|| format!("Unknown config key: '{k}'\n"), |v| format!("{v}\n")),
        None => format!("\n=== Configuration ===\n\n{config}"),
    }
}

/// Validate and set a key in memory
///
/// Log levels are checked here since the library stores them as plain text.
fn apply_set(config: &mut Config, key: &str, value: &str) -> Result<String, String> {
    if key == "level" && value.parse::<Level>().is_err() {
        return Err(format!(
            "Invalid log level '{value}' (expected error, warn, info or debug)"
        ));
    }
    config.set(key, value)?;

    let mut message = format!("✓ Set {key} = {value}\n");
    if matches!(key, "max_credits" | "max-credits") {
        message.push_str("  The new credit cap applies from the next run\n");
    }
    Ok(message)
}

fn apply_unset(config: &mut Config, defaults: &Config, key: &str) -> Result<String, String> {
    config.unset(key, defaults)?;
    let value = config.get(key).unwrap_or_default();
    Ok(format!("✓ Reset {key} to default ({value})\n"))
}

fn persist(config: &Config) -> Result<(), String> {
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))
}

/// Ask for confirmation, then delete the config file
fn reset<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String, String> {
    if !Config::get_config_file_path().exists() {
        return Ok("✓ Config is already at defaults\n".to_string());
    }

    write!(output, "Are you sure you want to reset config to defaults? (y/n): ")
        .and_then(|()| output.flush())
        .map_err(|e| e.to_string())?;

    let mut response = String::new();
    input.read_line(&mut response).map_err(|e| e.to_string())?;
    let response = response.trim();

    if response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes") {
        Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
        Ok("✓ Config reset to defaults\n".to_string())
    } else {
        Ok("✗ Reset cancelled\n".to_string())
    }
}
