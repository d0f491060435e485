//! Integration tests for the `logger` crate

use logger::{debug, error, info, warn};
use logger::{set_level, set_level_from_str, Level};

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("warn"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("DEBUG"));
    assert_eq!(logger::level(), Level::Debug);
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("student {} enrolled in {}", "S001", "CS101");
    warn!("credit cap reached for {}", "S001");
    error!("import failed at line {}", 3);
    debug!("recomputed gpa {:.2}", 3.5);
}

#[cfg(feature = "log-debug")]
#[test]
fn debug_respects_runtime_flag() {
    use logger::{disable_debug, enable_debug, is_debug_enabled};
    set_level(Level::Debug);
    disable_debug();
    assert!(!is_debug_enabled());
    debug!("should be silent");
    enable_debug();
    assert!(is_debug_enabled());
    debug!("should emit");
}
