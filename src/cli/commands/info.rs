//! Info command handler

use campus_records::config::Config;
use campus_records::core::platform::PlatformInfo;

/// Print version, platform and configured locations
pub fn run(config: &Config) {
    println!("{}", PlatformInfo::collect(config));
}
