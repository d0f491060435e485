//! Core record-keeping functionality shared by the library and the CLI

pub mod error;
pub mod io;
pub mod models;
pub mod platform;
pub mod records;
pub mod report;

/// Returns the current version of the `campus-records` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
