//! `version`: package version and the level table this build understands.

use serde::Serialize;

use crate::cli::args::{OutputFormat, VersionArgs};
use crate::error::LogwrapError;
use crate::level::Level;

/// What `version` reports.
#[derive(Debug, Serialize)]
pub struct VersionInfo {
    pub name: &'static str,
    pub version: &'static str,
    /// Defined level names, lowest rank first.
    pub levels: Vec<&'static str>,
}

impl VersionInfo {
    #[must_use]
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            levels: Level::ALL.map(Level::as_str).to_vec(),
        }
    }
}

/// Prints version information.
///
/// # Errors
///
/// Returns a JSON error if serialization fails.
pub fn run(args: &VersionArgs) -> Result<(), LogwrapError> {
    let info = VersionInfo::current();
    match args.format {
        OutputFormat::Human => {
            println!("{} {}", info.name, info.version);
            println!("levels: {}", info.levels.join(" < "));
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(&info)?),
    }
    Ok(())
}
