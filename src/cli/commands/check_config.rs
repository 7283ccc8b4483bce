//! `check-config`: load a configuration file and print what it resolves to.

use crate::cli::args::{CheckConfigArgs, OutputFormat};
use crate::config::load_config;
use crate::error::LogwrapError;

/// Loads the file (with environment overrides) and prints the result.
///
/// # Errors
///
/// Returns a configuration error if the file cannot be loaded, or a JSON
/// error if serialization fails.
pub fn run(args: &CheckConfigArgs) -> Result<(), LogwrapError> {
    let config = load_config(&args.file)?;

    match args.format {
        OutputFormat::Human => {
            println!("minimum_level: {}", config.minimum_level);
            println!("use_timestamps: {}", config.use_timestamps);
            println!("forward_to_tracing: {}", config.forward_to_tracing);
            println!("observe_all_levels: {}", config.observe_all_levels);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }
    Ok(())
}
