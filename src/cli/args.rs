//! CLI argument definitions
//!
//! All Clap derive structs for `logwrap` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::level::Level;
use crate::observability::LogFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// Leveled logging facade: emit records and inspect configuration.
#[derive(Parser, Debug)]
#[command(name = "logwrap", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase diagnostics verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress diagnostics output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Diagnostics output format.
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub log_format: LogFormat,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Emit one record through the process-wide logger.
    Emit(EmitArgs),

    /// Load a configuration file and print the effective settings.
    CheckConfig(CheckConfigArgs),

    /// Display version information.
    Version(VersionArgs),
}

// ============================================================================
// Emit
// ============================================================================

/// Arguments for `emit`.
#[derive(Args, Debug)]
pub struct EmitArgs {
    /// Record level (debug, info, error, fatal, or an integer rank).
    #[arg(short, long, default_value = "info")]
    pub level: Level,

    /// Calling-context label.
    #[arg(short = 'C', long, default_value = "cli")]
    pub context: String,

    /// Error text rendered after the message.
    #[arg(short, long)]
    pub error: Option<String>,

    /// YAML configuration file applied before emitting.
    #[arg(short, long, env = "LOGWRAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Minimum level; overrides the configuration file.
    #[arg(long)]
    pub min_level: Option<Level>,

    /// Prefix the line with an RFC3339 timestamp.
    #[arg(long)]
    pub timestamps: bool,

    /// Forward records to tracing diagnostics regardless of the minimum level.
    #[arg(long)]
    pub observe_all: bool,

    /// Message body.
    pub message: String,
}

// ============================================================================
// Check Config
// ============================================================================

/// Arguments for `check-config`.
#[derive(Args, Debug)]
pub struct CheckConfigArgs {
    /// Configuration file to load.
    pub file: PathBuf,

    /// Output format.
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// Version
// ============================================================================

/// Arguments for `version`.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,
}

/// Output format for informational commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    Human,
    /// JSON.
    Json,
}
