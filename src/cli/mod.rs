//! Command-line interface
//!
//! Argument definitions and command handlers for the `logwrap` binary.

pub mod args;
pub mod commands;
