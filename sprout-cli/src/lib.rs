//! Sprout CLI library - commands, configuration and terminal output.
//!
//! Exposed as a library so the `sprout` binary stays thin and the commands can
//! be tested directly.
//!
//! # Modules
//!
//! - [`commands`]: `emit` and `init`
//! - [`config`]: `sprout.yaml` loading, overrides and validation
//! - [`errors`]: CLI error type with actionable suggestions
//! - [`output`]: styled progress output with quiet/verbose switches

pub mod commands;
pub mod config;
pub mod errors;
pub mod output;

pub use commands::{EmitOptions, InitOptions, OutputFormat, run_emit, run_init};
pub use config::{ConfigError, FileEntry, SproutConfig};
pub use errors::CliError;
