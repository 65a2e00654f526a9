//! CLI commands for Sprout.
//!
//! - `sprout emit` - Write the configured files (default when no command is given)
//! - `sprout init` - Create a `sprout.yaml` configuration file

pub mod emit;
pub mod init;

pub use emit::{EmitOptions, OutputFormat, run_emit};
pub use init::{InitError, InitOptions, run_init};
