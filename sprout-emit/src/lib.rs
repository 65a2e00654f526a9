//! # sprout-emit
//!
//! Starter-file emission for Sprout.
//!
//! This crate writes a fixed set of literal text files under a base directory.
//! It includes:
//!
//! - **OutputFile**: a relative path plus opaque content
//! - **EmitConfig**: the base directory and ordered file list for one run
//! - **emit / emit_with / plan**: the write pass and its dry-run counterpart
//! - **starter**: the embedded React starter files
//!
//! ## Example
//!
//! ```rust,no_run
//! use sprout_emit::{EmitConfig, emit, starter};
//!
//! let config = EmitConfig::new("/tmp/my-app").with_files(starter::starter_files());
//! let report = emit(&config).unwrap();
//!
//! for path in report.relative_paths() {
//!     println!("Created: {}", path);
//! }
//! ```

pub mod config;
pub mod emitter;
pub mod error;
pub mod file;
pub mod starter;

pub use config::EmitConfig;
pub use emitter::{EmissionPlan, EmissionReport, PlannedWrite, WrittenFile, emit, emit_with, plan};
pub use error::EmitError;
pub use file::OutputFile;
