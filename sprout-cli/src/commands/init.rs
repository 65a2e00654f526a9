//! Implementation of the `sprout init` command.
//!
//! This command generates a default `sprout.yaml` configuration file with
//! comments explaining each setting.
//!
//! # Usage
//!
//! ```bash
//! # Create sprout.yaml in current directory
//! sprout init
//!
//! # Specify output path
//! sprout init --output config/sprout.yaml
//!
//! # Overwrite existing file
//! sprout init --force
//! ```

use std::io::Write;
use std::path::Path;
use thiserror::Error;

use crate::config::DEFAULT_CONFIG_FILE;
use crate::output;

/// Errors that can occur during initialization.
#[derive(Debug, Error)]
pub enum InitError {
    /// Configuration file already exists and --force was not specified.
    #[error("Configuration file already exists: {path}. Use --force to overwrite.")]
    FileExists { path: String },

    /// Failed to write the configuration file.
    #[error("Failed to write configuration file: {0}")]
    WriteError(#[from] std::io::Error),

    /// Failed to render a value as a YAML scalar.
    #[error("Failed to render configuration: {0}")]
    RenderError(#[from] serde_yaml::Error),
}

/// Default configuration template with comments.
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# sprout.yaml - Sprout configuration file

# Directory every output path is resolved against.
# Supports ~ for the home directory. SPROUT_BASE_DIR and --base-dir override it.
base_dir: {base_dir}

# Write the bundled React starter (src/main.tsx, src/App.tsx, src/App.css,
# src/index.css). Set to false to write only the files listed below.
include_starter: true

# Extra files, written after the starter files. Paths must be relative and
# must not contain "..". Existing files are overwritten without warning.
files: []
# files:
#   - path: "src/pages/index.ts"
#     content: |
#       export {};
"#;

/// Options for the `sprout init` command.
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Output path for the configuration file.
    pub output: Option<String>,
    /// Base directory to pre-fill in the configuration.
    pub base_dir: Option<String>,
    /// Whether to overwrite an existing file.
    pub force: bool,
}

/// Render the configuration template for a base directory.
///
/// The value goes through the YAML serializer so backslashes, quotes and
/// other special characters load back unchanged.
pub fn render_template(base_dir: &str) -> Result<String, InitError> {
    let scalar = serde_yaml::to_string(base_dir)?;
    Ok(DEFAULT_CONFIG_TEMPLATE.replace("{base_dir}", scalar.trim_end()))
}

/// Run the `sprout init` command.
///
/// Returns an error if the file already exists (and `--force` was not
/// specified) or if writing failed.
pub fn run_init(options: InitOptions) -> Result<(), InitError> {
    let output_path = options
        .output
        .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());
    let path = Path::new(&output_path);

    if path.exists() && !options.force {
        return Err(InitError::FileExists { path: output_path });
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let base_dir = options
        .base_dir
        .unwrap_or_else(|| sprout_emit::starter::DEFAULT_BASE_DIR.to_string());
    let content = render_template(&base_dir)?;

    let mut file = std::fs::File::create(path)?;
    file.write_all(content.as_bytes())?;

    output::summary(&format!("Created configuration file: {}", output_path));
    output::verbose(&format!("Base directory: {}", base_dir));

    Ok(())
}
