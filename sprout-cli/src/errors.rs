use sprout_emit::EmitError;
use thiserror::Error;

use crate::commands::InitError;
use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error(transparent)]
    Init(#[from] InitError),
}

impl CliError {
    /// Get a suggestion for how to fix this error
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            CliError::Config(ConfigError::NotFound(_)) => Some(
                "Run 'sprout init' to create a configuration file, or drop --config to use the defaults",
            ),
            CliError::Config(ConfigError::ParseError(_)) => {
                Some("Check the YAML syntax of the configuration file.")
            }
            CliError::Config(_) => None,
            CliError::Emit(EmitError::CreateDir { .. } | EmitError::Write { .. }) => Some(
                "Check that the base directory is writable, or pick another one with --base-dir or SPROUT_BASE_DIR.",
            ),
            CliError::Emit(EmitError::UnsafePath { .. } | EmitError::EmptyPath) => {
                Some("Output paths must be relative and stay inside the base directory.")
            }
            CliError::Emit(EmitError::DuplicatePath(_)) => {
                Some("List each output path only once in the configuration.")
            }
            CliError::Emit(EmitError::Serialization(_)) => None,
            CliError::Init(InitError::FileExists { .. }) => {
                Some("Pass --force to overwrite the existing file.")
            }
            CliError::Init(InitError::WriteError(_) | InitError::RenderError(_)) => None,
        }
    }

    /// Format error with suggestion for CLI output
    pub fn format_for_cli(&self) -> String {
        let mut output = format!("Error: {}", self);

        if let Some(suggestion) = self.suggestion() {
            output.push_str(&format!("\n\nSuggestion: {}", suggestion));
        }

        output
    }
}
