//! Implementation of the `sprout emit` command (the default command).
//!
//! Writes the configured files under the base directory, printing one
//! `Created:` line per file as soon as it is on disk, then the two summary
//! lines. A bare `sprout` run is this command with [`EmitOptions::default`]:
//! no configuration file and no environment override.
//!
//! # Usage
//!
//! ```bash
//! # Write the React starter to the default location
//! sprout
//!
//! # Write somewhere else
//! sprout emit --base-dir ./my-app
//!
//! # Show what would be written
//! sprout emit --base-dir ./my-app --dry-run
//! ```

use clap::ValueEnum;
use sprout_emit::{EmitConfig, emit, emit_with, plan, starter};
use std::path::{Path, PathBuf};

use crate::config::SproutConfig;
use crate::errors::CliError;
use crate::output;

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per file plus summary lines.
    #[default]
    Text,
    /// A single JSON document describing the run.
    Json,
}

/// Options for the `sprout emit` command.
#[derive(Debug, Clone, Default)]
pub struct EmitOptions {
    /// Path to a configuration file.
    pub config: Option<String>,
    /// Base directory override (wins over config and environment).
    pub base_dir: Option<String>,
    /// Value of `SPROUT_BASE_DIR`, when the caller chose to read it.
    pub env_base_dir: Option<String>,
    /// Resolve and report targets without writing.
    pub dry_run: bool,
    /// Output format.
    pub format: OutputFormat,
}

/// Run the `sprout emit` command.
///
/// Configuration precedence, highest first: `--base-dir`, `SPROUT_BASE_DIR`,
/// the configuration file, built-in defaults.
pub fn run_emit(options: EmitOptions) -> Result<(), CliError> {
    let config = load_config(&options)?;
    let emit_config = config.to_emit_config();

    tracing::info!(
        "Emitting {} files under {}",
        emit_config.len(),
        emit_config.base_dir().display()
    );
    output::verbose(&format!("Base directory: {}", emit_config.base_dir().display()));
    output::verbose(&format!("Files: {}", emit_config.len()));

    if options.dry_run {
        return run_dry(&emit_config, options.format);
    }

    match options.format {
        OutputFormat::Text => {
            emit_with(&emit_config, |written| output::created(&written.relative_path))?;
            for line in starter::SUMMARY_LINES {
                output::summary(line);
            }
        }
        OutputFormat::Json => {
            let report = emit(&emit_config)?;
            output::raw(&report.to_json()?);
        }
    }

    Ok(())
}

fn load_config(options: &EmitOptions) -> Result<SproutConfig, CliError> {
    let mut config = SproutConfig::resolve(
        options.config.as_deref().map(Path::new),
        options.env_base_dir.clone(),
    )?;

    if let Some(base_dir) = &options.base_dir {
        config.base_dir = PathBuf::from(base_dir);
        config.expand_paths(dirs::home_dir())?;
        config.validate()?;
    }

    Ok(config)
}

fn run_dry(emit_config: &EmitConfig, format: OutputFormat) -> Result<(), CliError> {
    let plan = plan(emit_config)?;

    match format {
        OutputFormat::Text => {
            for write in &plan.writes {
                let note = if write.overwrites {
                    "(overwrite)"
                } else if write.creates_parent {
                    "(new, creates directory)"
                } else {
                    "(new)"
                };
                output::planned(&write.relative_path, note);
            }
            output::summary(&format!(
                "Dry run: {} files, {} would be overwritten. Nothing was written.",
                plan.writes.len(),
                plan.overwrite_count()
            ));
        }
        OutputFormat::Json => output::raw(&plan.to_json()?),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn options_for(base: &Path) -> EmitOptions {
        EmitOptions {
            base_dir: Some(base.to_string_lossy().to_string()),
            ..EmitOptions::default()
        }
    }

    #[test]
    fn test_emit_writes_starter() {
        let dir = tempdir().unwrap();

        run_emit(options_for(dir.path())).unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("src/main.tsx")).unwrap(),
            starter::MAIN_TSX
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("src/index.css")).unwrap(),
            starter::INDEX_CSS
        );
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempdir().unwrap();
        let options = EmitOptions {
            dry_run: true,
            ..options_for(dir.path())
        };

        run_emit(options).unwrap();

        assert!(!dir.path().join("src").exists());
    }

    #[test]
    fn test_json_format_still_writes() {
        let dir = tempdir().unwrap();
        let options = EmitOptions {
            format: OutputFormat::Json,
            ..options_for(dir.path())
        };

        run_emit(options).unwrap();

        assert!(dir.path().join("src/App.tsx").is_file());
    }

    #[test]
    fn test_config_file_with_extra_files() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("site");
        let config_path = dir.path().join("sprout.yaml");
        fs::write(
            &config_path,
            format!(
                "base_dir: \"{}\"\ninclude_starter: false\nfiles:\n  - path: \"notes.txt\"\n    content: \"hello\\n\"\n",
                base.display()
            ),
        )
        .unwrap();

        let options = EmitOptions {
            config: Some(config_path.to_string_lossy().to_string()),
            ..EmitOptions::default()
        };
        run_emit(options).unwrap();

        assert_eq!(fs::read_to_string(base.join("notes.txt")).unwrap(), "hello\n");
        assert!(!base.join("src").exists());
    }

    #[test]
    fn test_base_dir_flag_overrides_config() {
        let dir = tempdir().unwrap();
        let from_config = dir.path().join("from-config");
        let from_flag = dir.path().join("from-flag");
        let config_path = dir.path().join("sprout.yaml");
        fs::write(
            &config_path,
            format!("base_dir: \"{}\"\n", from_config.display()),
        )
        .unwrap();

        let options = EmitOptions {
            config: Some(config_path.to_string_lossy().to_string()),
            ..options_for(&from_flag)
        };
        run_emit(options).unwrap();

        assert!(from_flag.join("src/App.css").is_file());
        assert!(!from_config.exists());
    }

    #[test]
    fn test_default_options_resolve_to_builtin_starter() {
        let config = load_config(&EmitOptions::default()).unwrap();
        assert_eq!(config, SproutConfig::default());
        assert_eq!(config.to_emit_config().len(), 4);
    }

    #[test]
    fn test_env_base_dir_below_flag() {
        let dir = tempdir().unwrap();
        let from_env = dir.path().join("from-env");
        let from_flag = dir.path().join("from-flag");

        let options = EmitOptions {
            env_base_dir: Some(from_env.to_string_lossy().to_string()),
            ..EmitOptions::default()
        };
        assert_eq!(load_config(&options).unwrap().base_dir, from_env);

        let options = EmitOptions {
            env_base_dir: Some(from_env.to_string_lossy().to_string()),
            ..options_for(&from_flag)
        };
        assert_eq!(load_config(&options).unwrap().base_dir, from_flag);
    }

    #[test]
    fn test_missing_config_file_errors() {
        let dir = tempdir().unwrap();
        let options = EmitOptions {
            config: Some(dir.path().join("absent.yaml").to_string_lossy().to_string()),
            ..options_for(dir.path())
        };

        let err = run_emit(options).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
        assert!(!dir.path().join("src").exists());
    }

    #[test]
    fn test_unwritable_base_errors() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file").unwrap();

        let err = run_emit(options_for(&blocker)).unwrap_err();
        assert!(matches!(err, CliError::Emit(_)));
    }
}
