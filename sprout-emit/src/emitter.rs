//! Writes an [`EmitConfig`] to disk.
//!
//! Emission is a single sequential pass: validate every entry, then for each
//! entry create the parent directory if needed and overwrite the target with
//! the literal content. The first filesystem error aborts the pass; files
//! already written stay on disk and later entries are never created.

use crate::config::EmitConfig;
use crate::error::EmitError;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// One file that was written during an emission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenFile {
    pub relative_path: String,
    pub absolute_path: PathBuf,
    pub bytes: usize,
}

/// Record of a completed emission, in write order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmissionReport {
    pub base_dir: PathBuf,
    pub written: Vec<WrittenFile>,
}

impl EmissionReport {
    /// Relative paths in the order they were written.
    pub fn relative_paths(&self) -> impl Iterator<Item = &str> {
        self.written.iter().map(|f| f.relative_path.as_str())
    }

    pub fn total_bytes(&self) -> usize {
        self.written.iter().map(|f| f.bytes).sum()
    }

    pub fn to_json(&self) -> Result<String, EmitError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A write that would happen, as seen before touching the disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedWrite {
    pub relative_path: String,
    pub absolute_path: PathBuf,
    pub bytes: usize,
    /// A file already exists at the target and would be replaced.
    pub overwrites: bool,
    /// The parent directory is missing and would be created.
    pub creates_parent: bool,
}

/// Dry-run counterpart of [`EmissionReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmissionPlan {
    pub base_dir: PathBuf,
    pub writes: Vec<PlannedWrite>,
}

impl EmissionPlan {
    pub fn overwrite_count(&self) -> usize {
        self.writes.iter().filter(|w| w.overwrites).count()
    }

    pub fn to_json(&self) -> Result<String, EmitError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Write every configured file, returning what was written.
pub fn emit(config: &EmitConfig) -> Result<EmissionReport, EmitError> {
    emit_with(config, |_| {})
}

/// Like [`emit`], calling `on_written` right after each file lands on disk.
///
/// The callback runs before the next write starts, so a caller printing from
/// it keeps its output in step with the filesystem even when a later write
/// fails.
pub fn emit_with<F>(config: &EmitConfig, mut on_written: F) -> Result<EmissionReport, EmitError>
where
    F: FnMut(&WrittenFile),
{
    config.validate()?;

    let mut written = Vec::with_capacity(config.files.len());
    for file in &config.files {
        let target = file.target_in(&config.base_dir);
        ensure_parent_dir(&target)?;
        write_truncating(&target, &file.content)?;

        tracing::debug!(
            "Wrote {} ({} bytes)",
            target.display(),
            file.content.len()
        );

        let entry = WrittenFile {
            relative_path: file.relative_path.clone(),
            absolute_path: target,
            bytes: file.content.len(),
        };
        on_written(&entry);
        written.push(entry);
    }

    Ok(EmissionReport {
        base_dir: config.base_dir.clone(),
        written,
    })
}

/// Resolve and inspect every target without writing anything.
pub fn plan(config: &EmitConfig) -> Result<EmissionPlan, EmitError> {
    config.validate()?;

    let writes = config
        .files
        .iter()
        .map(|file| {
            let target = file.target_in(&config.base_dir);
            let creates_parent = target.parent().is_some_and(|p| !p.is_dir());
            PlannedWrite {
                relative_path: file.relative_path.clone(),
                overwrites: target.is_file(),
                creates_parent,
                absolute_path: target,
                bytes: file.content.len(),
            }
        })
        .collect();

    Ok(EmissionPlan {
        base_dir: config.base_dir.clone(),
        writes,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<(), EmitError> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() || parent.is_dir() {
        return Ok(());
    }

    tracing::debug!("Creating directory {}", parent.display());
    fs::create_dir_all(parent).map_err(|source| EmitError::CreateDir {
        path: parent.to_path_buf(),
        source,
    })
}

fn write_truncating(path: &Path, content: &str) -> Result<(), EmitError> {
    let to_error = |source| EmitError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = fs::File::create(path).map_err(to_error)?;
    file.write_all(content.as_bytes()).map_err(to_error)?;
    file.flush().map_err(to_error)
}
