//! Emission configuration: one base directory plus an ordered file list.

use crate::error::EmitError;
use crate::file::OutputFile;
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Everything one emission needs, passed in explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmitConfig {
    /// Directory every relative path is resolved against.
    pub base_dir: PathBuf,
    /// Files to write, in order.
    pub files: Vec<OutputFile>,
}

impl EmitConfig {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            files: Vec::new(),
        }
    }

    /// Add one file, builder style.
    pub fn file(mut self, relative_path: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.push(OutputFile::new(relative_path, content));
        self
    }

    /// Add several files, builder style.
    pub fn with_files(mut self, files: impl IntoIterator<Item = OutputFile>) -> Self {
        self.files.extend(files);
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Validate every entry before anything touches the disk.
    ///
    /// Rejects empty, absolute and traversing paths, and any target listed
    /// twice.
    pub fn validate(&self) -> Result<(), EmitError> {
        let mut seen = HashSet::new();
        for file in &self.files {
            let normalized = file.normalized_path()?;
            if !seen.insert(normalized.clone()) {
                return Err(EmitError::DuplicatePath(normalized));
            }
        }
        Ok(())
    }
}
