//! Output file entries and relative-path validation.

use crate::error::EmitError;
use serde::Serialize;
use std::path::{Component, Path, PathBuf};

/// A single (relative path, literal content) pair.
///
/// The content is opaque: it is never parsed, trimmed or re-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputFile {
    /// Slash-separated path relative to the base directory.
    pub relative_path: String,
    /// Literal text written verbatim.
    pub content: String,
}

impl OutputFile {
    pub fn new(relative_path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            content: content.into(),
        }
    }

    /// Check that the relative path stays inside the base directory.
    ///
    /// Returns the normalized form (`.` segments dropped, `/` separators),
    /// used to detect the same target being listed twice.
    pub fn normalized_path(&self) -> Result<String, EmitError> {
        normalize_relative(&self.relative_path)
    }

    /// Resolve this entry against a base directory.
    pub fn target_in(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.relative_path)
    }
}

fn normalize_relative(raw: &str) -> Result<String, EmitError> {
    if raw.trim().is_empty() {
        return Err(EmitError::EmptyPath);
    }

    let unsafe_path = |reason: &str| EmitError::UnsafePath {
        path: raw.to_string(),
        reason: reason.to_string(),
    };

    let mut segments = Vec::new();
    for component in Path::new(raw).components() {
        match component {
            Component::Normal(segment) => segments.push(segment.to_string_lossy().into_owned()),
            Component::CurDir => {}
            Component::ParentDir => return Err(unsafe_path("parent directory traversal")),
            Component::RootDir | Component::Prefix(_) => {
                return Err(unsafe_path("absolute paths are not allowed"));
            }
        }
    }

    if segments.is_empty() {
        return Err(unsafe_path("path does not name a file"));
    }

    Ok(segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalized_plain_path() {
        let file = OutputFile::new("src/App.tsx", "");
        assert_eq!(file.normalized_path().unwrap(), "src/App.tsx");
    }

    #[test]
    fn test_normalized_drops_current_dir() {
        let file = OutputFile::new("./src/./index.css", "");
        assert_eq!(file.normalized_path().unwrap(), "src/index.css");
    }

    #[test]
    fn test_empty_path_rejected() {
        let file = OutputFile::new("", "x");
        assert!(matches!(file.normalized_path(), Err(EmitError::EmptyPath)));

        let file = OutputFile::new("   ", "x");
        assert!(matches!(file.normalized_path(), Err(EmitError::EmptyPath)));
    }

    #[test]
    fn test_traversal_rejected() {
        let file = OutputFile::new("src/../../outside.txt", "x");
        let err = file.normalized_path().unwrap_err();
        assert!(matches!(err, EmitError::UnsafePath { .. }));
        assert!(err.to_string().contains("traversal"));
    }

    #[test]
    fn test_absolute_rejected() {
        let file = OutputFile::new("/etc/hosts", "x");
        assert!(matches!(
            file.normalized_path(),
            Err(EmitError::UnsafePath { .. })
        ));
    }

    #[test]
    fn test_current_dir_only_rejected() {
        let file = OutputFile::new(".", "x");
        assert!(matches!(
            file.normalized_path(),
            Err(EmitError::UnsafePath { .. })
        ));
    }

    #[test]
    fn test_target_in_joins_base() {
        let file = OutputFile::new("src/main.tsx", "");
        assert_eq!(
            file.target_in(Path::new("/srv/app")),
            PathBuf::from("/srv/app/src/main.tsx")
        );
    }
}
