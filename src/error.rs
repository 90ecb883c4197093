use std::path::{Path, PathBuf};
use thiserror::Error;

/// Faults raised while patching the target file
///
/// Every variant is fatal to the run. Nothing is retried and a failed write
/// is not rolled back.
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to emit report: {source}")]
    Output { source: std::io::Error },
}

impl PatchError {
    /// Create a new read error with path context
    pub fn read_error(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Read {
            path: path.into(),
            source: err,
        }
    }

    /// Create a new write error with path context
    pub fn write_error(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Write {
            path: path.into(),
            source: err,
        }
    }

    pub fn output_error(err: std::io::Error) -> Self {
        Self::Output { source: err }
    }

    /// Path of the file involved, if the fault came from the filesystem
    pub fn path(&self) -> Option<&Path> {
        match self {
            PatchError::Read { path, .. } | PatchError::Write { path, .. } => Some(path),
            PatchError::Output { .. } => None,
        }
    }

    /// Underlying IO error kind
    pub fn kind(&self) -> std::io::ErrorKind {
        match self {
            PatchError::Read { source, .. }
            | PatchError::Write { source, .. }
            | PatchError::Output { source } => source.kind(),
        }
    }
}

/// Result type alias using PatchError
pub type PatchResult<T> = Result<T, PatchError>;
