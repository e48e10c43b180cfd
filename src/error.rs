//! Error types for asset generation

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing assets and the archive
///
/// Every variant carries the path involved so the underlying I/O failure
/// can be traced to a concrete file.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("failed to create output directory '{}'", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{}'", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read back '{}'", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid archive name '{}': {reason}", .path.display())]
    InvalidArchiveName { path: PathBuf, reason: &'static str },

    #[error("failed to write archive '{}'", .path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
}

impl GenerateError {
    /// Path of the file or directory the failure is about
    pub fn path(&self) -> &std::path::Path {
        match self {
            GenerateError::CreateDir { path, .. }
            | GenerateError::WriteFile { path, .. }
            | GenerateError::ReadFile { path, .. }
            | GenerateError::InvalidArchiveName { path, .. }
            | GenerateError::Archive { path, .. } => path,
        }
    }
}
