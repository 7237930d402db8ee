use std::path::PathBuf;
use thiserror::Error;

/// Result type for rewriter operations.
pub type Result<T> = std::result::Result<T, RewriterError>;

#[derive(Debug, Error)]
pub enum RewriterError {
    /// The configured input directory is missing. Fatal for the whole run.
    #[error("input directory not found: {}", .0.display())]
    InputDirMissing(PathBuf),
    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to list input directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    File(#[from] FileError),
}

/// Failure confined to a single playlist file.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FileError {
    /// The file the failure refers to.
    pub fn path(&self) -> &PathBuf {
        match self {
            FileError::Read { path, .. } | FileError::Write { path, .. } => path,
        }
    }
}
