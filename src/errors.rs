//! Typed error definitions for tidypath.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TidypathError {
    #[error("Cannot stat {}: {source}", path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("File already exists: {}", .0.display())]
    TargetExists(PathBuf),

    #[error("Rename failed {} -> {}: {source}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Walk failed under {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl TidypathError {
    /// Stable machine-readable tag for structured log lines.
    pub fn code(&self) -> &'static str {
        match self {
            TidypathError::Stat { .. } => "stat",
            TidypathError::NotADirectory(_) => "not_a_directory",
            TidypathError::TargetExists(_) => "target_exists",
            TidypathError::Rename { .. } => "rename",
            TidypathError::Walk { .. } => "walk",
        }
    }
}
