//! Path classification.
//! Decides how a user-supplied path is processed: a single file, a single
//! directory, or a whole tree. The trailing separator carries meaning, so the
//! raw string is inspected before any cleaning.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::errors::TidypathError;

/// How the given path will be processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessKind {
    /// Rename one non-directory entry.
    File,
    /// Rename one directory itself, nothing beneath it.
    Dir,
    /// Rewrite the directory and everything beneath it.
    Walk,
}

/// Classify a raw CLI path and return it in cleaned form.
///
/// A trailing separator requests recursive processing and is only valid on a
/// directory. The entry is stat'ed without following symlinks: a symlink is a
/// plain entry here, renaming it moves the link, never its target.
pub fn classify(raw: &str) -> Result<(PathBuf, ProcessKind)> {
    let wants_walk = raw.chars().next_back().is_some_and(std::path::is_separator);
    // Component reassembly drops the trailing separator, duplicate separators
    // and interior "." segments.
    let path: PathBuf = Path::new(raw).components().collect();

    let meta = fs::symlink_metadata(&path).map_err(|source| TidypathError::Stat {
        path: path.clone(),
        source,
    })?;

    if meta.file_type().is_dir() {
        let kind = if wants_walk {
            ProcessKind::Walk
        } else {
            ProcessKind::Dir
        };
        Ok((path, kind))
    } else if wants_walk {
        Err(TidypathError::NotADirectory(path).into())
    } else {
        Ok((path, ProcessKind::File))
    }
}
