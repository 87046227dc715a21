//! Core library for `tidypath`.
//!
//! Rewrites file and directory names in place into a canonical lowercase,
//! underscore-delimited form. The pieces: a pure name canonicalizer, a path
//! classifier that gives a trailing separator its meaning, injectable rename
//! strategies (real, dry-run, verbose), and a two-phase tree rewriter that
//! renames files first and directories deepest-first so every path stays
//! valid for the whole run.

use std::fmt;

pub mod canon;
pub mod classify;
pub mod effect;
pub mod errors;
pub mod output;
pub mod walk;

pub use canon::{canonicalize, RenameDecision};
pub use classify::{classify, ProcessKind};
pub use effect::{FsRename, PrintRename, RenameEffect, VerboseRename};
pub use errors::TidypathError;
pub use walk::{rename_dir, rename_file, rewrite_tree, PathEntry, RewriteStats};

/// Program-defined verbosity levels exposed to users.
/// Controls diagnostic output on stderr only; the stdout rename log is
/// governed by the dry-run and verbose flags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}
