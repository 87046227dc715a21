//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - A trailing separator on PATH selects recursive processing.
//! - --verbose and --dry-run are mutually exclusive.

use clap::{Parser, ValueHint};

use tidypath::LogLevel;

/// Rename files and directories into safe lowercase underscore-delimited
/// names, one entry at a time or a whole tree at once.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Rewrite file and directory names into a safe lowercase form"
)]
pub struct Args {
    /// File to rename, directory to rename, or tree root to rewrite
    /// recursively when a trailing separator is present.
    #[arg(value_name = "PATH", value_hint = ValueHint::AnyPath)]
    pub path: String,

    /// Apply renames and print one log line per change.
    #[arg(short = 'v', long, help = "Print each rename as it is applied")]
    pub verbose: bool,

    /// Print what would be renamed without modifying the filesystem.
    #[arg(
        short = 'd',
        long,
        conflicts_with = "verbose",
        help = "Show what would be renamed, but do not modify anything"
    )]
    pub dry_run: bool,

    /// Rewrite names that start with a dot as well. By default dotfiles are
    /// left untouched.
    #[arg(long, help = "Canonicalize dotfile names too")]
    pub include_dot_files: bool,

    /// Set diagnostic log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --log-level value > --verbose (implies info) > None.
    /// An unrecognized --log-level value yields None; the caller decides the
    /// fallback.
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if let Some(s) = self.log_level.as_deref() {
            return LogLevel::parse(s);
        }
        if self.verbose {
            return Some(LogLevel::Info);
        }
        None
    }
}

/// Parse the command line. Help and version exit 0; every other parse
/// failure is a usage error and exits 1.
pub fn parse() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    }
}
