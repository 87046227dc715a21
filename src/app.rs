//! Application orchestrator.
//! Initializes logging, classifies the given path, selects a rename strategy
//! from the flags, and dispatches to the single-entry or tree operations.

use anyhow::Result;
use tracing::{debug, error, info};

use tidypath::output as out;
use tidypath::{
    classify, rename_dir, rename_file, rewrite_tree, FsRename, LogLevel, PrintRename, ProcessKind,
    RenameEffect, RewriteStats, TidypathError, VerboseRename,
};

use crate::cli::Args;
use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    let level = match args.effective_log_level() {
        Some(level) => level,
        None => {
            if let Some(raw) = args.log_level.as_deref() {
                out::print_warn(&format!(
                    "Unknown log level '{raw}'; using '{}'",
                    LogLevel::default()
                ));
            }
            LogLevel::default()
        }
    };
    init_tracing(&level).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;

    debug!("Starting tidypath: {:?}", args);

    // One strategy for the whole run; all three share the traversal logic.
    let mut effect: Box<dyn RenameEffect> = if args.dry_run {
        Box::new(PrintRename::stdout())
    } else if args.verbose {
        Box::new(VerboseRename::stdout())
    } else {
        Box::new(FsRename)
    };

    let outcome: Result<RewriteStats> = classify(&args.path).and_then(|(path, kind)| {
        debug!(path = %path.display(), ?kind, "Path classified");
        match kind {
            ProcessKind::File => rename_file(&path, args.include_dot_files, &mut *effect),
            ProcessKind::Dir => rename_dir(&path, args.include_dot_files, &mut *effect),
            ProcessKind::Walk => rewrite_tree(&path, args.include_dot_files, &mut *effect),
        }
    });

    match outcome {
        Ok(stats) => {
            info!(
                entries = stats.entries,
                renamed = stats.renamed,
                skipped_dirs = stats.skipped_dirs,
                dry_run = args.dry_run,
                "Rewrite completed"
            );
            Ok(())
        }
        Err(e) => {
            if let Some(te) = e.downcast_ref::<TidypathError>() {
                let code = te.code();
                match te {
                    TidypathError::Stat { path, source } => {
                        error!(code, kind = "stat", path = %path.display(), error = %source, "Cannot use path")
                    }
                    TidypathError::NotADirectory(path) => {
                        error!(code, kind = "not_a_directory", path = %path.display(), "Trailing separator on a non-directory")
                    }
                    TidypathError::TargetExists(path) => {
                        error!(code, kind = "target_exists", path = %path.display(), "Rewrite aborted")
                    }
                    TidypathError::Rename { from, to, source } => {
                        error!(code, kind = "rename", from = %from.display(), to = %to.display(), error = %source, "Rewrite aborted")
                    }
                    TidypathError::Walk { path, source } => {
                        error!(code, kind = "walk", path = %path.display(), error = %source, "Rewrite aborted")
                    }
                }
            } else {
                error!(error = ?e, "Rewrite failed");
            }
            Err(e)
        }
    }
}
