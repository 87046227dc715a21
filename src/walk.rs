//! Tree rewriting.
//! One sorted discovery traversal feeds two phases: files are renamed the
//! moment they are seen, directories are queued and renamed afterwards from
//! the deepest up. A directory's own rename therefore never invalidates a
//! path any later step still needs, and an aborted run leaves a consistent
//! (if incompletely canonicalized) tree that is safe to re-run.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::canon::{canonicalize, RenameDecision};
use crate::effect::RenameEffect;
use crate::errors::TidypathError;

/// One discovered filesystem node. Depth is 0 at the walk root and grows per
/// nesting level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    pub path: PathBuf,
    pub is_dir: bool,
    pub depth: usize,
}

/// Counters for one rewrite invocation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RewriteStats {
    /// Entries the traversal saw (1 in the single-entry modes).
    pub entries: u64,
    /// Renames applied, or printed under the dry-run strategy.
    pub renamed: u64,
    /// Directories left at their original name because the target was taken.
    pub skipped_dirs: u64,
}

/// Lazy discovery traversal: depth-first, each directory's entries in file
/// name order, symlinks not followed. Sorting makes walkdir read a directory
/// completely before yielding from it, so renames applied while the iterator
/// is being consumed cannot perturb a listing.
fn discover(root: &Path) -> impl Iterator<Item = walkdir::Result<PathEntry>> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| {
            entry.map(|e| PathEntry {
                is_dir: e.file_type().is_dir(),
                depth: e.depth(),
                path: e.into_path(),
            })
        })
}

/// Rename decision for the entry's basename, None when the path has none to
/// rewrite (the filesystem root, or a bare "."). Decisions run on the lossy
/// rendering of the name: odd bytes in a stem fold into `_` like any unsafe
/// run, while a name whose only oddity is non-UTF-8 extension bytes comes
/// back unchanged and the entry stays untouched.
fn decide(path: &Path, include_dot_files: bool) -> Option<RenameDecision> {
    let name = path.file_name()?;
    Some(canonicalize(&name.to_string_lossy(), include_dot_files))
}

/// Rename a single non-directory entry. An occupied target is fatal.
pub fn rename_file(
    path: &Path,
    include_dot_files: bool,
    effect: &mut dyn RenameEffect,
) -> Result<RewriteStats> {
    let mut stats = RewriteStats {
        entries: 1,
        ..RewriteStats::default()
    };
    rename_file_at(path, include_dot_files, &mut stats, effect)?;
    Ok(stats)
}

/// Rename a single directory itself, nothing beneath it. An occupied target
/// skips the rename and the run still succeeds.
pub fn rename_dir(
    path: &Path,
    include_dot_files: bool,
    effect: &mut dyn RenameEffect,
) -> Result<RewriteStats> {
    let mut stats = RewriteStats {
        entries: 1,
        ..RewriteStats::default()
    };
    let mut seen = HashSet::new();
    rename_dir_at(path, include_dot_files, &mut seen, &mut stats, effect)?;
    Ok(stats)
}

/// Rewrite a whole tree, root included.
///
/// Phase 1 walks once in sorted order and renames every non-directory against
/// its current, still-unrenamed parent. Directories (the root too) are queued
/// with their depth. Phase 2 sorts the queue deepest first, same-depth ties in
/// reverse path order, and applies the effect in that order; the root carries
/// the minimum depth and so goes last.
pub fn rewrite_tree(
    root: &Path,
    include_dot_files: bool,
    effect: &mut dyn RenameEffect,
) -> Result<RewriteStats> {
    let mut stats = RewriteStats::default();
    let mut pending: Vec<PathEntry> = Vec::new();

    for entry in discover(root) {
        let entry = entry.map_err(|source| TidypathError::Walk {
            path: root.to_path_buf(),
            source,
        })?;
        stats.entries += 1;
        if entry.is_dir {
            pending.push(entry);
        } else {
            rename_file_at(&entry.path, include_dot_files, &mut stats, effect)?;
        }
    }

    pending.sort_by(|a, b| b.depth.cmp(&a.depth).then_with(|| b.path.cmp(&a.path)));

    // Targets claimed so far in this invocation. The filesystem check alone
    // cannot catch duplicate targets under the print-only strategy, where no
    // rename ever lands.
    let mut seen: HashSet<PathBuf> = HashSet::new();
    for dir in &pending {
        rename_dir_at(&dir.path, include_dot_files, &mut seen, &mut stats, effect)?;
    }

    debug!(
        entries = stats.entries,
        renamed = stats.renamed,
        skipped = stats.skipped_dirs,
        "Tree rewrite finished"
    );
    Ok(stats)
}

fn rename_file_at(
    path: &Path,
    include_dot_files: bool,
    stats: &mut RewriteStats,
    effect: &mut dyn RenameEffect,
) -> Result<()> {
    let Some(decision) = decide(path, include_dot_files) else {
        return Ok(());
    };
    if !decision.changed {
        return Ok(());
    }
    let target = path.with_file_name(&decision.new_name);
    if fs::symlink_metadata(&target).is_ok() {
        return Err(TidypathError::TargetExists(target).into());
    }
    effect.apply(path, &target)?;
    stats.renamed += 1;
    Ok(())
}

fn rename_dir_at(
    path: &Path,
    include_dot_files: bool,
    seen: &mut HashSet<PathBuf>,
    stats: &mut RewriteStats,
    effect: &mut dyn RenameEffect,
) -> Result<()> {
    let Some(decision) = decide(path, include_dot_files) else {
        return Ok(());
    };
    if !decision.changed {
        seen.insert(path.to_path_buf());
        return Ok(());
    }
    let target = path.with_file_name(&decision.new_name);
    if seen.contains(&target) || fs::symlink_metadata(&target).is_ok() {
        warn!(
            path = %path.display(),
            target = %target.display(),
            "Directory target already exists; leaving directory unrenamed"
        );
        stats.skipped_dirs += 1;
        // The skipped directory keeps occupying its original name.
        seen.insert(path.to_path_buf());
        return Ok(());
    }
    effect.apply(path, &target)?;
    stats.renamed += 1;
    seen.insert(target);
    Ok(())
}
