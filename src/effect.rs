//! Rename effect strategies.
//! The tree rewriter is written against one capability, `RenameEffect`, so the
//! real run, the dry run and the verbose run all share identical traversal and
//! ordering logic. Strategies are selected once, from the CLI flags.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;

use crate::errors::TidypathError;

/// One rename, or a simulation of one. `old` and `new` always share a parent
/// directory. `old == new` must succeed immediately with no output and no
/// filesystem call, whatever the strategy.
pub trait RenameEffect {
    fn apply(&mut self, old: &Path, new: &Path) -> Result<()>;
}

/// Renames on the real filesystem, silently.
pub struct FsRename;

impl RenameEffect for FsRename {
    fn apply(&mut self, old: &Path, new: &Path) -> Result<()> {
        if old == new {
            return Ok(());
        }
        fs::rename(old, new).map_err(|source| TidypathError::Rename {
            from: old.to_path_buf(),
            to: new.to_path_buf(),
            source,
        })?;
        Ok(())
    }
}

/// Prints what would be renamed and touches nothing. The writer is injected;
/// production uses stdout.
pub struct PrintRename<W: Write> {
    out: W,
}

impl PrintRename<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> PrintRename<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenameEffect for PrintRename<W> {
    fn apply(&mut self, old: &Path, new: &Path) -> Result<()> {
        if old == new {
            return Ok(());
        }
        write_rename_line(&mut self.out, old, new)
    }
}

/// Renames for real, then prints the same line the dry run would have shown.
/// A failed rename produces no line.
pub struct VerboseRename<W: Write> {
    out: W,
}

impl VerboseRename<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> VerboseRename<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenameEffect for VerboseRename<W> {
    fn apply(&mut self, old: &Path, new: &Path) -> Result<()> {
        if old == new {
            return Ok(());
        }
        fs::rename(old, new).map_err(|source| TidypathError::Rename {
            from: old.to_path_buf(),
            to: new.to_path_buf(),
            source,
        })?;
        write_rename_line(&mut self.out, old, new)
    }
}

/// `<indent><basename(old)> => <basename(new)>`, indent two spaces per path
/// separator in the original path so children nest visually under ancestors.
/// The format is stable; scripts and tests parse it.
fn write_rename_line<W: Write>(out: &mut W, old: &Path, new: &Path) -> Result<()> {
    let old_str = old.to_string_lossy();
    let depth = old_str
        .chars()
        .filter(|c| std::path::is_separator(*c))
        .count();
    let old_name = basename(old);
    let new_name = basename(new);
    writeln!(out, "{}{} => {}", "  ".repeat(depth), old_name, new_name)?;
    Ok(())
}

fn basename(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.to_string_lossy().into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;
    use std::path::PathBuf;

    fn printed(effect: PrintRename<Vec<u8>>) -> String {
        String::from_utf8(effect.into_inner()).unwrap()
    }

    #[test]
    fn equal_paths_are_a_silent_success_for_every_strategy() {
        // The path does not even exist; no strategy may touch the filesystem.
        let p = PathBuf::from("/definitely/not/here/abc");

        FsRename.apply(&p, &p).unwrap();

        let mut print = PrintRename::new(Vec::new());
        print.apply(&p, &p).unwrap();
        assert!(printed(print).is_empty());

        let mut verbose = VerboseRename::new(Vec::new());
        verbose.apply(&p, &p).unwrap();
        assert!(verbose.into_inner().is_empty());
    }

    #[test]
    fn print_strategy_formats_and_leaves_the_filesystem_alone() {
        let temp = assert_fs::TempDir::new().unwrap();
        let f = temp.child("A Dir").child("Some File.TXT");
        f.touch().unwrap();
        let new = f.path().with_file_name("some_file.txt");

        let mut print = PrintRename::new(Vec::new());
        print.apply(f.path(), &new).unwrap();

        let line = printed(print);
        assert!(line.ends_with("Some File.TXT => some_file.txt\n"));
        // Indent is two spaces per separator of the old path.
        let seps = f
            .path()
            .to_string_lossy()
            .chars()
            .filter(|c| std::path::is_separator(*c))
            .count();
        assert!(line.starts_with(&"  ".repeat(seps)));

        assert!(f.path().exists());
        assert!(!new.exists());
    }

    #[test]
    fn fs_strategy_renames() {
        let temp = assert_fs::TempDir::new().unwrap();
        let f = temp.child("Old Name");
        f.touch().unwrap();
        let new = f.path().with_file_name("old_name");

        FsRename.apply(f.path(), &new).unwrap();
        assert!(!f.path().exists());
        assert!(new.exists());
    }

    #[test]
    fn verbose_strategy_renames_and_prints() {
        let temp = assert_fs::TempDir::new().unwrap();
        let f = temp.child("Old Name");
        f.touch().unwrap();
        let new = f.path().with_file_name("old_name");

        let mut verbose = VerboseRename::new(Vec::new());
        verbose.apply(f.path(), &new).unwrap();

        let line = String::from_utf8(verbose.into_inner()).unwrap();
        assert!(line.ends_with("Old Name => old_name\n"));
        assert!(!f.path().exists());
        assert!(new.exists());
    }

    #[test]
    fn verbose_strategy_prints_nothing_when_the_rename_fails() {
        let temp = assert_fs::TempDir::new().unwrap();
        let missing = temp.path().join("never created");
        let new = temp.path().join("never_created");

        let mut verbose = VerboseRename::new(Vec::new());
        let err = verbose.apply(&missing, &new).unwrap_err();
        let typed = err.downcast_ref::<TidypathError>().unwrap();
        assert_eq!(typed.code(), "rename");
        assert!(verbose.into_inner().is_empty());
    }
}
