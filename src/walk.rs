//! Recursive tree walker.
//!
//! [`mirror_tree`] is the engine's driver: it lists each directory one
//! level at a time, consults the [`PatternSet`] for every entry, computes
//! the entry's destination from the sub-path below the source root, and
//! invokes the chosen [`Executor`]. Traversal is single-threaded,
//! depth-first, and follows `read_dir` order; the first conflict aborts
//! the whole run, leaving earlier work on disk.

use crate::config::MirrorConfig;
use crate::error::{ConflictKind, Error, Result};
use crate::executor::Executor;
use crate::pattern::PatternSet;
use std::fs;
use std::path::Path;

/// Counters for one mirroring run.
///
/// Returned by [`mirror_tree`]. In a dry run the counters reflect what
/// the mutating run would have done.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MirrorStats {
    /// Directories created in the destination
    pub dirs_created: u64,
    /// Links (symbolic or hard) created
    pub links_created: u64,
    /// Files physically copied
    pub files_copied: u64,
    /// Entries skipped by ignore patterns
    pub entries_ignored: u64,
}

/// Create the destination root if it does not exist yet.
///
/// Runs before the walk, outside [`mirror_tree`].
///
/// # Errors
///
/// [`ConflictKind::FileBlocksDirectory`] if the destination exists as a
/// non-directory.
pub fn prepare_destination(destination: &Path) -> Result<()> {
    if !destination.exists() {
        fs::create_dir(destination)?;
    } else if !destination.is_dir() {
        return Err(Error::Conflict {
            kind: ConflictKind::FileBlocksDirectory,
            path: destination.to_path_buf(),
        });
    }
    Ok(())
}

/// Mirror `config.source` into `config.destination` using `executor`.
///
/// Directories are recreated as real directories and recursed into; files
/// matching a copy pattern are copied, all other files are linked; entries
/// matching an ignore pattern are skipped entirely, ignored directories
/// included. Entry symlinks are always linked, never recursed into, even
/// when they point at directories, so symlinked subtrees cannot loop the
/// traversal.
///
/// `config.source` and `config.destination` should be canonical absolute
/// paths (see [`MirrorBuilder`](crate::MirrorBuilder)); the walker relies
/// on path equality to avoid descending into a destination nested inside
/// the source.
///
/// # Errors
///
/// Returns the first [`Error::Conflict`] or IO failure encountered and
/// stops there; there is no per-entry recovery and no rollback of work
/// already done.
pub fn mirror_tree(
    config: &MirrorConfig,
    patterns: &PatternSet,
    executor: &mut dyn Executor,
) -> Result<MirrorStats> {
    if !config.source.exists() {
        return Err(Error::SourceNotFound(config.source.clone()));
    }
    if !config.source.is_dir() {
        return Err(Error::NotADirectory(config.source.clone()));
    }

    let mut stats = MirrorStats::default();
    walk(config, patterns, executor, &config.source, &mut stats)?;
    Ok(stats)
}

fn walk(
    config: &MirrorConfig,
    patterns: &PatternSet,
    executor: &mut dyn Executor,
    dir: &Path,
    stats: &mut MirrorStats,
) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let source_path = entry.path();

        // Ignore wins over everything, directories included.
        if patterns.is_ignored(&source_path) {
            tracing::debug!(path = %source_path.display(), "ignored");
            stats.entries_ignored += 1;
            continue;
        }

        let target = config.destination_for(&source_path);

        // file_type() does not follow symlinks: a symlink to a directory
        // is linked like a file, never recursed into.
        let file_type = entry.file_type()?;
        if file_type.is_dir() && source_path != config.destination {
            if executor.mkdir(&target)? {
                stats.dirs_created += 1;
            }
            walk(config, patterns, executor, &source_path, stats)?;
        } else if patterns.wants_copy(&source_path) {
            executor.copy(&source_path, &target)?;
            stats.files_copied += 1;
        } else {
            // Files, entry symlinks, and the destination root itself
            // (treated as a leaf to avoid mirroring the mirror).
            executor.link(&source_path, &target)?;
            stats.links_created += 1;
        }
    }
    Ok(())
}
