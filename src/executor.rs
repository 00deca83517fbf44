//! Execution strategies for the tree walker.
//!
//! The walker drives an [`Executor`] with three capabilities: create a
//! directory, create a link, copy a file. [`FsExecutor`] performs the
//! operations; [`DryRunExecutor`] runs the exact same conflict checks but
//! only records what it would do, so a preview reports every conflict a
//! real run would hit. The checks live in shared helpers so the two
//! variants cannot drift apart.

use crate::error::{ConflictKind, Error, Result};
use crate::path::relative_path;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One intended or performed filesystem operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Create a directory
    Mkdir {
        /// The directory to create
        path: PathBuf,
    },
    /// Create a link at `target` pointing at `source`
    Link {
        /// The original file
        source: PathBuf,
        /// The link to create
        target: PathBuf,
        /// Hard link instead of symbolic link
        hard: bool,
    },
    /// Copy `source` to `target`
    Copy {
        /// The original file
        source: PathBuf,
        /// The copy to create
        target: PathBuf,
    },
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mkdir { path } => write!(f, "mkdir {}", path.display()),
            Self::Link {
                source,
                target,
                hard: false,
            } => write!(f, "link {} {}", source.display(), target.display()),
            Self::Link {
                source,
                target,
                hard: true,
            } => write!(f, "hardlink {} {}", source.display(), target.display()),
            Self::Copy { source, target } => {
                write!(f, "copy {} {}", source.display(), target.display())
            }
        }
    }
}

/// Capability set the walker needs: `{mkdir, link, copy}`.
///
/// Both implementations hold the hard-link flag and nothing else between
/// calls.
pub trait Executor {
    /// Ensure `path` exists as a directory.
    ///
    /// No-op if it already is one. Returns whether a directory was (or,
    /// for a dry run, would be) created.
    ///
    /// # Errors
    ///
    /// [`ConflictKind::FileBlocksDirectory`] if `path` exists as a
    /// non-directory.
    fn mkdir(&mut self, path: &Path) -> Result<bool>;

    /// Create a link at `target` referencing `source`.
    ///
    /// # Errors
    ///
    /// [`ConflictKind::TargetExists`] if anything already occupies
    /// `target`, including a dangling symlink. Links are never replaced.
    fn link(&mut self, source: &Path, target: &Path) -> Result<()>;

    /// Copy `source` to `target`, replacing an existing regular file.
    ///
    /// # Errors
    ///
    /// [`ConflictKind::DirectoryBlocksFile`] if `target` exists as a
    /// directory.
    fn copy(&mut self, source: &Path, target: &Path) -> Result<()>;
}

// Conflict checks shared by both variants. A dry run must surface exactly
// the conflicts a real run would.

fn check_mkdir(path: &Path) -> Result<bool> {
    if path.exists() {
        if path.is_dir() {
            Ok(false)
        } else {
            Err(Error::Conflict {
                kind: ConflictKind::FileBlocksDirectory,
                path: path.to_path_buf(),
            })
        }
    } else {
        Ok(true)
    }
}

fn check_link_target(target: &Path) -> Result<()> {
    // exists() follows symlinks, so a dangling symlink needs the extra
    // is_symlink() probe.
    if target.exists() || target.is_symlink() {
        return Err(Error::Conflict {
            kind: ConflictKind::TargetExists,
            path: target.to_path_buf(),
        });
    }
    Ok(())
}

fn check_copy_target(target: &Path) -> Result<()> {
    if target.exists() && target.is_dir() {
        return Err(Error::Conflict {
            kind: ConflictKind::DirectoryBlocksFile,
            path: target.to_path_buf(),
        });
    }
    Ok(())
}

#[cfg(unix)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}

/// Executor that mutates the filesystem.
#[derive(Debug, Clone, Copy)]
pub struct FsExecutor {
    hard_links: bool,
}

impl FsExecutor {
    /// Create a mutating executor.
    pub fn new(hard_links: bool) -> Self {
        Self { hard_links }
    }
}

impl Executor for FsExecutor {
    fn mkdir(&mut self, path: &Path) -> Result<bool> {
        if !check_mkdir(path)? {
            return Ok(false);
        }
        fs::create_dir(path)?;
        tracing::debug!(path = %path.display(), "created directory");
        Ok(true)
    }

    fn link(&mut self, source: &Path, target: &Path) -> Result<()> {
        check_link_target(target)?;
        if self.hard_links {
            // A hard link is inode identity; it takes the real source
            // path, not a rewritten relative one.
            fs::hard_link(source, target)?;
        } else {
            let parent = target.parent().unwrap_or_else(|| Path::new(""));
            let link_target = relative_path(parent, source);
            symlink(&link_target, target)?;
        }
        tracing::debug!(
            source = %source.display(),
            target = %target.display(),
            hard = self.hard_links,
            "created link"
        );
        Ok(())
    }

    fn copy(&mut self, source: &Path, target: &Path) -> Result<()> {
        check_copy_target(target)?;
        // Replaces the contents of an existing regular file, in contrast
        // with link's strict refusal.
        fs::copy(source, target)?;
        tracing::debug!(source = %source.display(), target = %target.display(), "copied file");
        Ok(())
    }
}

/// Executor that records intended operations instead of performing them.
///
/// Every conflict check of [`FsExecutor`] still runs; only the mutating
/// step is skipped. Recorded actions are available through
/// [`actions`](Self::actions) and can additionally be streamed through a
/// report handler as they are decided.
#[derive(Debug, Default)]
pub struct DryRunExecutor {
    hard_links: bool,
    actions: Vec<Action>,
    report: Option<fn(&str)>,
}

impl DryRunExecutor {
    /// Create a dry-run executor.
    pub fn new(hard_links: bool) -> Self {
        Self {
            hard_links,
            actions: Vec::new(),
            report: None,
        }
    }

    /// Stream a one-line description of each intended action.
    #[must_use]
    pub fn with_report(mut self, handler: fn(&str)) -> Self {
        self.report = Some(handler);
        self
    }

    /// The actions recorded so far, in traversal order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Consume the executor and take the recorded actions.
    pub fn into_actions(self) -> Vec<Action> {
        self.actions
    }

    fn record(&mut self, action: Action) {
        if let Some(report) = self.report {
            report(&action.to_string());
        }
        self.actions.push(action);
    }
}

impl Executor for DryRunExecutor {
    fn mkdir(&mut self, path: &Path) -> Result<bool> {
        if !check_mkdir(path)? {
            return Ok(false);
        }
        self.record(Action::Mkdir {
            path: path.to_path_buf(),
        });
        Ok(true)
    }

    fn link(&mut self, source: &Path, target: &Path) -> Result<()> {
        check_link_target(target)?;
        self.record(Action::Link {
            source: source.to_path_buf(),
            target: target.to_path_buf(),
            hard: self.hard_links,
        });
        Ok(())
    }

    fn copy(&mut self, source: &Path, target: &Path) -> Result<()> {
        check_copy_target(target)?;
        self.record(Action::Copy {
            source: source.to_path_buf(),
            target: target.to_path_buf(),
        });
        Ok(())
    }
}
