//! Error types for linkfarm.
//!
//! This module provides the [`Error`] enum containing all possible errors
//! that can occur while mirroring a tree, and the [`Result`] type alias.
//!
//! Conflicts are the only errors the engine distinguishes: they are raised
//! when a filesystem object of the wrong type already occupies a path the
//! engine needs to create. Everything else (permissions, disappearing
//! files) propagates as [`Error::Io`].

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for linkfarm operations.
///
/// This is a type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// The way an existing filesystem object blocks an intended operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    /// A non-directory occupies a path where a directory must exist.
    FileBlocksDirectory,
    /// The target of a link already exists (as any type, including a
    /// dangling symlink). Links are never replaced.
    TargetExists,
    /// A directory occupies a path where a file must be copied.
    DirectoryBlocksFile,
}

impl ConflictKind {
    /// Stable identifier, usable in scripted output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FileBlocksDirectory => "file-blocks-directory",
            Self::TargetExists => "target-exists",
            Self::DirectoryBlocksFile => "directory-blocks-file",
        }
    }

    fn hint(self) -> &'static str {
        match self {
            Self::FileBlocksDirectory | Self::TargetExists => "remove the conflicting file",
            Self::DirectoryBlocksFile => "remove the conflicting directory",
        }
    }
}

impl std::fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while mirroring a tree.
///
/// All errors include relevant path information to aid debugging.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// IO error during filesystem operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Source path does not exist
    #[error("Source path does not exist: {0}")]
    SourceNotFound(PathBuf),

    /// Source is not a directory
    #[error("Source is not a directory: {0}")]
    NotADirectory(PathBuf),

    /// An existing object of the wrong type blocks the operation.
    ///
    /// A conflict aborts the whole run; whatever was created before the
    /// conflict remains on disk.
    #[error("Conflict ({kind}) at {}: {}", .path.display(), .kind.hint())]
    Conflict {
        /// What kind of object is in the way
        kind: ConflictKind,
        /// The blocked destination path
        path: PathBuf,
    },

    /// A copy or ignore pattern failed to compile
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending pattern string
        pattern: String,
        /// Underlying regex error
        source: regex::Error,
    },

    /// A pattern list file could not be read
    #[error("Failed to read pattern list {}: {source}", .path.display())]
    PatternList {
        /// Path of the list file
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },
}

impl Error {
    /// The conflict kind, if this error is a conflict.
    pub fn conflict_kind(&self) -> Option<ConflictKind> {
        match self {
            Self::Conflict { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}
