//! Per-run configuration.
//!
//! [`MirrorConfig`] is the single validated record the CLI (or any other
//! front end) hands to the engine. It is built once per run and never
//! mutated afterwards.

use crate::error::Result;
use crate::pattern::PatternSet;
use std::path::{Path, PathBuf};

/// Immutable configuration for one mirroring run.
///
/// The walker expects `source` and `destination` to be canonical absolute
/// paths; [`MirrorBuilder`](crate::MirrorBuilder) and the CLI take care of
/// canonicalizing both exactly once before the run. Pattern strings are
/// kept here in order (inline patterns first, list-file patterns after)
/// and compiled once via [`pattern_set`](Self::pattern_set).
#[derive(Debug, Clone)]
pub struct MirrorConfig {
    /// Root of the tree to mirror
    pub source: PathBuf,
    /// Root of the mirrored view
    pub destination: PathBuf,
    /// Create hard links instead of symbolic links
    pub hard_links: bool,
    /// Report intended actions without touching the filesystem
    pub dry_run: bool,
    /// Regexes selecting files to physically copy
    pub copy_patterns: Vec<String>,
    /// Regexes selecting entries to exclude entirely
    pub ignore_patterns: Vec<String>,
}

impl MirrorConfig {
    /// Create a configuration with default flags and no patterns.
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            hard_links: false,
            dry_run: false,
            copy_patterns: Vec::new(),
            ignore_patterns: Vec::new(),
        }
    }

    /// Use hard links instead of symbolic links.
    #[must_use]
    pub fn with_hard_links(mut self) -> Self {
        self.hard_links = true;
        self
    }

    /// Preview mode: report actions, change nothing.
    #[must_use]
    pub fn with_dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Add a copy pattern.
    #[must_use]
    pub fn with_copy_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.copy_patterns.push(pattern.into());
        self
    }

    /// Add an ignore pattern.
    #[must_use]
    pub fn with_ignore_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.ignore_patterns.push(pattern.into());
        self
    }

    /// Compile the pattern lists into a [`PatternSet`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`](crate::Error::InvalidPattern) if
    /// any pattern fails to compile.
    pub fn pattern_set(&self) -> Result<PatternSet> {
        PatternSet::compile(&self.copy_patterns, &self.ignore_patterns)
    }

    /// The destination path for a source item, preserving its position
    /// relative to the source root.
    pub fn destination_for(&self, item: &Path) -> PathBuf {
        self.destination.join(crate::path::sub_path(&self.source, item))
    }
}
