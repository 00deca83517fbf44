//! Builder API for ergonomic mirroring.
//!
//! [`MirrorBuilder`] is the library's front door: it validates and
//! canonicalizes both roots, prepares the destination, compiles the
//! pattern sets, and runs the walk with the right executor variant.
//!
//! # Examples
//!
//! ```no_run
//! use linkfarm::MirrorBuilder;
//!
//! // Mirror a tree as symlinks, keeping build outputs real copies.
//! let stats = MirrorBuilder::new("tree", "view")
//!     .copy_pattern(".*\\.o")
//!     .ignore_pattern(".*/\\.git")
//!     .run()?;
//! println!("{} links, {} copies", stats.links_created, stats.files_copied);
//! # Ok::<(), linkfarm::Error>(())
//! ```
//!
//! ## Previewing a run
//!
//! ```no_run
//! use linkfarm::MirrorBuilder;
//!
//! for action in MirrorBuilder::new("tree", "view").preview()? {
//!     println!("{action}");
//! }
//! # Ok::<(), linkfarm::Error>(())
//! ```

use crate::config::MirrorConfig;
use crate::error::Result;
use crate::executor::{Action, DryRunExecutor, FsExecutor};
use crate::pattern::PatternSet;
use crate::walk::{MirrorStats, mirror_tree, prepare_destination};
use std::fs;
use std::path::Path;

/// Fluent builder for a mirroring run.
#[derive(Debug, Clone)]
pub struct MirrorBuilder {
    config: MirrorConfig,
}

impl MirrorBuilder {
    /// Start a builder mirroring `source` into `destination`.
    pub fn new(source: impl AsRef<Path>, destination: impl AsRef<Path>) -> Self {
        Self {
            config: MirrorConfig::new(
                source.as_ref().to_path_buf(),
                destination.as_ref().to_path_buf(),
            ),
        }
    }

    /// Use hard links instead of symbolic links.
    #[must_use]
    pub fn hard_links(mut self) -> Self {
        self.config.hard_links = true;
        self
    }

    /// Physically copy files matching this regex instead of linking them.
    #[must_use]
    pub fn copy_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.config.copy_patterns.push(pattern.into());
        self
    }

    /// Exclude entries matching this regex from the mirror entirely.
    #[must_use]
    pub fn ignore_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.config.ignore_patterns.push(pattern.into());
        self
    }

    /// Run the mirror, mutating the filesystem.
    ///
    /// # Errors
    ///
    /// Propagates validation failures, pattern compilation errors, and
    /// the first conflict or IO error of the walk.
    pub fn run(self) -> Result<MirrorStats> {
        let (config, patterns) = self.finish()?;
        let mut executor = FsExecutor::new(config.hard_links);
        mirror_tree(&config, &patterns, &mut executor)
    }

    /// Run all decision and conflict logic without mutating the
    /// filesystem, returning the actions a real run would perform.
    ///
    /// The destination root itself is still created if absent, as in a
    /// real run; everything below it is left untouched.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`run`](Self::run); a conflict aborts the
    /// preview at the point the real run would abort.
    pub fn preview(self) -> Result<Vec<Action>> {
        let (config, patterns) = self.finish()?;
        let mut executor = DryRunExecutor::new(config.hard_links);
        mirror_tree(&config, &patterns, &mut executor)?;
        Ok(executor.into_actions())
    }

    /// Validate roots, canonicalize them exactly once, and compile the
    /// pattern sets.
    fn finish(self) -> Result<(MirrorConfig, PatternSet)> {
        let mut config = self.config;

        if !config.source.exists() {
            return Err(crate::Error::SourceNotFound(config.source));
        }
        if !config.source.is_dir() {
            return Err(crate::Error::NotADirectory(config.source));
        }
        config.source = fs::canonicalize(&config.source)?;

        prepare_destination(&config.destination)?;
        config.destination = fs::canonicalize(&config.destination)?;

        let patterns = config.pattern_set()?;
        Ok((config, patterns))
    }
}
