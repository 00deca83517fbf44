//! # linkfarm
//!
//! Mirror a directory tree into a destination as symbolic or hard links,
//! physically copying a chosen subset of files.
//!
//! The result is a "view" of the source tree that costs no storage:
//! directories are recreated for real, every file becomes a link back to
//! the original, and files matching a copy pattern become independent
//! copies instead. Ignore patterns exclude entries from the view
//! entirely.
//!
//! ## Core Features
//!
//! - **Link or copy per file**: regex copy-patterns pick the files that
//!   must be real, everything else is linked
//! - **Ignore patterns**: exclude files and whole subtrees from the view
//! - **Hard link support**: hard links instead of symlinks when the view
//!   must survive the source moving
//! - **Dry-run preview**: runs every conflict check and reports each
//!   intended action without touching the filesystem
//! - **Strict conflict handling**: never replaces an existing link
//!   target; the first conflict aborts the run with an actionable error
//! - **Symlink aware**: source symlinks are linked, never followed, so
//!   symlinked subtrees cannot loop the traversal
//!
//! ## Quick Start
//!
//! ```no_run
//! use linkfarm::MirrorBuilder;
//!
//! let stats = MirrorBuilder::new("project", "build-view")
//!     .copy_pattern(".*\\.lock")
//!     .ignore_pattern(".*/\\.git")
//!     .run()?;
//! println!("{} links, {} dirs", stats.links_created, stats.dirs_created);
//! # Ok::<(), linkfarm::Error>(())
//! ```
//!
//! ## Lower-level API
//!
//! The pieces behind the builder are public for callers that need more
//! control, such as streaming dry-run output:
//!
//! ```no_run
//! use linkfarm::{DryRunExecutor, MirrorConfig, mirror_tree, prepare_destination};
//!
//! let config = MirrorConfig::new("/srv/tree", "/srv/view");
//! prepare_destination(&config.destination)?;
//! let patterns = config.pattern_set()?;
//!
//! let mut executor = DryRunExecutor::new(config.hard_links)
//!     .with_report(|line| println!("{line}"));
//! mirror_tree(&config, &patterns, &mut executor)?;
//! # Ok::<(), linkfarm::Error>(())
//! ```
//!
//! ## Error Model
//!
//! The engine distinguishes one error family: [`Error::Conflict`], raised
//! when an object of the wrong type occupies a path it must create
//! ([`ConflictKind`] says which way). Conflicts abort the whole run;
//! whatever was created before the conflict stays on disk. All other
//! failures propagate as [`Error::Io`].

mod builder;
mod config;
mod error;
mod executor;
mod pattern;
mod walk;

pub mod path;

pub use builder::MirrorBuilder;
pub use config::MirrorConfig;
pub use error::{ConflictKind, Error, Result};
pub use executor::{Action, DryRunExecutor, Executor, FsExecutor};
pub use pattern::{PatternSet, read_pattern_list};
pub use walk::{MirrorStats, mirror_tree, prepare_destination};
