//! Copy and ignore pattern policy.
//!
//! A [`PatternSet`] holds the two compiled pattern lists for one run:
//! copy-patterns (matched files are physically copied instead of linked)
//! and ignore-patterns (matched entries are excluded from the mirror
//! entirely, without descending into matched directories).
//!
//! Patterns are regular expressions matched against an item's full source
//! path, anchored at the start of the string: `data/raw` matches
//! `data/raw/img.bin` but not `backup/data/raw`. Within a set the policy
//! is a logical OR; order is insignificant.

use crate::error::{Error, Result};
use regex::Regex;
use std::fs;
use std::path::Path;

/// Compiled pattern policy for one run.
///
/// Built once from configuration and passed by reference into the tree
/// walker; evaluation is a pure function of the set and the path string.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use linkfarm::PatternSet;
///
/// let patterns = PatternSet::compile(
///     &[".*\\.bin".into()],
///     &[".*/\\.git".into()],
/// )?;
/// assert!(patterns.wants_copy(Path::new("/srv/tree/data.bin")));
/// assert!(patterns.is_ignored(Path::new("/srv/tree/.git")));
/// # Ok::<(), linkfarm::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    copy: Vec<Regex>,
    ignore: Vec<Regex>,
}

impl PatternSet {
    /// Compile both pattern lists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] for the first pattern that fails
    /// to compile, before any traversal starts.
    pub fn compile(copy: &[String], ignore: &[String]) -> Result<Self> {
        Ok(Self {
            copy: compile_all(copy)?,
            ignore: compile_all(ignore)?,
        })
    }

    /// A set with no patterns: nothing is ignored, everything is linked.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether `path` matches any ignore pattern.
    pub fn is_ignored(&self, path: &Path) -> bool {
        any_prefix_match(&self.ignore, path)
    }

    /// Whether `path` matches any copy pattern.
    pub fn wants_copy(&self, path: &Path) -> bool {
        any_prefix_match(&self.copy, path)
    }
}

fn compile_all(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern).map_err(|source| Error::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}

/// Prefix match semantics: the regex must match starting at the first
/// byte of the path string, not merely somewhere inside it.
fn any_prefix_match(patterns: &[Regex], path: &Path) -> bool {
    let text = path.to_string_lossy();
    patterns
        .iter()
        .any(|re| re.find(&text).is_some_and(|m| m.start() == 0))
}

/// Read one pattern per line from a list file.
///
/// Blank lines and lines starting with `#` are skipped; everything else
/// is taken verbatim (trailing `\r` stripped for CRLF files).
///
/// # Errors
///
/// Returns [`Error::PatternList`] if the file cannot be read.
pub fn read_pattern_list(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path).map_err(|source| Error::PatternList {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(contents
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.starts_with('#') && !line.trim().is_empty())
        .map(str::to_owned)
        .collect())
}
