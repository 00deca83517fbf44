//! Path arithmetic for the mirroring engine.
//!
//! Two pure functions: [`sub_path`] locates an item below a traversal
//! root, [`relative_path`] computes the path that navigates from one
//! directory to another. Neither touches the filesystem; the only ambient
//! input is the current working directory, used to absolutize relative
//! arguments without resolving symlinks.

use std::path::{Component, Path, PathBuf};

/// Strip the leading components `item` shares with `root` and return the
/// remainder.
///
/// Components are compared pairwise from the front; comparison stops at
/// the first mismatch or when either side is exhausted. If the remainder
/// starts at the filesystem root the result is absolute.
///
/// # Example
///
/// ```
/// use std::path::{Path, PathBuf};
/// use linkfarm::path::sub_path;
///
/// assert_eq!(sub_path(Path::new("a/b/c"), Path::new("a/b/c/d/e")), PathBuf::from("d/e"));
/// assert_eq!(sub_path(Path::new("."), Path::new("a/b/c/d/e")), PathBuf::from("a/b/c/d/e"));
/// ```
pub fn sub_path(root: &Path, item: &Path) -> PathBuf {
    let mut root_parts = root.components().peekable();
    let mut item_parts = item.components().peekable();

    while let (Some(r), Some(i)) = (root_parts.peek(), item_parts.peek()) {
        if r != i {
            break;
        }
        root_parts.next();
        item_parts.next();
    }

    item_parts.collect()
}

/// Compute the path that navigates from the directory `from_dir` to `to`.
///
/// An absolute `to` is returned unchanged. Otherwise both sides are made
/// absolute against the current working directory, the common prefix is
/// stripped, and the result climbs out of the remaining `from_dir`
/// components (one `..` each) before descending into the remaining `to`
/// components. When nothing remains on either side the result is `.`, so
/// the returned path is never empty.
///
/// # Example
///
/// ```
/// use std::path::{Path, PathBuf};
/// use linkfarm::path::relative_path;
///
/// assert_eq!(
///     relative_path(Path::new("a/b/c/m"), Path::new("a/b/c/d/e")),
///     PathBuf::from("../d/e")
/// );
/// assert_eq!(
///     relative_path(Path::new("/a/b/c/m"), Path::new("/a/b/c/d/e")),
///     PathBuf::from("/a/b/c/d/e")
/// );
/// ```
pub fn relative_path(from_dir: &Path, to: &Path) -> PathBuf {
    if to.is_absolute() {
        return to.to_path_buf();
    }

    let from_abs = absolutize(from_dir);
    let to_abs = absolutize(to);

    let mut from_parts = from_abs.components().peekable();
    let mut to_parts = to_abs.components().peekable();

    while let (Some(f), Some(t)) = (from_parts.peek(), to_parts.peek()) {
        if f != t {
            break;
        }
        from_parts.next();
        to_parts.next();
    }

    let mut result = PathBuf::new();
    for _ in from_parts {
        result.push(Component::ParentDir);
    }
    for part in to_parts {
        result.push(part);
    }

    if result.as_os_str().is_empty() {
        result.push(Component::CurDir);
    }

    result
}

/// Make a path absolute against the current working directory.
///
/// Unlike `fs::canonicalize` this does not resolve symlinks and works for
/// paths that do not exist yet. If the working directory is unavailable
/// the path is returned as given.
fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}
