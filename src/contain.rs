//! Path containment and slicing
//!
//! Containment checks decide whether one path is nested inside another. They
//! are the guard against archive entries such as `../../etc/passwd` being
//! written outside of the extraction root ("zip slip").

use crate::error::{PathError, Result};
use crate::normalize::{is_absolute_path, normalize_path};
use crate::split::split;
use log::{debug, warn};
use soft_canonicalize::soft_canonicalize;
use std::env;
use std::path::{Path, PathBuf};

/// Check that `candidate` lies inside `parent`
///
/// Both paths are soft-canonicalized: the longest existing ancestor is
/// resolved on the filesystem (following symlinks) and the missing tail is
/// appended with `..` resolved logically. A candidate that does not exist yet
/// is still checked against where its existing directories really point.
/// If either side cannot be resolved at all, both fall back to their
/// syntactic absolute form from [`to_abs_normal`].
///
/// Returns `candidate` unchanged on success.
///
/// # Security
/// Apply this to every path built by joining a trusted root with an
/// untrusted fragment before creating or writing to it. A
/// [`PathError::Slip`] is fatal for that entry: the path will not change
/// shape on retry.
///
/// # Examples
/// ```
/// use pathkit::check_slip;
/// use std::path::Path;
///
/// let root = Path::new("/extract/root");
/// assert!(check_slip(root, root.join("sub/dir/file.txt")).is_ok());
/// assert!(check_slip(root, root.join("../../etc/passwd")).is_err());
/// ```
pub fn check_slip<P1: AsRef<Path>, P2: AsRef<Path>>(
    parent: P1,
    candidate: P2,
) -> Result<PathBuf> {
    let parent = parent.as_ref();
    let candidate = candidate.as_ref();

    let (parent_form, candidate_form) =
        match (soft_canonicalize(parent), soft_canonicalize(candidate)) {
            (Ok(p), Ok(c)) => (
                normalize_path(&p.to_string_lossy()),
                normalize_path(&c.to_string_lossy()),
            ),
            (p, c) => {
                let err = p.err().or(c.err());
                debug!(
                    "Cannot canonicalize {:?} or {:?} ({:?}), using absolute form",
                    parent, candidate, err
                );
                (abs_normal_string(parent), abs_normal_string(candidate))
            }
        };

    if !is_within(&parent_form, &candidate_form) {
        warn!(
            "Path slip detected: {} is outside of the parent dir {}",
            candidate_form, parent_form
        );
        return Err(PathError::Slip {
            parent: parent_form,
            candidate: candidate_form,
        });
    }

    Ok(candidate.to_path_buf())
}

/// Join an untrusted entry name under `root` and check it stays inside
///
/// Backslashes in the entry are treated as separators and a leading `/` is
/// ignored, so `/args.js` lands at `root/args.js`.
///
/// # Examples
/// ```
/// use pathkit::{join_checked, PathError};
/// use tempfile::TempDir;
///
/// let temp_dir = TempDir::new().unwrap();
/// let path = join_checked(temp_dir.path(), "docs\\readme.md").unwrap();
/// assert!(path.ends_with("docs/readme.md"));
///
/// assert!(matches!(
///     join_checked(temp_dir.path(), "../../etc/passwd"),
///     Err(PathError::Slip { .. })
/// ));
/// assert!(matches!(join_checked(temp_dir.path(), "  "), Err(PathError::EmptyPath)));
/// ```
pub fn join_checked<P: AsRef<Path>>(root: P, entry: &str) -> Result<PathBuf> {
    if entry.trim().is_empty() {
        return Err(PathError::EmptyPath);
    }

    let root = root.as_ref();
    let entry = entry.replace('\\', "/");
    let joined = root.join(entry.trim_start_matches('/'));
    check_slip(root, joined)
}

/// Check whether `sub` is nested inside `parent`
///
/// Purely syntactic: both paths are made absolute and normalized, then
/// compared on segment boundaries. Never fails.
///
/// # Examples
/// ```
/// use pathkit::is_sub;
///
/// assert!(is_sub("/data/app", "/data/app/sub/file"));
/// assert!(!is_sub("/data/app", "/data/appendix"));
/// ```
pub fn is_sub<P1: AsRef<Path>, P2: AsRef<Path>>(parent: P1, sub: P2) -> bool {
    is_within(
        &abs_normal_string(parent.as_ref()),
        &abs_normal_string(sub.as_ref()),
    )
}

/// Convert a path to its normalized absolute form
///
/// Relative paths are resolved against the current directory. If that is
/// unavailable the path is normalized as given.
pub fn to_abs_normal<P: AsRef<Path>>(path: P) -> PathBuf {
    PathBuf::from(abs_normal_string(path.as_ref()))
}

fn abs_normal_string(path: &Path) -> String {
    let text = path.to_string_lossy();
    if path.is_absolute() || is_absolute_path(&text) || text.starts_with("\\\\") {
        return normalize_path(&text);
    }

    match env::current_dir() {
        Ok(cwd) => normalize_path(&cwd.join(path).to_string_lossy()),
        Err(e) => {
            debug!("Cannot get current directory ({}), normalizing {:?} as given", e, path);
            normalize_path(&text)
        }
    }
}

/// Segment-boundary prefix test on normalized strings
fn is_within(parent: &str, child: &str) -> bool {
    let parent = parent.trim_end_matches('/');
    let child = child.trim_end_matches('/');
    match child.strip_prefix(parent) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Sub-path of the segments in `[from, to)`
///
/// Negative indices count from the end (`-1` is the last segment). Indices
/// past either end are clamped, and a reversed range is swapped. Returns
/// `None` when the range is empty. The result is always relative.
///
/// # Examples
/// ```
/// use pathkit::sub_path;
/// use std::path::PathBuf;
///
/// assert_eq!(sub_path("/a/b/c/d", 1, -1), Some(PathBuf::from("b/c")));
/// assert_eq!(sub_path("/a/b/c/d", 2, 2), None);
/// ```
pub fn sub_path<P: AsRef<Path>>(path: P, from: isize, to: isize) -> Option<PathBuf> {
    let segments = split(&path.as_ref().to_string_lossy()).segments;
    let len = segments.len() as isize;

    let mut from = if from < 0 { (len + from).max(0) } else { from.min(len) };
    let mut to = if to < 0 {
        // Still negative after wrapping: run to the end
        match len + to {
            t if t < 0 => len,
            t => t,
        }
    } else {
        to.min(len)
    };
    if to < from {
        std::mem::swap(&mut from, &mut to);
    }
    if from == to {
        return None;
    }

    Some(PathBuf::from(segments[from as usize..to as usize].join("/")))
}

/// The single segment at `index`
///
/// Negative indices count from the end. Returns `None` when the index is out
/// of range.
///
/// # Examples
/// ```
/// use pathkit::path_ele;
///
/// assert_eq!(path_ele("/a/b/c", -1).as_deref(), Some("c"));
/// assert_eq!(path_ele("/a/b/c", 0).as_deref(), Some("a"));
/// assert_eq!(path_ele("/a/b/c", 3), None);
/// ```
pub fn path_ele<P: AsRef<Path>>(path: P, index: isize) -> Option<String> {
    let mut segments = split(&path.as_ref().to_string_lossy()).segments;
    let len = segments.len() as isize;
    let index = if index < 0 { len + index } else { index };
    if !(0..len).contains(&index) {
        return None;
    }
    Some(segments.swap_remove(index as usize))
}

/// The last segment of a path
pub fn last_path_ele<P: AsRef<Path>>(path: P) -> Option<String> {
    path_ele(path, -1)
}

/// Path of `file` relative to `dir`
///
/// Both are normalized and the directory is matched case-insensitively on
/// segment boundaries. If `file` is not inside `dir`, the normalized `file`
/// is returned. An empty `file` gives `None`; an empty `dir` returns `file`
/// as given.
///
/// # Examples
/// ```
/// use pathkit::relative_sub_path;
///
/// assert_eq!(relative_sub_path("/data/aaa/bbb", "/data/aaa/bbb/ccc").as_deref(), Some("ccc"));
/// assert_eq!(
///     relative_sub_path("/data/Aaa/bbb", "/data/aaa/bbb/ccc.txt").as_deref(),
///     Some("ccc.txt")
/// );
/// assert_eq!(relative_sub_path("/data/Aaa/bbb", "/data/aaa/bbb/").as_deref(), Some(""));
/// assert_eq!(relative_sub_path("/data", ""), None);
/// ```
pub fn relative_sub_path(dir: &str, file: &str) -> Option<String> {
    if file.is_empty() {
        return None;
    }
    if dir.is_empty() {
        return Some(file.to_string());
    }

    let dir = normalize_path(dir);
    let dir = dir.trim_end_matches('/');
    let file = normalize_path(file);

    match file.get(..dir.len()) {
        Some(head) if head.eq_ignore_ascii_case(dir) => {
            let rest = &file[dir.len()..];
            if rest.is_empty() || rest.starts_with('/') || dir.is_empty() {
                return Some(rest.trim_start_matches('/').to_string());
            }
            Some(file)
        }
        _ => Some(file),
    }
}
