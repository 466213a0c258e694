//! Dot-segment resolution
//!
//! Collapses `.` and `..` in a single right-to-left pass. A counter of
//! pending `..` climbs is kept instead of a stack: every ordinary segment
//! met while the counter is positive has been climbed over and is dropped.
//!
//! Climbs left over at the start of the path are kept for relative paths
//! (`../../foo` stays as is) and discarded for anchored ones, since nothing
//! can climb above a root (`/a/../../foo` becomes `/foo`).

use crate::split::PathPrefix;

const CURRENT_DIR: &str = ".";
const PARENT_DIR: &str = "..";

/// Resolve `.` and `..` segments
///
/// # Examples
/// ```
/// use pathkit::{resolve, PathPrefix};
///
/// let segments = vec!["foo".to_string(), "..".to_string(), "..".to_string(), "bar".to_string()];
/// assert_eq!(resolve(&PathPrefix::None, segments.clone()), vec!["..", "bar"]);
/// assert_eq!(resolve(&PathPrefix::RootSlash, segments), vec!["bar"]);
/// ```
pub fn resolve(prefix: &PathPrefix, segments: Vec<String>) -> Vec<String> {
    let mut tops = 0usize;
    let mut resolved = Vec::with_capacity(segments.len());

    for segment in segments.into_iter().rev() {
        match segment.as_str() {
            CURRENT_DIR => {}
            PARENT_DIR => tops += 1,
            _ if tops > 0 => tops -= 1,
            _ => resolved.push(segment),
        }
    }

    if !prefix.is_anchored() {
        resolved.extend(std::iter::repeat(PARENT_DIR.to_string()).take(tops));
    }

    resolved.reverse();
    resolved
}
