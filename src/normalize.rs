//! Path normalization
//!
//! This module reassembles split and resolved paths into a canonical string
//! using `/` as the only separator.

use crate::resolve::resolve;
use crate::split::{split_with_home, PathPrefix};
use log::trace;
use std::path::{Path, PathBuf};

/// Path normalizer with an optional home directory for `~` expansion
///
/// The home directory is injected rather than read from the process
/// environment on every call. Production callers build one with
/// [`Normalizer::from_env`] at startup and reuse it.
///
/// # Examples
/// ```
/// use pathkit::Normalizer;
///
/// let normalizer = Normalizer::with_home("/home/alice");
/// assert_eq!(normalizer.normalize("~/projects/../notes"), "/home/alice/notes");
///
/// // Without a home directory the `~` marker is kept
/// assert_eq!(Normalizer::new().normalize("~/foo/../bar/"), "~/bar/");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalizer {
    home: Option<String>,
}

impl Normalizer {
    /// Normalizer that leaves `~` unexpanded
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizer that substitutes `home` for a leading `~`
    pub fn with_home<P: AsRef<Path>>(home: P) -> Self {
        Self {
            home: Some(home.as_ref().to_string_lossy().into_owned()),
        }
    }

    /// Normalizer using the current user's home directory
    ///
    /// Falls back to no expansion when the home directory cannot be
    /// determined.
    pub fn from_env() -> Self {
        match home::home_dir() {
            Some(dir) => Self::with_home(dir),
            None => {
                log::debug!("Cannot determine home directory, '~' will not be expanded");
                Self::new()
            }
        }
    }

    /// The home directory used for `~` expansion, if any
    pub fn home(&self) -> Option<&str> {
        self.home.as_deref()
    }

    /// Normalize a path string
    ///
    /// This function:
    /// - Strips `classpath:` and `file:` schemes
    /// - Expands a leading `~` when a home directory is configured
    /// - Converts backslashes to forward slashes and removes double slashes
    /// - Removes leading whitespace
    /// - Resolves `.` and `..`
    ///
    /// Never fails: every input, including the empty string, maps to some
    /// canonical string.
    pub fn normalize(&self, path: &str) -> String {
        let (mut out, mut prefix) = self.normalize_once(path);

        // A relative or root result may read back differently (`a/../ b`,
        // `a/../C:../x`, `/x/../C:/y`); drive, UNC and home results are stable
        while matches!(prefix, PathPrefix::None | PathPrefix::RootSlash) {
            let (next, next_prefix) = self.normalize_once(&out);
            if next == out {
                break;
            }
            out = next;
            prefix = next_prefix;
        }
        out
    }

    fn normalize_once(&self, path: &str) -> (String, PathPrefix) {
        let parts = split_with_home(path, self.home.as_deref());
        trace!("Normalizing {:?} with prefix {:?}", path, parts.prefix);

        let segments = resolve(&parts.prefix, parts.segments);
        let out = assemble(&parts.prefix, &segments, parts.trailing_slash);
        (out, parts.prefix)
    }

    /// Normalize an optional path, passing `None` through
    pub fn normalize_opt(&self, path: Option<&str>) -> Option<String> {
        path.map(|p| self.normalize(p))
    }

    /// Normalize a `Path` into a `PathBuf`
    pub fn normalize_path_buf<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        PathBuf::from(self.normalize(&path.as_ref().to_string_lossy()))
    }
}

/// Join a prefix and resolved segments
///
/// A trailing `/` is only emitted when segments remain after resolution,
/// except for `~/` which keeps it.
fn assemble(prefix: &PathPrefix, segments: &[String], trailing_slash: bool) -> String {
    let mut out = prefix.as_text().into_owned();
    let home = matches!(prefix, PathPrefix::HomeDir);
    if segments.is_empty() {
        if home && trailing_slash {
            out.push('/');
        }
        return out;
    }

    if home {
        out.push('/');
    }
    out.push_str(&segments.join("/"));
    if trailing_slash {
        out.push('/');
    }
    out
}

/// Normalize a path string without home-directory expansion
///
/// # Examples
/// ```
/// use pathkit::normalize_path;
///
/// assert_eq!(normalize_path("/foo/./bar"), "/foo/bar");
/// assert_eq!(normalize_path("/foo/../../bar"), "/bar");
/// assert_eq!(normalize_path("foo/../../bar"), "../bar");
/// assert_eq!(normalize_path("C:\\a\\..\\b"), "C:/b");
/// ```
pub fn normalize_path(path: &str) -> String {
    Normalizer::new().normalize(path)
}

/// Normalize an optional path string, passing `None` through
///
/// # Examples
/// ```
/// use pathkit::normalize_opt;
///
/// assert_eq!(normalize_opt(None), None);
/// assert_eq!(normalize_opt(Some("a//b")), Some("a/b".to_string()));
/// ```
pub fn normalize_opt(path: Option<&str>) -> Option<String> {
    path.map(normalize_path)
}

/// Check whether a path string is absolute
///
/// This is a syntactic check on the first characters only: a leading `/`, or
/// a drive letter followed by a separator (`C:/`, `C:\`). The input is not
/// normalized first, so callers wanting a reliable answer should pass the
/// output of [`normalize_path`].
///
/// # Examples
/// ```
/// use pathkit::is_absolute_path;
///
/// assert!(is_absolute_path("/usr/lib"));
/// assert!(is_absolute_path("C:\\Windows"));
/// assert!(!is_absolute_path("C:relative"));
/// assert!(!is_absolute_path("a/../../../C:/x"));
/// ```
pub fn is_absolute_path(path: &str) -> bool {
    match path.as_bytes() {
        [b'/', ..] => true,
        [drive, b':', b'/' | b'\\', ..] => drive.is_ascii_alphabetic(),
        _ => false,
    }
}
