//! Path splitting
//!
//! Turns a raw path string into a [`PathPrefix`] plus an ordered list of
//! segments. Every rewrite is a separate step so each one can be tested on
//! its own:
//!
//! 1. strip `classpath:` / `file:` schemes (case-insensitive) and leading
//!    whitespace until neither is left; trailing whitespace is a legal file
//!    name and is kept
//! 2. expand or mark a leading `~`
//! 3. collapse runs of `/` and `\` into a single `/`
//! 4. classify the prefix (UNC, home, drive letter, root slash, none)
//! 5. split the remainder on `/`

use std::borrow::Cow;

const SCHEMES: [&str; 2] = ["classpath:", "file:"];

/// The non-segment leading portion of a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPrefix {
    /// Relative path
    None,
    /// Leading `/`
    RootSlash,
    /// `C:` form; `rooted` is set when the drive is followed by a separator (`C:/`)
    DriveLetter { letter: char, rooted: bool },
    /// Leading `\\` in the raw input
    UncShare,
    /// Leading `~` that was not expanded because no home directory was supplied
    HomeDir,
}

impl PathPrefix {
    /// Whether the path is anchored, i.e. `..` cannot climb above it
    pub fn is_anchored(&self) -> bool {
        !matches!(self, PathPrefix::None)
    }

    /// Canonical textual form of the prefix
    pub fn as_text(&self) -> Cow<'static, str> {
        match self {
            PathPrefix::None => Cow::Borrowed(""),
            PathPrefix::RootSlash => Cow::Borrowed("/"),
            PathPrefix::DriveLetter { letter, rooted } => {
                let mut text = String::with_capacity(3);
                text.push(*letter);
                text.push(':');
                if *rooted {
                    text.push('/');
                }
                Cow::Owned(text)
            }
            PathPrefix::UncShare => Cow::Borrowed("\\\\"),
            PathPrefix::HomeDir => Cow::Borrowed("~"),
        }
    }
}

/// Result of splitting a raw path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitPath {
    pub prefix: PathPrefix,
    pub segments: Vec<String>,
    /// The input ended with a separator after the prefix
    pub trailing_slash: bool,
}

/// Split a raw path without home-directory expansion
///
/// A leading `~` followed by a separator (or nothing) is reported as
/// [`PathPrefix::HomeDir`].
///
/// # Examples
/// ```
/// use pathkit::{split, PathPrefix};
///
/// let parts = split("C:\\a\\..\\b");
/// assert_eq!(parts.prefix, PathPrefix::DriveLetter { letter: 'C', rooted: true });
/// assert_eq!(parts.segments, vec!["a", "..", "b"]);
/// ```
pub fn split(raw: &str) -> SplitPath {
    split_with_home(raw, None)
}

/// Split a raw path, substituting `home` for a leading `~` when given
pub fn split_with_home(raw: &str, home: Option<&str>) -> SplitPath {
    let unc = raw.starts_with("\\\\");
    let path = strip_lead(raw);
    let (path, home_marker) = expand_home(path, home);
    let collapsed = collapse_separators(&path);

    let (prefix, rest) = if unc {
        (PathPrefix::UncShare, strip_slash(&collapsed))
    } else if home_marker {
        // Keep the slash so `~/` remembers its trailing separator
        (PathPrefix::HomeDir, collapsed.as_str())
    } else {
        detect_prefix(&collapsed)
    };

    let (body, trailing_slash) = match rest.strip_suffix('/') {
        Some(body) => (body, true),
        None => (rest, false),
    };
    let segments = body
        .split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect::<Vec<_>>();

    let trailing_slash =
        trailing_slash && (!segments.is_empty() || prefix == PathPrefix::HomeDir);
    SplitPath {
        prefix,
        segments,
        trailing_slash,
    }
}

/// Strip schemes and leading whitespace until neither is left
pub(crate) fn strip_lead(raw: &str) -> &str {
    let mut path = raw;
    loop {
        let next = strip_scheme(path.trim_start());
        if next.len() == path.len() {
            return path;
        }
        path = next;
    }
}

/// Remove a leading `classpath:` and then a leading `file:`, ignoring case
fn strip_scheme(raw: &str) -> &str {
    SCHEMES.iter().fold(raw, |path, scheme| match path.get(..scheme.len()) {
        Some(head) if head.eq_ignore_ascii_case(scheme) => &path[scheme.len()..],
        _ => path,
    })
}

/// Replace the leading `~` with `home`, or report it as a marker when no
/// home directory is known
fn expand_home<'a>(path: &'a str, home: Option<&str>) -> (Cow<'a, str>, bool) {
    let Some(rest) = path.strip_prefix('~') else {
        return (Cow::Borrowed(path), false);
    };

    match home {
        Some(home) => (Cow::Owned(format!("{}{}", home, rest)), false),
        None if rest.is_empty() || rest.starts_with(['/', '\\']) => (Cow::Borrowed(rest), true),
        // `~user` is not a home reference without a resolver
        None => (Cow::Borrowed(path), false),
    }
}

/// Collapse every run of `/` or `\` into a single `/`
pub(crate) fn collapse_separators(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut in_separator = false;
    for c in path.chars() {
        if c == '/' || c == '\\' {
            if !in_separator {
                out.push('/');
            }
            in_separator = true;
        } else {
            out.push(c);
            in_separator = false;
        }
    }
    out
}

fn strip_slash(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

/// Classify a drive letter, root slash or relative path on an already
/// collapsed string
///
/// A single `/` before a drive (`/C:/x`) is dropped.
fn detect_prefix(path: &str) -> (PathPrefix, &str) {
    let body = path.strip_prefix('/').unwrap_or(path);
    if let Some(colon) = body.find(':') {
        // A `/` inside the candidate means the colon is ordinary path content
        let mut candidate = body[..colon].chars();
        if let (Some(letter), None) = (candidate.next(), candidate.next()) {
            if letter.is_ascii_alphabetic() {
                let rest = &body[colon + 1..];
                return match rest.strip_prefix('/') {
                    Some(rest) => (PathPrefix::DriveLetter { letter, rooted: true }, rest),
                    None => (PathPrefix::DriveLetter { letter, rooted: false }, rest),
                };
            }
        }
    }

    match path.strip_prefix('/') {
        Some(rest) => (PathPrefix::RootSlash, rest),
        None => (PathPrefix::None, path),
    }
}
