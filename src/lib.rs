//! # pathkit
//!
//! Path normalization and containment checks for code that turns untrusted
//! path strings into filesystem locations.
//!
//! The crate is built from four small, stateless pieces:
//!
//! - **Splitting**: detect the prefix (root slash, drive letter, UNC share,
//!   home directory) and break the rest into segments
//! - **Dot resolution**: collapse `.` and `..` in one right-to-left pass
//! - **Normalization**: reassemble a canonical string with `/` separators
//! - **Containment**: decide whether one path lies inside another, the guard
//!   against "zip slip" when extracting archives or copying trees
//!
//! ## Examples
//!
//! ### Normalization
//!
//! ```rust
//! use pathkit::{normalize_path, is_absolute_path};
//!
//! assert_eq!(normalize_path("/foo//bar/./baz/../"), "/foo/bar/");
//! assert_eq!(normalize_path("foo/../../bar"), "../bar");
//! assert_eq!(normalize_path("C:\\a\\..\\b"), "C:/b");
//!
//! // Syntactic only: normalize first for a reliable answer
//! assert!(is_absolute_path(&normalize_path("file:/tmp/x")));
//! ```
//!
//! ### Home directory expansion
//!
//! ```rust
//! use pathkit::Normalizer;
//!
//! let normalizer = Normalizer::with_home("/home/alice");
//! assert_eq!(normalizer.normalize("~/src/../notes"), "/home/alice/notes");
//! ```
//!
//! ### Zip-slip prevention
//!
//! ```rust
//! use pathkit::{join_checked, is_sub, PathError};
//! use tempfile::TempDir;
//!
//! let root = TempDir::new().unwrap();
//!
//! // Entry names read from an archive
//! assert!(join_checked(root.path(), "sub/dir/file.txt").is_ok());
//! assert!(matches!(
//!     join_checked(root.path(), "../../etc/passwd"),
//!     Err(PathError::Slip { .. })
//! ));
//!
//! // Segment-aware, not a raw string prefix
//! assert!(!is_sub("/data/app", "/data/appendix"));
//! ```
//!
//! ### Segment slicing
//!
//! ```rust
//! use pathkit::{sub_path, last_path_ele};
//! use std::path::PathBuf;
//!
//! assert_eq!(sub_path("/a/b/c/d", 1, -1), Some(PathBuf::from("b/c")));
//! assert_eq!(last_path_ele("/a/b/c").as_deref(), Some("c"));
//! ```

mod contain;
mod error;
mod normalize;
mod resolve;
mod split;

// Generators module for property testing (available in tests)
#[cfg(test)]
pub mod generators;

#[cfg(test)]
mod proptests;

// Re-export main public API
pub use contain::{
    check_slip, is_sub, join_checked, last_path_ele, path_ele, relative_sub_path, sub_path,
    to_abs_normal,
};
pub use error::{PathError, Result};
pub use normalize::{is_absolute_path, normalize_opt, normalize_path, Normalizer};
pub use resolve::resolve;
pub use split::{split, split_with_home, PathPrefix, SplitPath};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
