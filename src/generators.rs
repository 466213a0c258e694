//! Property test generators for path utilities
//!
//! Generators cover ordinary names, dot segments, mixed and repeated
//! separators, and the prefixes the splitter recognizes.

use proptest::prelude::*;

/// Generators for path testing scenarios
pub struct PathGenerators;

impl PathGenerators {
    /// Generate valid filename components (no separators, never `.` or `..`)
    pub fn filename_component() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_][a-zA-Z0-9_.-]{0,12}"
            .prop_filter("Not a dot segment", |s| s != "." && s != "..")
    }

    /// Generate a segment that may be a dot segment
    pub fn segment() -> impl Strategy<Value = String> {
        prop_oneof![
            4 => Self::filename_component(),
            1 => Just(".".to_string()),
            2 => Just("..".to_string()),
        ]
    }

    /// Generate a separator run
    pub fn separator() -> impl Strategy<Value = String> {
        prop_oneof![
            4 => Just("/".to_string()),
            2 => Just("\\".to_string()),
            1 => Just("//".to_string()),
            1 => Just("\\/\\".to_string()),
        ]
    }

    /// Generate a leading prefix as it might appear in raw input
    pub fn raw_prefix() -> impl Strategy<Value = String> {
        prop_oneof![
            3 => Just("".to_string()),
            3 => Just("/".to_string()),
            1 => Just("\\\\".to_string()),
            1 => Just("~/".to_string()),
            1 => "[a-zA-Z]:[/\\\\]".prop_map(|s| s),
            1 => "[a-zA-Z]:".prop_map(|s| s),
            1 => Just("file:/".to_string()),
            1 => Just("classpath:".to_string()),
            1 => Just("  ".to_string()),
        ]
    }

    /// Generate raw paths with dot segments and mixed separators
    pub fn raw_path() -> impl Strategy<Value = String> {
        (
            Self::raw_prefix(),
            prop::collection::vec((Self::segment(), Self::separator()), 0..8),
            any::<bool>(),
        )
            .prop_map(|(prefix, parts, trailing)| {
                let mut path = prefix;
                let count = parts.len();
                for (i, (segment, separator)) in parts.into_iter().enumerate() {
                    path.push_str(&segment);
                    if i + 1 < count || trailing {
                        path.push_str(&separator);
                    }
                }
                path
            })
    }

    /// Generate clean absolute paths (no dot segments)
    pub fn absolute_path() -> impl Strategy<Value = String> {
        prop::collection::vec(Self::filename_component(), 1..6)
            .prop_map(|parts| format!("/{}", parts.join("/")))
    }

    /// Generate clean relative paths (no dot segments)
    pub fn relative_path() -> impl Strategy<Value = String> {
        prop::collection::vec(Self::filename_component(), 1..5).prop_map(|parts| parts.join("/"))
    }

    /// Generate untrusted archive entry names, some of which try to escape
    pub fn entry_name() -> impl Strategy<Value = String> {
        prop::collection::vec((Self::segment(), Self::separator()), 1..6).prop_map(|parts| {
            parts
                .into_iter()
                .map(|(segment, separator)| format!("{}{}", segment, separator))
                .collect::<String>()
        })
    }

    /// Generate pathological inputs
    pub fn edge_case_path() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("".to_string()),
            Just("/".to_string()),
            Just("////..".to_string()),
            Just("\\\\".to_string()),
            Just("..".to_string()),
            Just("../../..".to_string()),
            Just("~".to_string()),
            Just("C:".to_string()),
            Just("   ".to_string()),
            Just("file with spaces.txt ".to_string()),
            Just("файл/../文件.txt".to_string()),
            Just("a/b:c/../d".to_string()),
            Just(":".to_string()),
        ]
    }

    /// Generate all types of paths for comprehensive testing
    pub fn any_path() -> impl Strategy<Value = String> {
        prop_oneof![
            4 => Self::raw_path(),
            2 => Self::absolute_path(),
            2 => Self::relative_path(),
            1 => Self::edge_case_path(),
            1 => any::<String>(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn components_have_no_separators(component in PathGenerators::filename_component()) {
            prop_assert!(!component.is_empty());
            prop_assert!(!component.contains('/'));
            prop_assert!(!component.contains('\\'));
            prop_assert!(component != "." && component != "..");
        }

        #[test]
        fn absolute_paths_start_with_slash(path in PathGenerators::absolute_path()) {
            prop_assert!(path.starts_with('/'));
            prop_assert!(!path.contains("//"));
        }

        #[test]
        fn generators_dont_panic(_any_path in PathGenerators::any_path()) {}
    }
}
