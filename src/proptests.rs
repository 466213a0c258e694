//! Property-based tests for normalization and containment.

use crate::generators::PathGenerators;
use crate::{
    is_absolute_path, is_sub, normalize_path, path_ele, resolve, split, sub_path, Normalizer,
    PathPrefix,
};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    // normalize(normalize(p)) == normalize(p)
    #[test]
    fn normalization_is_idempotent(path in PathGenerators::any_path()) {
        let once = normalize_path(&path);
        let twice = normalize_path(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalization_with_home_is_idempotent(path in PathGenerators::raw_path()) {
        let normalizer = Normalizer::with_home("/home/alice");
        let once = normalizer.normalize(&path);
        prop_assert_eq!(normalizer.normalize(&once), once);
    }

    // Output never contains `.` segments
    #[test]
    fn normalized_paths_have_no_current_dir(path in PathGenerators::raw_path()) {
        let normalized = normalize_path(&path);
        let parts = split(&normalized);
        prop_assert!(!parts.segments.iter().any(|s| s == "."), "{:?} -> {:?}", path, normalized);
    }

    // `..` only survives at the front of a relative result
    #[test]
    fn parent_refs_only_lead_relative_paths(path in PathGenerators::raw_path()) {
        let parts = split(&normalize_path(&path));
        let leading = parts.segments.iter().take_while(|s| *s == "..").count();
        prop_assert!(!parts.segments[leading..].iter().any(|s| s == ".."));
        if parts.prefix.is_anchored() {
            prop_assert_eq!(leading, 0);
        }
    }

    #[test]
    fn normalized_paths_have_single_separators(path in PathGenerators::raw_path()) {
        let normalized = normalize_path(&path);
        let body = normalized.strip_prefix("\\\\").unwrap_or(&normalized);
        prop_assert!(!body.contains("//"), "{:?}", normalized);
        prop_assert!(!body.contains('\\'), "{:?}", normalized);
    }

    #[test]
    fn resolve_never_grows(path in PathGenerators::raw_path()) {
        let parts = split(&path);
        let before = parts.segments.len();
        let after = resolve(&parts.prefix, parts.segments);
        prop_assert!(after.len() <= before);
    }

    #[test]
    fn absolute_stays_absolute(path in PathGenerators::absolute_path()) {
        prop_assert!(is_absolute_path(&normalize_path(&path)));
        prop_assert_eq!(split(&path).prefix, PathPrefix::RootSlash);
    }

    // A path is always inside itself
    #[test]
    fn containment_is_reflexive(path in PathGenerators::absolute_path()) {
        prop_assert!(is_sub(&path, &path));
    }

    #[test]
    fn containment_is_transitive(
        base in PathGenerators::absolute_path(),
        middle in PathGenerators::relative_path(),
        leaf in PathGenerators::relative_path(),
    ) {
        let b = format!("{}/{}", base, middle);
        let c = format!("{}/{}", b, leaf);
        prop_assert!(is_sub(&base, &b));
        prop_assert!(is_sub(&b, &c));
        prop_assert!(is_sub(&base, &c));
    }

    // An entry that does not climb stays inside the root; one that only
    // climbs always leaves it
    #[test]
    fn joined_entries_match_resolution(
        root in PathGenerators::absolute_path(),
        entry in PathGenerators::entry_name(),
    ) {
        let resolved = normalize_path(&entry);
        let joined = format!("{}/{}", root, entry);
        let climbs = resolved == ".." || resolved.starts_with("../");
        if !climbs {
            prop_assert!(is_sub(&root, &joined), "{:?} -> {:?}", entry, resolved);
        } else if resolved.split('/').all(|s| s == ".." || s.is_empty()) {
            prop_assert!(!is_sub(&root, &joined), "{:?} -> {:?}", entry, resolved);
        }
    }

    #[test]
    fn last_element_matches_sub_path(path in PathGenerators::absolute_path()) {
        let last = path_ele(&path, -1);
        let slice = sub_path(&path, -1, isize::MAX);
        prop_assert_eq!(last.map(std::path::PathBuf::from), slice);
    }
}
