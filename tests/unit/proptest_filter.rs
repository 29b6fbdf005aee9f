//! Property-based tests for the exclusion filter and prefix policies
//!
//! Uses proptest to verify properties that should hold for all inputs.

use modvanity::core::services::{PrefixPolicy, should_exclude};
use proptest::prelude::*;

/// Directory segments that are never reserved
fn plain_segment() -> impl Strategy<Value = String> {
    "[a-z0-9][a-z0-9.-]{0,8}".prop_filter("reserved", |s| s != "internal" && s != "testdata")
}

proptest! {
    /// Any base name other than go.mod is excluded, whatever the directory
    #[test]
    fn other_base_names_are_excluded(
        dirs in prop::collection::vec(plain_segment(), 0..4),
        name in "[a-zA-Z0-9._-]{1,12}"
    ) {
        prop_assume!(name != "go.mod");
        let mut segments = dirs;
        segments.push(name);
        prop_assert!(should_exclude(&segments.join("/")));
    }

    /// A reserved ancestor excludes the file at any depth
    #[test]
    fn reserved_ancestor_excludes(
        above in prop::collection::vec(plain_segment(), 0..4),
        below in prop::collection::vec(plain_segment(), 0..4),
        reserved in prop::sample::select(vec!["internal", "testdata"])
    ) {
        let mut segments = above;
        segments.push(reserved.to_string());
        segments.extend(below);
        segments.push("go.mod".to_string());
        prop_assert!(should_exclude(&segments.join("/")));
    }

    /// go.mod with no reserved ancestor is always a candidate
    #[test]
    fn plain_declaration_is_kept(dirs in prop::collection::vec(plain_segment(), 0..6)) {
        let mut segments = dirs;
        segments.push("go.mod".to_string());
        prop_assert!(!should_exclude(&segments.join("/")));
    }

    /// Every module matches its own path and any leading substring of it
    #[test]
    fn literal_prefix_matches_leading_substrings(
        module in "[a-z]{1,8}\\.[a-z]{2,3}(/[a-z0-9]{1,6}){0,3}",
        cut in 0usize..20
    ) {
        let cut = cut.min(module.len());
        prop_assert!(PrefixPolicy::Literal.matches(&module, &module));
        prop_assert!(PrefixPolicy::Literal.matches(&module, &module[..cut]));
    }

    /// Segment-aware matches are always literal matches too
    #[test]
    fn segment_aware_is_stricter(
        module in "[a-z]{1,4}(/[a-z]{1,4}){0,3}",
        prefix in "[a-z]{1,4}(/[a-z]{1,4}){0,2}/?"
    ) {
        if PrefixPolicy::SegmentAware.matches(&module, &prefix) {
            prop_assert!(PrefixPolicy::Literal.matches(&module, &prefix));
        }
    }
}
