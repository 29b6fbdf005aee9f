//! Tests for the path exclusion filter

use modvanity::core::services::{ExclusionFilter, RESERVED_SEGMENTS, should_exclude};

#[test]
fn test_declaration_files_are_candidates() {
    for path in ["go.mod", "a/go.mod", "a/b/c/go.mod", ".github/go.mod", "_tools/go.mod"] {
        assert!(!should_exclude(path), "{path} should be a candidate");
    }
}

#[test]
fn test_non_declaration_files_are_excluded() {
    for path in ["main.go", "a/go.sum", "README.md", "a/b/GO.MOD", "a/go.mod/x"] {
        assert!(should_exclude(path), "{path} should be excluded");
    }
}

#[test]
fn test_deeply_nested_reserved_segment() {
    assert!(should_exclude("a/b/internal/c/d/go.mod"));
    assert!(should_exclude("x/testdata/y/z/go.mod"));
}

#[test]
fn test_reserved_segment_set() {
    assert_eq!(RESERVED_SEGMENTS, ["internal", "testdata"]);
}

#[test]
fn test_default_filter_is_go_mod() {
    let filter = ExclusionFilter::default();
    assert!(!filter.should_exclude("go.mod"));
    assert_eq!(filter, ExclusionFilter::new("go.mod"));
}

#[test]
fn test_empty_segments_are_ignored() {
    assert!(!should_exclude("a//b/go.mod"));
    assert!(should_exclude("a//internal//go.mod"));
}
