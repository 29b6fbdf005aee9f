//! Tests for module discovery over in-memory trees

use modvanity::adapters::{GoModParser, MemoryTree};
use modvanity::core::services::{DiscoveryError, discover};

use crate::common::fixtures::{go_mod, multi_module_tree};

fn module_strings(tree: &MemoryTree) -> Vec<String> {
    discover(tree, &GoModParser)
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn test_empty_tree_yields_nothing() {
    assert!(module_strings(&MemoryTree::new()).is_empty());
}

#[test]
fn test_tree_without_declarations_yields_nothing() {
    let tree = MemoryTree::new()
        .with_file("main.go", "package main\n")
        .with_file("internal/go.mod", go_mod("x/internal"));
    assert!(module_strings(&tree).is_empty());
}

#[test]
fn test_multi_module_tree_in_enumeration_order() {
    assert_eq!(
        module_strings(&multi_module_tree()),
        vec!["example.com/foo/bar", "example.com/foo", "example.com/foo/module/baz"]
    );
}

#[test]
fn test_duplicate_declarations_are_kept() {
    let tree = MemoryTree::new()
        .with_file("a/go.mod", go_mod("x/same"))
        .with_file("b/go.mod", go_mod("x/same"));
    assert_eq!(module_strings(&tree), vec!["x/same", "x/same"]);
}

#[test]
fn test_parse_error_aborts_with_path() {
    let tree = MemoryTree::new()
        .with_file("a/go.mod", go_mod("x/a"))
        .with_file("b/go.mod", "go 1.22\n")
        .with_file("c/go.mod", go_mod("x/c"));

    let err = discover(&tree, &GoModParser).unwrap_err();
    match err {
        DiscoveryError::Parse { path, .. } => assert_eq!(path, "b/go.mod"),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_parse_error_message_locates_the_problem() {
    let tree = MemoryTree::new().with_file("m/go.mod", "module a\nmodule b\n");
    let err = discover(&tree, &GoModParser).unwrap_err();
    assert_eq!(err.to_string(), "parsing m/go.mod: line 2: repeated module statement");
}
