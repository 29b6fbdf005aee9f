//! Tests for the lax go.mod parser

use modvanity::adapters::GoModParser;
use modvanity::core::models::ParseError;
use modvanity::core::ports::DeclarationParser;

use crate::common::fixtures::GoModBuilder;

fn parse(source: &str) -> Result<String, ParseError> {
    GoModParser
        .parse("go.mod", source.as_bytes())
        .map(|d| d.module.to_string())
}

#[test]
fn test_file_name() {
    assert_eq!(GoModParser.file_name(), "go.mod");
}

#[test]
fn test_builder_output_parses() {
    let source = GoModBuilder::new("example.com/foo/v3")
        .require("golang.org/x/mod", "v0.17.0")
        .require("github.com/go-git/go-git/v5", "v5.12.0")
        .build();
    assert_eq!(parse(&source).unwrap(), "example.com/foo/v3");
}

#[test]
fn test_deprecated_module() {
    let source = GoModBuilder::new("example.com/old").deprecated("use example.com/new").build();
    let declaration = GoModParser.parse("go.mod", source.as_bytes()).unwrap();
    assert_eq!(declaration.deprecated.as_deref(), Some("use example.com/new"));
}

#[test]
fn test_unusual_but_valid_layouts() {
    assert_eq!(parse("   module    a/b   \n").unwrap(), "a/b");
    assert_eq!(parse("module a/b\r\ngo 1.22\r\n").unwrap(), "a/b");
    assert_eq!(parse("// leading comment\n\nmodule a/b // trailing\n").unwrap(), "a/b");
    assert_eq!(parse("go 1.22\nmodule \"a/b\"\n").unwrap(), "a/b");
    assert_eq!(parse("future_directive something\nmodule a/b\n").unwrap(), "a/b");
}

#[test]
fn test_replace_block_with_arrows() {
    let source = "module a/b\n\nreplace (\n\tx/y => ../y\n\tx/z v1.0.0 => x/z v1.1.0\n)\n";
    assert_eq!(parse(source).unwrap(), "a/b");
}

#[test]
fn test_errors() {
    assert_eq!(parse("go 1.22\n"), Err(ParseError::MissingModule));
    assert_eq!(parse("module a\nmodule a\n"), Err(ParseError::DuplicateModule { line: 2 }));
    assert_eq!(parse("module ``\n"), Err(ParseError::EmptyModulePath { line: 1 }));
    assert!(matches!(parse("module a\nrequire (\n"), Err(ParseError::Syntax { line: 2, .. })));
    assert!(matches!(parse("module `a\n"), Err(ParseError::Syntax { line: 1, .. })));
}
