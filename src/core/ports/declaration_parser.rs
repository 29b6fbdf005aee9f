//! Declaration parser port

use crate::core::models::{Declaration, ParseError};

/// Parses a module declaration file into a [`Declaration`]
#[cfg_attr(test, mockall::automock)]
pub trait DeclarationParser {
    /// Name of the files this parser understands (e.g., `go.mod`)
    fn file_name(&self) -> &'static str;

    /// Parse a declaration file's contents
    ///
    /// `path` is used for diagnostics only.
    fn parse(&self, path: &str, contents: &[u8]) -> Result<Declaration, ParseError>;
}
