//! Module declarations and their parse errors
//!
//! A declaration is what a parser recovers from a module declaration file.
//! Only the module path matters for page generation.

use thiserror::Error;

use super::ModulePath;

/// Errors that can occur when parsing a declaration file
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// File contents were not valid UTF-8
    #[error("file is not valid UTF-8")]
    InvalidUtf8,

    /// Malformed syntax at the given (1-indexed) line
    #[error("line {line}: {message}")]
    Syntax {
        /// Line number (1-indexed)
        line: usize,
        /// What went wrong
        message: String,
    },

    /// No module directive was found
    #[error("no module directive found")]
    MissingModule,

    /// A second module directive was found
    #[error("line {line}: repeated module statement")]
    DuplicateModule {
        /// Line number of the repeated directive (1-indexed)
        line: usize,
    },

    /// The module directive named an empty path
    #[error("line {line}: empty module path")]
    EmptyModulePath {
        /// Line number of the module directive (1-indexed)
        line: usize,
    },
}

impl ParseError {
    /// Create a syntax error at a line
    #[must_use]
    pub fn syntax(line: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            line,
            message: message.into(),
        }
    }
}

/// A parsed module declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// The declared module path
    pub module: ModulePath,

    /// Deprecation notice attached to the module directive, if any
    pub deprecated: Option<String>,
}

impl Declaration {
    /// Create a declaration for a module with no deprecation notice
    #[must_use]
    pub const fn new(module: ModulePath) -> Self {
        Self {
            module,
            deprecated: None,
        }
    }
}
