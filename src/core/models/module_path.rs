//! Canonical module import paths

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur when constructing a module path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModulePathError {
    /// Module path was empty
    #[error("empty module path")]
    Empty,
}

/// A module's canonical import path, as declared in its `go.mod`
///
/// Always non-empty. No other validation is applied: paths are taken as
/// the declaration file states them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ModulePath(String);

impl ModulePath {
    /// Create a module path, rejecting the empty string
    pub fn new(path: impl Into<String>) -> Result<Self, ModulePathError> {
        let path = path.into();
        if path.is_empty() {
            return Err(ModulePathError::Empty);
        }
        Ok(Self(path))
    }

    /// The path as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
