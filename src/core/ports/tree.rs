//! Tree snapshot port
//!
//! Defines the read-only view of a source tree that discovery walks.

use std::io;

/// An immutable listing of the files in a source tree at one point in history
///
/// Paths are `/`-separated and relative to the tree root. Implementations
/// must enumerate in a stable order so generated output is reproducible.
#[cfg_attr(test, mockall::automock)]
pub trait TreeSnapshot {
    /// List every file in the tree, each exactly once
    fn files(&self) -> io::Result<Vec<String>>;

    /// Read the contents of a file by its tree path
    fn read(&self, path: &str) -> io::Result<Vec<u8>>;
}
