//! In-memory trees and sinks
//!
//! Used by tests and by embedders that already hold file contents.

use std::collections::BTreeMap;
use std::io;

use crate::core::models::Document;
use crate::core::ports::{PageSink, TreeSnapshot};

/// A tree snapshot backed by a sorted map of path to contents
#[derive(Debug, Clone, Default)]
pub struct MemoryTree {
    files: BTreeMap<String, Vec<u8>>,
}

impl MemoryTree {
    /// Create an empty tree
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, replacing any previous contents
    #[must_use]
    pub fn with_file(mut self, path: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        self.insert(path, contents);
        self
    }

    /// Add a file, replacing any previous contents
    pub fn insert(&mut self, path: impl Into<String>, contents: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), contents.into());
    }
}

impl TreeSnapshot for MemoryTree {
    fn files(&self) -> io::Result<Vec<String>> {
        Ok(self.files.keys().cloned().collect())
    }

    fn read(&self, path: &str) -> io::Result<Vec<u8>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("no such file: {path}")))
    }
}

/// A page sink that keeps documents in memory, keyed by location
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pages: BTreeMap<String, Document>,
    writes: usize,
}

impl MemorySink {
    /// Create an empty sink
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The document written at `location`, if any
    #[must_use]
    pub fn get(&self, location: &str) -> Option<&Document> {
        self.pages.get(location)
    }

    /// Locations written so far, sorted
    #[must_use]
    pub fn locations(&self) -> Vec<&str> {
        self.pages.keys().map(String::as_str).collect()
    }

    /// Number of distinct locations written
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether nothing has been written
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Number of write calls, counting overwrites
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }
}

impl PageSink for MemorySink {
    fn write(&mut self, location: &str, document: &Document) -> io::Result<()> {
        self.writes += 1;
        self.pages.insert(location.to_string(), document.clone());
        Ok(())
    }
}
