//! Filesystem page sink
//!
//! Implements `PageSink` by writing each document under an output root,
//! translating the logical `/`-separated location into a native path.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::models::Document;
use crate::core::ports::PageSink;

/// Writes pages under a directory on disk
#[derive(Debug, Clone)]
pub struct FsPageSink {
    root: PathBuf,
}

impl FsPageSink {
    /// Create a sink rooted at `root` (created on first write if missing)
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The output root
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Native path for a logical location
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the location has a `.` or `..` segment,
    /// so every page stays under the output root.
    pub fn path_for(&self, location: &str) -> io::Result<PathBuf> {
        let mut path = self.root.clone();
        for segment in location.split('/').filter(|segment| !segment.is_empty()) {
            if segment == "." || segment == ".." {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("location leaves the output root: {location}"),
                ));
            }
            path.push(segment);
        }
        Ok(path)
    }
}

impl PageSink for FsPageSink {
    fn write(&mut self, location: &str, document: &Document) -> io::Result<()> {
        let path = self.path_for(location)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, document.as_bytes())
    }

    fn describe(&self, location: &str) -> String {
        self.path_for(location)
            .map_or_else(|_| location.to_string(), |path| path.display().to_string())
    }
}
