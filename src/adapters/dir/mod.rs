//! Plain directory snapshots
//!
//! Implements `TreeSnapshot` over a directory on disk, for working copies
//! and unpacked archives that are not (or not only) git repositories.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::core::ports::TreeSnapshot;

/// Directory skipped during enumeration
const GIT_DIR: &str = ".git";

/// The files under a directory
#[derive(Debug, Clone)]
pub struct DirectorySnapshot {
    root: PathBuf,
}

impl DirectorySnapshot {
    /// Snapshot the directory at `root`
    ///
    /// # Errors
    ///
    /// Returns an error if `root` is not a directory.
    pub fn new(root: impl AsRef<Path>) -> io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("not a directory: {}", root.display()),
            ));
        }
        Ok(Self { root })
    }
}

impl TreeSnapshot for DirectorySnapshot {
    fn files(&self) -> io::Result<Vec<String>> {
        let mut files = Vec::new();

        let walker = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || entry.file_name() != GIT_DIR);

        for entry in walker {
            let entry = entry.map_err(io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry.path().strip_prefix(&self.root).map_err(io::Error::other)?;
            let segments: Vec<_> = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            files.push(segments.join("/"));
        }

        Ok(files)
    }

    fn read(&self, path: &str) -> io::Result<Vec<u8>> {
        let full = path.split('/').fold(self.root.clone(), |acc, segment| acc.join(segment));
        fs::read(full)
    }
}
