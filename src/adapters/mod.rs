//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `git/` - Commit trees from cloned or local repositories
//! - `dir/` - Plain directory trees
//! - `memory/` - In-memory trees and sinks
//! - `file/` - Filesystem page sink
//! - `gomod/` - Lax `go.mod` declaration parser

pub mod dir;
pub mod file;
pub mod git;
pub mod gomod;
pub mod memory;

pub use dir::DirectorySnapshot;
pub use file::FsPageSink;
pub use git::GitSnapshot;
pub use gomod::GoModParser;
pub use memory::{MemorySink, MemoryTree};
