//! modvanity - Generate vanity import pages for the Go modules in a git repository
//!
//! This library finds every module declared in a source tree and renders,
//! for each one under a chosen import prefix, a static HTML page carrying a
//! `<meta name="go-import">` tag that points the `go` tool at the real
//! repository.
//!
//! # Examples
//!
//! ```
//! use modvanity::adapters::{GoModParser, MemorySink, MemoryTree};
//! use modvanity::core::services::{PageSettings, generate};
//!
//! let tree = MemoryTree::new()
//!     .with_file("go.mod", "module example.com/foo\n")
//!     .with_file("bar/go.mod", "module example.com/foo/bar\n");
//! let mut sink = MemorySink::new();
//! let settings = PageSettings::new("example.com/foo", "https://github.com/acme/foo");
//!
//! let report = generate(&tree, &GoModParser, &mut sink, &settings).unwrap();
//! assert_eq!(report.written.len(), 2);
//! assert!(sink.get("example.com/foo/bar/index.html").is_some());
//! ```

#![deny(unsafe_code)]
// Warn on all clippy lints in this crate
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
