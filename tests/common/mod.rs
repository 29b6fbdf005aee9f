//! Common test utilities shared across test types
//!
//! - `fixtures.rs` - go.mod builders and sample trees
//! - `git_repo.rs` - Temporary git repository helper

pub mod git_repo;
