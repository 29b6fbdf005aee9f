//! Core logic for modvanity
//!
//! Discovery and page synthesis with no I/O dependencies.
//! All external interactions go through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`ModulePath`, `PageModel`, `Document`)
//! - `services/` - Discovery, filtering, building and rendering
//! - `ports/` - Trait definitions for trees, parsers and sinks

pub mod models;
pub mod ports;
pub mod services;
