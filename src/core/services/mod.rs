//! Discovery and page synthesis services
//!
//! Pure logic over the port traits. Nothing here touches the network or
//! the filesystem directly.
//!
//! - `exclusion` - Which tree paths are declaration candidates
//! - `discover` - Collect declared module paths from a tree
//! - `prefix` - Import prefix matching policies
//! - `page_builder` - Module path to page model
//! - `renderer` - Page model to HTML
//! - `generate` - The full pass, from tree to sink

pub mod discover;
pub mod exclusion;
pub mod generate;
pub mod page_builder;
pub mod prefix;
pub mod renderer;

pub use discover::{DiscoveryError, discover};
pub use exclusion::{DECLARATION_FILE, ExclusionFilter, RESERVED_SEGMENTS, should_exclude};
pub use generate::{GenerateError, GenerateReport, WrittenPage, generate};
pub use page_builder::{PageSettings, build_page};
pub use prefix::PrefixPolicy;
pub use renderer::render;
