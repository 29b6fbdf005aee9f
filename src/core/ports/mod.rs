//! Port traits (interfaces) for external collaborators
//!
//! These traits define the boundaries between the discovery and page
//! synthesis logic and the outside world (version control, declaration
//! file formats, storage).
//!
//! Implementations live in the `adapters` module.

mod declaration_parser;
mod page_sink;
mod tree;

pub use declaration_parser::DeclarationParser;
pub use page_sink::PageSink;
pub use tree::TreeSnapshot;

#[cfg(test)]
pub use declaration_parser::MockDeclarationParser;
#[cfg(test)]
pub use page_sink::MockPageSink;
#[cfg(test)]
pub use tree::MockTreeSnapshot;
