//! Domain models for modvanity
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`ModulePath`] - A module's canonical import path
//! - [`Declaration`] - What a declaration file declares
//! - [`PageModel`] - Render input for one vanity page
//! - [`Document`] - A rendered page

mod declaration;
mod module_path;
mod page;

pub use declaration::{Declaration, ParseError};
pub use module_path::{ModulePath, ModulePathError};
pub use page::{
    DOC_BASE_URL, Document, GoImport, INDEX_FILE, Page, PageModel, VCS_GIT, doc_url, page_location,
};
