//! Page models and rendered documents
//!
//! A [`PageModel`] carries everything the renderer needs for one module.
//! A [`Page`] pairs it with the module and the logical location it is
//! written to.

use serde::Serialize;

use super::ModulePath;

/// Version control system advertised in every `go-import` tag
pub const VCS_GIT: &str = "git";

/// Base URL that module paths are appended to for documentation links
pub const DOC_BASE_URL: &str = "https://pkg.go.dev/";

/// File name of every generated page
pub const INDEX_FILE: &str = "index.html";

/// The three fields of a `<meta name="go-import">` tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoImport {
    /// Import path corresponding to the repository root
    pub import_prefix: String,
    /// Version control system (always `git`)
    pub vcs: String,
    /// Repository URL
    pub repo_root: String,
}

impl GoImport {
    /// The tag's `content` attribute: prefix, VCS and repository root
    #[must_use]
    pub fn content(&self) -> String {
        format!("{} {} {}", self.import_prefix, self.vcs, self.repo_root)
    }
}

/// Data needed to render one vanity import page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageModel {
    /// The `go-import` metadata
    pub go_import: GoImport,
    /// Documentation URL for the module
    pub doc_url: String,
    /// Whether browsers are redirected to the documentation
    pub redirect: bool,
}

/// A page to generate for one module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Module the page advertises
    pub module: ModulePath,
    /// Logical output location, `/`-separated and relative to the output root
    pub location: String,
    /// Render input
    pub model: PageModel,
}

/// Build the documentation URL for a module
#[must_use]
pub fn doc_url(module: &ModulePath) -> String {
    format!("{DOC_BASE_URL}{module}")
}

/// Logical output location for a module's page
///
/// e.g., `example.com/foo` -> `example.com/foo/index.html`
#[must_use]
pub fn page_location(module: &ModulePath) -> String {
    format!("{}/{INDEX_FILE}", module.as_str().trim_end_matches('/'))
}

/// A rendered HTML document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document(String);

impl Document {
    /// Wrap rendered markup
    #[must_use]
    pub const fn new(html: String) -> Self {
        Self(html)
    }

    /// The document text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The document bytes, as written to storage
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}
