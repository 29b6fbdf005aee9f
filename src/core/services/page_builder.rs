//! Page model builder
//!
//! Turns a discovered module into the page that advertises it, or skips it
//! when it falls outside the import prefix.

use crate::core::models::{GoImport, ModulePath, Page, PageModel, VCS_GIT, doc_url, page_location};
use crate::core::services::prefix::PrefixPolicy;

/// Caller-chosen settings shared by every page of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSettings {
    /// Import path corresponding to the repository root
    pub import_prefix: String,
    /// Repository URL advertised in the `go-import` tag
    pub repo_root: String,
    /// Redirect browsers to the module documentation
    pub redirect: bool,
    /// How modules are matched against `import_prefix`
    pub prefix_policy: PrefixPolicy,
}

impl PageSettings {
    /// Settings with redirects on and literal prefix matching
    #[must_use]
    pub fn new(import_prefix: impl Into<String>, repo_root: impl Into<String>) -> Self {
        Self {
            import_prefix: import_prefix.into(),
            repo_root: repo_root.into(),
            redirect: true,
            prefix_policy: PrefixPolicy::default(),
        }
    }

    /// Set whether pages redirect to the documentation
    #[must_use]
    pub fn with_redirect(mut self, redirect: bool) -> Self {
        self.redirect = redirect;
        self
    }

    /// Set the prefix matching policy
    #[must_use]
    pub fn with_prefix_policy(mut self, prefix_policy: PrefixPolicy) -> Self {
        self.prefix_policy = prefix_policy;
        self
    }
}

/// Build the page for `module`, or `None` if it is outside the import prefix
#[must_use]
pub fn build_page(module: &ModulePath, settings: &PageSettings) -> Option<Page> {
    if !settings.prefix_policy.matches(module.as_str(), &settings.import_prefix) {
        return None;
    }

    Some(Page {
        module: module.clone(),
        location: page_location(module),
        model: PageModel {
            go_import: GoImport {
                import_prefix: settings.import_prefix.clone(),
                vcs: VCS_GIT.to_string(),
                repo_root: settings.repo_root.clone(),
            },
            doc_url: doc_url(module),
            redirect: settings.redirect,
        },
    })
}
