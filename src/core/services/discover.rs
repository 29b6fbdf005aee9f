//! Module discovery
//!
//! Walks a tree snapshot, picks out declaration files and collects the
//! module paths they declare.

use std::collections::HashSet;
use std::io;

use thiserror::Error;

use crate::core::models::{ModulePath, ParseError};
use crate::core::ports::{DeclarationParser, TreeSnapshot};
use crate::core::services::exclusion::ExclusionFilter;

/// Errors that abort discovery
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The tree's file listing could not be produced
    #[error("listing files: {0}")]
    Enumerate(#[source] io::Error),

    /// An eligible file could not be read
    #[error("reading {path}: {source}")]
    Read {
        /// Tree path of the file
        path: String,
        /// Underlying cause
        #[source]
        source: io::Error,
    },

    /// An eligible file is not a valid declaration
    #[error("parsing {path}: {source}")]
    Parse {
        /// Tree path of the file
        path: String,
        /// Underlying cause
        #[source]
        source: ParseError,
    },
}

/// Discover every module declared in `tree`
///
/// Files are visited in the tree's enumeration order, which is also the
/// order of the result. The first read or parse failure aborts the whole
/// pass. Duplicate module paths are kept (and logged).
pub fn discover(
    tree: &dyn TreeSnapshot,
    parser: &dyn DeclarationParser,
) -> Result<Vec<ModulePath>, DiscoveryError> {
    let filter = ExclusionFilter::new(parser.file_name());
    let files = tree.files().map_err(DiscoveryError::Enumerate)?;

    let mut modules = Vec::new();
    let mut seen = HashSet::new();

    for path in files.iter().filter(|path| !filter.should_exclude(path)) {
        log::debug!("parsing {path}");

        let contents = tree.read(path).map_err(|source| DiscoveryError::Read {
            path: path.clone(),
            source,
        })?;
        let declaration = parser.parse(path, &contents).map_err(|source| DiscoveryError::Parse {
            path: path.clone(),
            source,
        })?;

        if let Some(notice) = &declaration.deprecated {
            log::info!("module {} is deprecated: {notice}", declaration.module);
        }
        if !seen.insert(declaration.module.clone()) {
            log::warn!("module {} declared again in {path}", declaration.module);
        }
        modules.push(declaration.module);
    }

    Ok(modules)
}
