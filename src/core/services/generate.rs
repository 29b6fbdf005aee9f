//! Page generation
//!
//! Runs the whole pass: discover modules, filter by prefix, build, render
//! and hand each page to a sink. Nothing is written until discovery has
//! succeeded, and the first write failure stops the run.

use std::io;

use serde::Serialize;
use thiserror::Error;

use crate::core::models::ModulePath;
use crate::core::ports::{DeclarationParser, PageSink, TreeSnapshot};
use crate::core::services::discover::{DiscoveryError, discover};
use crate::core::services::page_builder::{PageSettings, build_page};
use crate::core::services::renderer::render;

/// Errors that abort generation
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Module discovery failed
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    /// A page could not be written
    #[error("writing {location}: {source}")]
    Write {
        /// Where the page was going
        location: String,
        /// Underlying cause
        #[source]
        source: io::Error,
    },
}

/// A page that was written
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenPage {
    /// Module the page advertises
    pub module: ModulePath,
    /// Where the sink put it
    pub path: String,
}

/// Outcome of a generation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerateReport {
    /// Pages written, in discovery order
    pub written: Vec<WrittenPage>,
    /// Modules outside the import prefix
    pub skipped: Vec<ModulePath>,
}

/// Generate a page for every module in `tree` under the import prefix
pub fn generate(
    tree: &dyn TreeSnapshot,
    parser: &dyn DeclarationParser,
    sink: &mut dyn PageSink,
    settings: &PageSettings,
) -> Result<GenerateReport, GenerateError> {
    let modules = discover(tree, parser)?;
    log::info!("found {} module(s)", modules.len());

    let mut report = GenerateReport::default();
    for module in modules {
        let Some(page) = build_page(&module, settings) else {
            log::debug!(
                "ignoring module {module:?}, does not match prefix {:?}",
                settings.import_prefix
            );
            report.skipped.push(module);
            continue;
        };

        let document = render(&page.model);
        let path = sink.describe(&page.location);
        log::debug!("writing file {path}");
        sink.write(&page.location, &document).map_err(|source| GenerateError::Write {
            location: path.clone(),
            source,
        })?;

        report.written.push(WrittenPage {
            module: page.module,
            path,
        });
    }

    Ok(report)
}
