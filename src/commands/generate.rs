//! Generate vanity pages for a repository

use std::path::Path;

use anyhow::Context;

use modvanity::adapters::{DirectorySnapshot, FsPageSink, GitSnapshot, GoModParser};
use modvanity::config::Config;
use modvanity::core::ports::TreeSnapshot;
use modvanity::core::services;
use modvanity::output::GenerateSummary;

/// Snapshot the configured tree and write a page per matching module
pub fn generate(config: &Config) -> anyhow::Result<()> {
    let tree = open_tree(config)?;
    let mut sink = FsPageSink::new(&config.output_dir);

    let report = services::generate(&*tree, &GoModParser, &mut sink, &config.page_settings())
        .context("generating pages")?;

    GenerateSummary::new(sink.root().display().to_string(), report).render(config.output_mode);
    Ok(())
}

/// Pick the tree source: a plain directory, a local repository, or a clone
fn open_tree(config: &Config) -> anyhow::Result<Box<dyn TreeSnapshot>> {
    if let Some(dir) = &config.source_dir {
        let snapshot = DirectorySnapshot::new(dir)
            .with_context(|| format!("reading source directory {}", dir.display()))?;
        return Ok(Box::new(snapshot));
    }

    let local = Path::new(&config.repo);
    let snapshot = if local.is_dir() {
        GitSnapshot::open(local, config.branch.as_deref())?
    } else {
        GitSnapshot::clone(&config.repo, config.branch.as_deref())?
    };
    log::info!("using commit {}", snapshot.commit_id());
    Ok(Box::new(snapshot))
}
