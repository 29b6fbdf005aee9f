//! Run configuration
//!
//! Every caller-tunable setting ends up in one [`Config`] value. Settings
//! come from three layers, highest priority first: command-line options,
//! an optional TOML file, and built-in defaults.
//!
//! ```toml
//! branch = "main"
//! output = "public"
//! redirect = false
//! prefix_match = "segment"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::core::services::{PageSettings, PrefixPolicy};
use crate::output::OutputMode;

/// Default output directory
pub const DEFAULT_OUTPUT_DIR: &str = "html";

/// Errors that can occur when loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("reading {path}: {source}")]
    Read {
        /// Config file path
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid configuration
    #[error("parsing {path}: {source}")]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: toml::de::Error,
    },
}

/// One layer of optional settings (a config file, or the command line)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    /// Branch to snapshot
    pub branch: Option<String>,
    /// Output directory
    pub output: Option<PathBuf>,
    /// Redirect browsers to the documentation
    pub redirect: Option<bool>,
    /// Prefix matching policy
    pub prefix_match: Option<PrefixPolicy>,
}

impl ConfigLayer {
    /// Fill unset values in `self` from `lower`
    #[must_use]
    pub fn or(self, lower: Self) -> Self {
        Self {
            branch: self.branch.or(lower.branch),
            output: self.output.or(lower.output),
            redirect: self.redirect.or(lower.redirect),
            prefix_match: self.prefix_match.or(lower.prefix_match),
        }
    }
}

/// Load a configuration layer from a TOML file
pub fn load_file(path: &Path) -> Result<ConfigLayer, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Import path corresponding to the repository root
    pub import_prefix: String,
    /// Repository URL (or local repository path)
    pub repo: String,
    /// Branch to snapshot; `None` means the default branch
    pub branch: Option<String>,
    /// Output directory for generated pages
    pub output_dir: PathBuf,
    /// Redirect browsers to the documentation
    pub redirect: bool,
    /// Prefix matching policy
    pub prefix_policy: PrefixPolicy,
    /// Read modules from this directory instead of the repository
    pub source_dir: Option<PathBuf>,
    /// Debug logging
    pub verbose: bool,
    /// How the report is printed
    pub output_mode: OutputMode,
}

impl Config {
    /// Create a config with default settings
    #[must_use]
    pub fn new(import_prefix: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            import_prefix: import_prefix.into(),
            repo: repo.into(),
            branch: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            redirect: true,
            prefix_policy: PrefixPolicy::default(),
            source_dir: None,
            verbose: false,
            output_mode: OutputMode::default(),
        }
    }

    /// Apply a settings layer over the defaults
    #[must_use]
    pub fn with_layer(mut self, layer: ConfigLayer) -> Self {
        if let Some(branch) = layer.branch {
            self.branch = Some(branch);
        }
        if let Some(output) = layer.output {
            self.output_dir = output;
        }
        if let Some(redirect) = layer.redirect {
            self.redirect = redirect;
        }
        if let Some(policy) = layer.prefix_match {
            self.prefix_policy = policy;
        }
        self
    }

    /// Settings shared by every generated page
    #[must_use]
    pub fn page_settings(&self) -> PageSettings {
        PageSettings::new(self.import_prefix.clone(), self.repo.clone())
            .with_redirect(self.redirect)
            .with_prefix_policy(self.prefix_policy)
    }
}
