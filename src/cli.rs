//! CLI definitions and entry point

use std::path::PathBuf;

use clap::Parser;

use crate::commands;
use modvanity::config::{Config, ConfigLayer, load_file};
use modvanity::core::services::PrefixPolicy;
use modvanity::output::OutputMode;

/// modvanity - Vanity import pages for Go modules
#[derive(Parser, Debug)]
#[command(
    name = "modvanity",
    version,
    about = "Generate HTML files with <meta name=\"go-import\"> tags for Go modules",
    long_about = "Generate HTML files with <meta name=\"go-import\"> tags as expected by go get.\n\n\
                  REPO is the git repository containing Go modules. IMPORT_PREFIX is the\n\
                  import path corresponding to the repository root.\n\n\
                  Example:\n  modvanity go.elastic.co/apm https://github.com/elastic/apm-agent-go"
)]
pub struct Cli {
    /// Import path corresponding to the repository root
    pub import_prefix: String,

    /// Git repository URL (or path to a local repository)
    pub repo: String,

    /// Branch to use (default: the remote's default branch)
    #[arg(short, long)]
    pub branch: Option<String>,

    /// Output directory for generated HTML files [default: html]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Redirect to pkg.go.dev documentation when visited in a browser [default: true]
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub redirect: Option<bool>,

    /// How module paths are matched against the import prefix: literal, segment
    #[arg(long, value_name = "POLICY")]
    pub prefix_match: Option<PrefixPolicy>,

    /// Read modules from this directory instead of the repository
    #[arg(long, value_name = "DIR")]
    pub source_dir: Option<PathBuf>,

    /// TOML file with default settings
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Resolve command-line options and the config file into one `Config`
    pub fn into_config(self) -> anyhow::Result<Config> {
        let file = match &self.config {
            Some(path) => load_file(path)?,
            None => ConfigLayer::default(),
        };
        let flags = ConfigLayer {
            branch: self.branch,
            output: self.output,
            redirect: self.redirect,
            prefix_match: self.prefix_match,
        };

        let mut config = Config::new(self.import_prefix, self.repo).with_layer(flags.or(file));
        config.source_dir = self.source_dir;
        config.verbose = self.verbose;
        config.output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };
        Ok(config)
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let config = cli.into_config()?;
    commands::generate(&config)
}
