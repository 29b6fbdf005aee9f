//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::ModulePath;
use crate::core::services::{GenerateReport, WrittenPage};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a generate run
#[derive(Debug, Serialize)]
pub struct GenerateSummary {
    /// Directory pages were written under
    pub output_dir: String,
    /// Pages written
    pub written: Vec<WrittenPage>,
    /// Modules outside the import prefix
    pub skipped: Vec<ModulePath>,
}

impl GenerateSummary {
    /// Summarize a report
    #[must_use]
    pub fn new(output_dir: impl Into<String>, report: GenerateReport) -> Self {
        Self {
            output_dir: output_dir.into(),
            written: report.written,
            skipped: report.skipped,
        }
    }

    /// Render the summary based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    /// Human-readable lines, without a trailing newline
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut lines: Vec<String> = self
            .written
            .iter()
            .map(|page| format!("{} {}", "wrote".green(), page.path))
            .collect();

        if self.written.is_empty() {
            lines.push(format!("No modules matched; nothing written to {}.", self.output_dir));
        } else {
            lines.push(format!(
                "\nGenerated {} page(s) in {}.",
                self.written.len(),
                self.output_dir
            ));
        }
        if !self.skipped.is_empty() {
            lines.push(format!(
                "{} {} module(s) outside the import prefix",
                "skipped".yellow(),
                self.skipped.len()
            ));
        }

        lines.join("\n")
    }

    fn render_human(&self) {
        println!("{}", self.to_human());
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
