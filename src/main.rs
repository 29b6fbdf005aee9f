//! modvanity - Generate vanity import pages for the Go modules in a git repository

#![deny(unsafe_code)]

mod cli;
mod commands;

use std::process::ExitCode;

/// Main entry point for the modvanity CLI
fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("modvanity: {err:#}");
            ExitCode::FAILURE
        },
    }
}
