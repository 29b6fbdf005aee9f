//! Page sink port
//!
//! Where rendered documents go. The core hands over a logical,
//! `/`-separated location; the sink decides what that means.

use std::io;

use crate::core::models::Document;

/// Destination for rendered pages
#[cfg_attr(test, mockall::automock)]
pub trait PageSink {
    /// Write a document at a logical location, replacing anything already there
    fn write(&mut self, location: &str, document: &Document) -> io::Result<()>;

    /// Describe where a logical location ends up (e.g., the file path)
    fn describe(&self, location: &str) -> String {
        location.to_string()
    }
}
