//! Rendered pages handed to post-render hooks.

use std::path::PathBuf;

/// A page whose final output is available for post-processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Path of the page, relative to the site source when known.
    pub path: PathBuf,
    /// Fully rendered output.
    pub output: String,
}

impl Page {
    /// Creates a page from its path and rendered output.
    pub fn new(path: impl Into<PathBuf>, output: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            output: output.into(),
        }
    }
}
