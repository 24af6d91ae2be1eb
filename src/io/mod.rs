//! File access for templates and pages.

mod file_cache;

pub use file_cache::{FileCache, RealFileCache, VirtualFS};
