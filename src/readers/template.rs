//! Loading code templates from the template directory.

use std::path::{Path, PathBuf};

use crate::config::TEMPLATE_EXTENSION;
use crate::errors::{FiddleError, Result};
use crate::io::FileCache;
use crate::model::Template;

/// Returns the path of a named template inside `dir`.
pub fn template_file(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.{}", name, TEMPLATE_EXTENSION))
}

/// Reads and splits the template `name` from `dir`.
///
/// Both an unreadable file and a file without a `////` line are errors.
pub fn load_template(files: &dyn FileCache, dir: &Path, name: &str) -> Result<Template> {
    let path = template_file(dir, name);
    tracing::debug!("Loading template {} from {}", name, path.display());

    let content = files.read(&path).map_err(|source| FiddleError::TemplateRead {
        path: path.clone(),
        source,
    })?;
    Template::parse(name, &content, &path)
}
