//! Render command implementation.

use std::fs;
use std::path::PathBuf;

use crate::errors::Result;
use crate::interface::{render_page, Site};
use crate::readers::expand_fiddle_tags;

/// Options for the render command.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Markdown page to render, relative to the site source.
    pub file: PathBuf,
    /// Output file; stdout when absent.
    pub output: Option<PathBuf>,
    /// Only expand fiddle tags, leaving the rest of the source as-is.
    pub expand_only: bool,
}

/// Executes the render command.
pub fn render(site: &Site, options: RenderOptions) -> Result<()> {
    let html = if options.expand_only {
        let source = site.file_cache.read(&site.resolve_path(&options.file))?;
        expand_fiddle_tags(&source, site)?
    } else {
        render_page(site, &options.file)?.output
    };

    match options.output {
        Some(path) => {
            fs::write(&path, html)?;
            tracing::info!("Wrote {}", path.display());
        }
        None => print!("{}", html),
    }

    Ok(())
}
