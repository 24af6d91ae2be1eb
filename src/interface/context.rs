//! Site context for rendering and integrating pages.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::SiteConfig;
use crate::convert::{Converter, MarkdownConverter};
use crate::errors::Result;
use crate::hooks::{HookContext, HookRegistry, ScalaFiddleIntegration};
use crate::io::{FileCache, RealFileCache};
use crate::tag::RenderContext;

/// A site being rendered.
///
/// Holds the read-only configuration, the converter for tag bodies, file
/// access, and the post-render hooks.
#[derive(Debug)]
pub struct Site {
    /// Configuration.
    pub config: SiteConfig,
    /// Post-render hooks.
    pub hooks: HookRegistry,
    /// File access rooted at the source directory.
    pub file_cache: Arc<dyn FileCache>,
    /// Converter for markdown sources.
    pub converter: Box<dyn Converter>,
    /// Site source directory.
    pub source: PathBuf,
}

impl Site {
    /// Creates a site with the given configuration and the fiddle hook registered.
    ///
    /// A relative source directory is taken relative to the current directory.
    pub fn new(config: SiteConfig, source: PathBuf) -> Self {
        let source = if source.is_absolute() {
            source
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(&source))
                .unwrap_or(source)
        };
        let file_cache = Arc::new(RealFileCache::new(source.clone()));

        let mut hooks = HookRegistry::new();
        hooks.add(ScalaFiddleIntegration::new());

        Self {
            config,
            hooks,
            file_cache,
            converter: Box::new(MarkdownConverter::new()),
            source,
        }
    }

    /// Creates a site from a source directory, reading its configuration file if present.
    pub fn from_dir(source: PathBuf) -> Result<Self> {
        let config = crate::config::read_config(&source)?;
        Ok(Self::new(config, source))
    }

    #[cfg(test)]
    pub(crate) fn default_for_dir(source: PathBuf) -> Self {
        Self::new(SiteConfig::default(), source)
    }

    #[cfg(test)]
    pub(crate) fn with_file_cache(mut self, file_cache: Arc<dyn FileCache>) -> Self {
        self.file_cache = file_cache;
        self
    }

    #[cfg(test)]
    pub(crate) fn with_converter<C: Converter + 'static>(mut self, converter: C) -> Self {
        self.converter = Box::new(converter);
        self
    }

    /// Returns the view of this site that hooks run against.
    pub fn hook_context(&self) -> HookContext<'_> {
        HookContext {
            source: &self.source,
            config: &self.config,
            files: &*self.file_cache,
        }
    }

    /// Resolves a path relative to the source directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.source.join(path)
        }
    }
}

impl RenderContext for Site {
    fn converter(&self) -> &dyn Converter {
        self.converter.as_ref()
    }

    fn site_config(&self) -> &SiteConfig {
        &self.config
    }
}
