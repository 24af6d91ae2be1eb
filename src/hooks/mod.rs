//! Hooks run on pages after they have been fully rendered.

mod integration;

pub use integration::{
    api_code, append_scalafiddle_code, collect_template_names, insert_before_body_end,
    ScalaFiddleIntegration,
};

use std::path::Path;

use crate::config::SiteConfig;
use crate::errors::Result;
use crate::io::FileCache;
use crate::model::Page;

/// Read-only view of the site a hook runs against.
#[derive(Debug, Clone, Copy)]
pub struct HookContext<'a> {
    /// Site source directory.
    pub source: &'a Path,
    /// Site configuration.
    pub config: &'a SiteConfig,
    /// File access rooted at the site source.
    pub files: &'a dyn FileCache,
}

/// A hook that can rewrite a page's rendered output.
pub trait Hook: Send + Sync {
    /// Returns the name of this hook.
    fn name(&self) -> &str;

    /// Processes a page once its output is final.
    fn post_render(&self, page: &mut Page, ctx: &HookContext<'_>) -> Result<()>;
}

/// Registry of hooks.
#[derive(Default)]
pub struct HookRegistry {
    hooks: Vec<Box<dyn Hook>>,
}

impl std::fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.hooks.iter().map(|h| h.name()).collect();
        f.debug_struct("HookRegistry")
            .field("hooks", &names)
            .finish()
    }
}

impl HookRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Adds a hook to the registry.
    pub fn add<H: Hook + 'static>(&mut self, hook: H) {
        self.hooks.push(Box::new(hook));
    }

    /// Returns the number of registered hooks.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Returns true if no hooks are registered.
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Returns the names of registered hooks in run order.
    pub fn names(&self) -> Vec<&str> {
        self.hooks.iter().map(|h| h.name()).collect()
    }

    /// Runs all post-render hooks on a page, in registration order.
    ///
    /// Stops at the first failing hook; the page keeps the output of the hooks before it.
    pub fn run_post_render(&self, page: &mut Page, ctx: &HookContext<'_>) -> Result<()> {
        for hook in &self.hooks {
            hook.post_render(page, ctx)?;
        }
        Ok(())
    }
}
