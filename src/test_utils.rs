//! Shared test utilities.

use crate::config::{FiddleConfig, SiteConfig};
use crate::convert::{Converter, MarkdownConverter};
use crate::tag::RenderContext;

/// Render context with a markdown converter and a fixed configuration.
#[derive(Debug, Default)]
pub struct TestContext {
    pub config: SiteConfig,
    pub converter: MarkdownConverter,
}

impl TestContext {
    /// Creates a context with the given fiddle section.
    pub fn with_fiddle(fiddle: FiddleConfig) -> Self {
        Self {
            config: SiteConfig {
                scalafiddle: fiddle,
                ..SiteConfig::default()
            },
            converter: MarkdownConverter::new(),
        }
    }
}

impl RenderContext for TestContext {
    fn converter(&self) -> &dyn Converter {
        &self.converter
    }

    fn site_config(&self) -> &SiteConfig {
        &self.config
    }
}

/// Wraps a body fragment in a minimal HTML page.
pub fn html_page(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>t</title></head>\n<body>\n{}</body>\n</html>\n",
        body
    )
}
