//! The `scalafiddle` block tag.
//!
//! ````text
//! {% scalafiddle template="Intro" theme="dark" autorun %}
//! ```scala
//! println("hello")
//! ```
//! {% endscalafiddle %}
//! ````
//!
//! renders to a `<div data-scalafiddle="" …>` container holding the converted body.

use indexmap::IndexMap;

use crate::config::{data_attr, FiddleConfig, SiteConfig, AUTORUN_ATTR, FIDDLE_ATTR, TEMPLATE_ATTR};
use crate::convert::Converter;
use crate::errors::Result;
use crate::model::{Attribute, Flag, ParsedOptions};

/// Config keys that provide site-wide attribute defaults, in emission order.
const CONFIG_DEFAULTS: [&str; 4] = ["dependency", "scalaversion", "selector", "theme"];

/// Tag attributes that override defaults, in emission order.
const TAG_OVERRIDES: [Attribute; 7] = [
    Attribute::Dependency,
    Attribute::ScalaVersion,
    Attribute::Selector,
    Attribute::Prefix,
    Attribute::MinHeight,
    Attribute::Layout,
    Attribute::Theme,
];

/// What the host provides while a tag renders.
pub trait RenderContext {
    /// Converter for the tag body.
    fn converter(&self) -> &dyn Converter;

    /// Site configuration.
    fn site_config(&self) -> &SiteConfig;

    /// Renders the raw block body before conversion.
    ///
    /// Hosts with their own template language expand it here.
    fn render_block(&self, body: &str) -> Result<String> {
        Ok(body.to_string())
    }
}

/// Data attributes of a fiddle container. `None` marks an empty-valued attribute.
pub type DataAttributes = IndexMap<String, Option<String>>;

/// One occurrence of the fiddle block tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiddleTag {
    options: ParsedOptions,
    body: String,
}

impl FiddleTag {
    /// Tag name as written in page sources.
    pub const NAME: &'static str = "scalafiddle";

    /// Creates a tag from its raw argument string and enclosed body.
    pub fn new(args: &str, body: impl Into<String>) -> Self {
        Self {
            options: ParsedOptions::parse(args),
            body: body.into(),
        }
    }

    /// Returns the parsed options.
    pub fn options(&self) -> &ParsedOptions {
        &self.options
    }

    /// Returns the raw enclosed body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Renders the tag to `<div {attributes}>{html}</div>\n`.
    pub fn render(&self, ctx: &dyn RenderContext) -> Result<String> {
        let raw = ctx.render_block(&self.body)?;
        let content = ctx.converter().convert(&raw);
        let attributes = self.render_attributes(ctx.site_config().fiddle());
        Ok(format!("<div {}>{}</div>\n", attributes, content))
    }

    /// Computes the container's data attributes.
    ///
    /// Later layers override earlier ones but keep the position of the first insertion.
    pub fn data_attributes(&self, config: &FiddleConfig) -> DataAttributes {
        let mut attributes = DataAttributes::new();
        attributes.insert(FIDDLE_ATTR.to_string(), None);

        if let Some(template) = self.options.attribute(Attribute::Template) {
            attributes.insert(TEMPLATE_ATTR.to_string(), Some(template.to_string()));
        }

        for key in CONFIG_DEFAULTS {
            if let Some(value) = config.get(key) {
                attributes.insert(data_attr(key), Some(value.to_string()));
            }
        }

        for attr in TAG_OVERRIDES {
            if let Some(value) = self.options.attribute(attr) {
                attributes.insert(data_attr(attr.as_str()), Some(value.to_string()));
            }
        }

        if self.options.has_flag(Flag::Autorun) {
            attributes.insert(AUTORUN_ATTR.to_string(), None);
        }

        attributes
    }

    /// Formats the data attributes as they appear inside the opening tag.
    ///
    /// Values are wrapped in single quotes as-is; quotes inside them are not escaped.
    pub fn render_attributes(&self, config: &FiddleConfig) -> String {
        self.data_attributes(config)
            .iter()
            .map(|(key, value)| match value {
                Some(v) => format!("{}='{}'", key, v),
                None => format!("{}=\"\"", key),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
