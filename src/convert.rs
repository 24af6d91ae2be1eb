//! Markup converters used to turn tag bodies into HTML.

use pulldown_cmark::{html, Options, Parser};

/// Converts a block of source markup to HTML.
pub trait Converter: Send + Sync + std::fmt::Debug {
    /// Returns the name of this converter.
    fn name(&self) -> &str;

    /// Converts `input` to an HTML fragment.
    fn convert(&self, input: &str) -> String;
}

/// CommonMark converter with tables, strikethrough and footnotes.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownConverter;

impl MarkdownConverter {
    /// Creates a new markdown converter.
    pub fn new() -> Self {
        Self
    }

    fn options() -> Options {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_FOOTNOTES);
        options
    }
}

impl Converter for MarkdownConverter {
    fn name(&self) -> &str {
        "markdown"
    }

    fn convert(&self, input: &str) -> String {
        let parser = Parser::new_ext(input, Self::options());
        let mut output = String::with_capacity(input.len() * 3 / 2);
        html::push_html(&mut output, parser);
        output
    }
}

/// Passes input through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityConverter;

impl Converter for IdentityConverter {
    fn name(&self) -> &str {
        "identity"
    }

    fn convert(&self, input: &str) -> String {
        input.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_code_block() {
        let html = MarkdownConverter::new().convert("```scala\nval x = 1\n```\n");
        assert_eq!(
            html,
            "<pre><code class=\"language-scala\">val x = 1\n</code></pre>\n"
        );
    }

    #[test]
    fn test_markdown_paragraph() {
        let html = MarkdownConverter::new().convert("Hello *world*");
        assert_eq!(html, "<p>Hello <em>world</em></p>\n");
    }

    #[test]
    fn test_identity() {
        assert_eq!(IdentityConverter.convert("# raw"), "# raw");
    }
}
