//! Expansion of `{% scalafiddle %}` block tags in page sources.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::Result;
use crate::tag::{FiddleTag, RenderContext};

/// Opening tag, capturing its argument string.
static TAG_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{%-?\s*scalafiddle\b(?P<args>.*?)-?%\}").unwrap());

/// Closing tag.
static TAG_CLOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{%-?\s*endscalafiddle\s*-?%\}").unwrap());

/// A fiddle block found in a page source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagBlock {
    /// Byte range of the whole block, tags included.
    pub span: std::ops::Range<usize>,
    /// Raw argument string of the opening tag.
    pub args: String,
    /// Text between the opening and closing tags.
    pub body: String,
}

/// Finds every closed fiddle block in `source`, in order.
///
/// An opening tag without a closing tag ends the scan.
pub fn find_fiddle_tags(source: &str) -> Vec<TagBlock> {
    let mut blocks = Vec::new();
    let mut pos = 0;

    while let Some(open) = TAG_OPEN.captures_at(source, pos) {
        let Some(whole) = open.get(0) else {
            break;
        };
        let Some(close) = TAG_CLOSE.find_at(source, whole.end()) else {
            tracing::warn!(
                "Unclosed {} tag at line {}",
                FiddleTag::NAME,
                line_of(source, whole.start())
            );
            break;
        };

        blocks.push(TagBlock {
            span: whole.start()..close.end(),
            args: open["args"].to_string(),
            body: source[whole.end()..close.start()].to_string(),
        });
        pos = close.end();
    }

    blocks
}

/// 1-based line number of a byte offset.
fn line_of(source: &str, offset: usize) -> usize {
    source[..offset].matches('\n').count() + 1
}

/// Replaces every fiddle block in `source` with its rendered container.
///
/// Text outside the blocks is copied unchanged.
pub fn expand_fiddle_tags(source: &str, ctx: &dyn RenderContext) -> Result<String> {
    let blocks = find_fiddle_tags(source);
    if blocks.is_empty() {
        return Ok(source.to_string());
    }

    let mut output = String::with_capacity(source.len());
    let mut last = 0;
    for block in &blocks {
        output.push_str(&source[last..block.span.start]);
        let tag = FiddleTag::new(&block.args, block.body.as_str());
        output.push_str(&tag.render(ctx)?);
        last = block.span.end;
    }
    output.push_str(&source[last..]);

    tracing::debug!("Expanded {} fiddle tags", blocks.len());
    Ok(output)
}

/// Comment left in place of a rendered fiddle while the page is converted.
fn placeholder(index: usize) -> String {
    format!("<!--{}:{}-->", FiddleTag::NAME, index)
}

/// A fiddle block set aside during page conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedFiddle {
    /// The block as written in the source, tags included.
    pub source: String,
    /// The rendered container.
    pub html: String,
}

/// Renders every fiddle block and swaps it for a placeholder comment.
///
/// Returns the protected source and the set-aside blocks, in order. The
/// placeholders pass through markdown conversion as raw HTML, so the
/// containers are not re-parsed; [`restore_fiddle_tags`] puts them back.
pub fn protect_fiddle_tags(
    source: &str,
    ctx: &dyn RenderContext,
) -> Result<(String, Vec<ProtectedFiddle>)> {
    let blocks = find_fiddle_tags(source);
    let mut protected = String::with_capacity(source.len());
    let mut fiddles = Vec::with_capacity(blocks.len());
    let mut last = 0;
    for (index, block) in blocks.iter().enumerate() {
        protected.push_str(&source[last..block.span.start]);
        let tag = FiddleTag::new(&block.args, block.body.as_str());
        fiddles.push(ProtectedFiddle {
            source: source[block.span.clone()].to_string(),
            html: tag.render(ctx)?,
        });
        protected.push_str(&placeholder(index));
        last = block.span.end;
    }
    protected.push_str(&source[last..]);
    Ok((protected, fiddles))
}

/// Replaces the placeholders left by [`protect_fiddle_tags`].
///
/// A placeholder that came through as raw HTML becomes the rendered container.
/// One the converter escaped as text, e.g. inside a code block, becomes the
/// escaped block source the author wrote.
pub fn restore_fiddle_tags(output: &str, fiddles: &[ProtectedFiddle]) -> String {
    let mut result = output.to_string();
    for (index, fiddle) in fiddles.iter().enumerate() {
        let raw = placeholder(index);
        if result.contains(&raw) {
            result = result.replacen(&raw, &fiddle.html, 1);
        } else {
            let escaped = html_escape::encode_text(&raw);
            let text = html_escape::encode_text(&fiddle.source);
            result = result.replacen(&*escaped, &text, 1);
        }
    }
    result
}
