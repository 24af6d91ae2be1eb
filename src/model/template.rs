//! Code templates wrapped around the editable part of a fiddle.

use std::path::Path;

use crate::config::TEMPLATE_SPLIT;
use crate::errors::{FiddleError, Result};

/// A template split into the code before and after its `////` marker line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Template name, as referenced by `data-template`.
    pub name: String,
    /// Lines before the first marker, each keeping its terminator.
    pub pre: Vec<String>,
    /// Lines after the first marker, each keeping its terminator.
    pub post: Vec<String>,
}

impl Template {
    /// Splits template source at its first marker line.
    ///
    /// `path` is only used for error reporting.
    pub fn parse(name: &str, content: &str, path: &Path) -> Result<Self> {
        let lines: Vec<&str> = content.split_inclusive('\n').collect();
        let marker = lines
            .iter()
            .position(|l| l.starts_with(TEMPLATE_SPLIT))
            .ok_or_else(|| FiddleError::MissingMarker {
                path: path.to_path_buf(),
            })?;

        Ok(Self {
            name: name.to_string(),
            pre: lines[..marker].iter().map(|l| l.to_string()).collect(),
            post: lines[marker + 1..].iter().map(|l| l.to_string()).collect(),
        })
    }

    /// The pre region escaped for a single-quoted script string.
    pub fn escaped_pre(&self) -> String {
        escape_js_string(&self.pre)
    }

    /// The post region escaped for a single-quoted script string.
    pub fn escaped_post(&self) -> String {
        escape_js_string(&self.post)
    }

    /// Renders the `'name': { pre: '…', post: '…' }` entry of the template table.
    pub fn script_entry(&self) -> String {
        format!(
            "    '{}': {{ pre: '{}', post: '{}' }}",
            self.name,
            self.escaped_pre(),
            self.escaped_post()
        )
    }
}

/// Joins lines and escapes them for a single-quoted script literal.
///
/// Carriage returns are dropped, not escaped.
pub fn escape_js_string<S: AsRef<str>>(lines: &[S]) -> String {
    let mut out = String::new();
    for line in lines {
        for c in line.as_ref().chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\r' => {}
                '\t' => out.push_str("\\t"),
                '\'' => out.push_str("\\'"),
                _ => out.push(c),
            }
        }
    }
    out
}
