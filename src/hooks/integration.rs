//! Injects the fiddle activation script into rendered pages.

use std::collections::HashSet;
use std::path::Path;

use crate::config::{FiddleConfig, BODY_END_TAG, FIDDLE_MARKER, TEMPLATE_PATTERN};
use crate::errors::Result;
use crate::io::FileCache;
use crate::model::{Page, Template};
use crate::readers::load_template;

use super::{Hook, HookContext};

/// Post-render hook that activates the fiddles on a page.
///
/// Pages without a fiddle container are left untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalaFiddleIntegration;

impl ScalaFiddleIntegration {
    /// Creates a new integration hook.
    pub fn new() -> Self {
        Self
    }
}

impl Hook for ScalaFiddleIntegration {
    fn name(&self) -> &str {
        "scalafiddle"
    }

    fn post_render(&self, page: &mut Page, ctx: &HookContext<'_>) -> Result<()> {
        if append_scalafiddle_code(&mut page.output, ctx.source, ctx.config.fiddle(), ctx.files)? {
            tracing::info!("Activated fiddles in {}", page.path.display());
        }
        Ok(())
    }
}

/// Inserts the activation code into `output`.
///
/// Returns true if the output was changed. On error the output is left as it was.
pub fn append_scalafiddle_code(
    output: &mut String,
    site_source: &Path,
    config: &FiddleConfig,
    files: &dyn FileCache,
) -> Result<bool> {
    let code = api_code(output, site_source, config, files)?;
    if code.is_empty() {
        return Ok(false);
    }
    insert_before_body_end(output, &code);
    Ok(true)
}

/// Names referenced by fiddle containers, in document order, duplicates included.
pub fn collect_template_names(output: &str) -> Vec<String> {
    TEMPLATE_PATTERN
        .captures_iter(output)
        .map(|caps| caps["name"].to_string())
        .collect()
}

/// Builds the script blocks for a page.
///
/// Returns an empty string if the page has no fiddles or already carries the
/// activation script.
pub fn api_code(
    output: &str,
    site_source: &Path,
    config: &FiddleConfig,
    files: &dyn FileCache,
) -> Result<String> {
    let mut result = String::new();
    if !output.contains(FIDDLE_MARKER.as_str()) {
        return Ok(result);
    }

    let script_tag = format!("<script defer src='{}'></script>", config.integration_script_url());
    if output.contains(&script_tag) {
        tracing::debug!("Activation script already present");
        return Ok(result);
    }

    let names = collect_template_names(output);
    if !names.is_empty() {
        let dir = config.template_path(site_source);
        let mut seen = HashSet::new();
        let mut templates: Vec<Template> = Vec::new();
        for name in &names {
            if !seen.insert(name.as_str()) {
                tracing::debug!("Template {} referenced more than once", name);
                continue;
            }
            templates.push(load_template(files, &dir, name)?);
        }

        let entries: Vec<String> = templates.iter().map(Template::script_entry).collect();
        result.push_str("\n<script>\n  window.scalaFiddleTemplates = {\n");
        result.push_str(&entries.join(",\n"));
        result.push_str("\n  }\n</script>\n");
    }

    result.push('\n');
    result.push_str(&script_tag);
    result.push('\n');
    Ok(result)
}

/// Splices `code` in before the first `</body>`, or prepends it when there is none.
pub fn insert_before_body_end(output: &mut String, code: &str) {
    match output.find(BODY_END_TAG) {
        Some(location) => {
            tracing::debug!("Inserting activation code at byte {}", location);
            output.insert_str(location, code);
        }
        None => output.insert_str(0, code),
    }
}
