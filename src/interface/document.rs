//! Page pipeline: tag expansion, conversion and post-render hooks.

use std::path::{Path, PathBuf};

use crate::errors::{FiddleError, Result};
use crate::model::Page;
use crate::readers::{protect_fiddle_tags, restore_fiddle_tags};
use crate::tag::RenderContext;

use super::context::Site;

/// A page after its post-render hooks ran.
#[derive(Debug, Clone)]
pub struct ProcessedPage {
    /// The page with its final output.
    pub page: Page,
    /// Whether the hooks changed the output.
    pub changed: bool,
}

/// Renders a markdown source to a finished page.
///
/// Fiddle tags are rendered first and kept out of the page conversion, then
/// the post-render hooks run on the result.
pub fn render_source(site: &Site, path: &Path, source: &str) -> Result<Page> {
    let (protected, fiddles) = protect_fiddle_tags(source, site)?;
    let converted = site.converter().convert(&protected);
    let mut page = Page::new(path, restore_fiddle_tags(&converted, &fiddles));
    site.hooks.run_post_render(&mut page, &site.hook_context())?;
    Ok(page)
}

/// Reads and renders a markdown page.
pub fn render_page(site: &Site, path: &Path) -> Result<Page> {
    let source = site.file_cache.read(&site.resolve_path(path))?;
    tracing::info!("Rendering {}", path.display());
    render_source(site, path, &source)
}

/// Runs the post-render hooks on an already rendered page.
pub fn integrate_page(site: &Site, path: &Path) -> Result<ProcessedPage> {
    let output = site.file_cache.read(&site.resolve_path(path))?;
    let mut page = Page::new(path, output.clone());
    site.hooks.run_post_render(&mut page, &site.hook_context())?;
    let changed = page.output != output;
    Ok(ProcessedPage { page, changed })
}

/// Lists rendered pages matching glob patterns relative to the site source.
///
/// Each pattern must match at least one file.
pub fn find_pages(site: &Site, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut pages = Vec::new();
    for pattern in patterns {
        let matched = site.file_cache.glob(pattern)?;
        if matched.is_empty() {
            return Err(FiddleError::Config(format!(
                "Pattern '{}' matched no pages",
                pattern
            )));
        }
        pages.extend(matched);
    }
    pages.sort();
    pages.dedup();
    Ok(pages)
}

/// Runs the post-render hooks on every page matching `patterns`.
///
/// Fails on the first page whose hooks fail; no page is written here.
pub fn integrate_pages(site: &Site, patterns: &[String]) -> Result<Vec<ProcessedPage>> {
    find_pages(site, patterns)?
        .iter()
        .map(|path| integrate_page(site, path))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::html_page;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn site_with_template() -> (TempDir, Site) {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("_scalafiddle")).unwrap();
        fs::write(
            dir.path().join("_scalafiddle/Intro.scala"),
            "import io.circe._\n////\n",
        )
        .unwrap();
        let site = Site::default_for_dir(dir.path().to_path_buf());
        (dir, site)
    }

    #[test]
    fn test_render_source_full_pipeline() {
        let (_dir, site) = site_with_template();
        let source = "# Decoding\n\n{% scalafiddle template=\"Intro\" %}\n```scala\nval x = 1\n```\n{% endscalafiddle %}\n";

        let page = render_source(&site, Path::new("decoding.md"), source).unwrap();
        assert!(page.output.starts_with("\n<script>\n  window.scalaFiddleTemplates"));
        assert!(page.output.contains("'Intro': { pre: 'import io.circe._\\n', post: '' }"));
        assert!(page.output.contains("<h1>Decoding</h1>"));
        assert!(page
            .output
            .contains("<div data-scalafiddle=\"\" data-template='Intro'><pre><code class=\"language-scala\">val x = 1\n</code></pre>\n</div>"));
    }

    #[test]
    fn test_render_source_keeps_blank_lines_in_fiddle() {
        let (_dir, site) = site_with_template();
        let source = "{% scalafiddle %}\n```scala\nval a = 1\n\n    val b = 2\n```\n{% endscalafiddle %}\n";

        let page = render_source(&site, Path::new("blank.md"), source).unwrap();
        assert!(page
            .output
            .contains("<code class=\"language-scala\">val a = 1\n\n    val b = 2\n</code>"));
    }

    #[test]
    fn test_render_source_tag_inside_code_fence() {
        let (_dir, site) = site_with_template();
        let source = "```\n{% scalafiddle %}x{% endscalafiddle %}\n```\n";

        let page = render_source(&site, Path::new("fence.md"), source).unwrap();
        assert_eq!(
            page.output,
            "<pre><code>{% scalafiddle %}x{% endscalafiddle %}\n</code></pre>\n"
        );
    }

    #[test]
    fn test_render_page_without_fiddles() {
        let (dir, site) = site_with_template();
        fs::write(dir.path().join("index.md"), "Hello").unwrap();

        let page = render_page(&site, Path::new("index.md")).unwrap();
        assert_eq!(page.output, "<p>Hello</p>\n");
        assert_eq!(page.path, PathBuf::from("index.md"));
    }

    #[test]
    fn test_integrate_page() {
        let (dir, site) = site_with_template();
        fs::create_dir(dir.path().join("_site")).unwrap();
        fs::write(
            dir.path().join("_site/a.html"),
            html_page("<div data-scalafiddle=\"\" data-template=\"Intro\"></div>\n"),
        )
        .unwrap();
        fs::write(dir.path().join("_site/b.html"), html_page("<p>plain</p>\n")).unwrap();

        let results = integrate_pages(&site, &["_site/*.html".to_string()]).unwrap();
        assert_eq!(results.len(), 2);
        assert!(results[0].changed);
        assert!(results[0].page.output.contains("integration.js'></script>\n</body>"));
        assert!(!results[1].changed);
    }

    #[test]
    fn test_integrate_missing_marker_fails() {
        let (dir, site) = site_with_template();
        fs::write(dir.path().join("_scalafiddle/Broken.scala"), "no marker\n").unwrap();
        fs::write(
            dir.path().join("page.html"),
            "<div data-scalafiddle=\"\" data-template=\"Broken\"></div>",
        )
        .unwrap();

        let err = integrate_page(&site, Path::new("page.html")).unwrap_err();
        assert!(err.is_template_error());
    }

    #[test]
    fn test_find_pages_no_match() {
        let (_dir, site) = site_with_template();
        let err = find_pages(&site, &["_site/*.html".to_string()]).unwrap_err();
        assert!(matches!(err, FiddleError::Config(_)));
    }
}
