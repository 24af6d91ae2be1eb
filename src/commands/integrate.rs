//! Integrate command implementation.

use std::fs;

use crate::errors::Result;
use crate::interface::{integrate_pages, Site};

/// Options for the integrate command.
#[derive(Debug, Clone, Default)]
pub struct IntegrateOptions {
    /// Glob patterns of rendered pages, relative to the site source.
    pub patterns: Vec<String>,
    /// Dry run - show what would be done without doing it.
    pub dry_run: bool,
}

/// Executes the integrate command.
///
/// Every page is processed before any is written, so a broken template
/// leaves all pages untouched.
pub fn integrate(site: &Site, options: IntegrateOptions) -> Result<()> {
    tracing::info!("Integrating fiddles...");

    let results = integrate_pages(site, &options.patterns)?;
    let changed: Vec<_> = results.into_iter().filter(|r| r.changed).collect();

    if changed.is_empty() {
        println!("No pages to update.");
        return Ok(());
    }

    if options.dry_run {
        println!("Would update {} pages:", changed.len());
        for result in &changed {
            println!("  {}", result.page.path.display());
        }
        return Ok(());
    }

    for result in &changed {
        fs::write(site.resolve_path(&result.page.path), &result.page.output)?;
    }

    println!("Updated {} pages.", changed.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const PAGE: &str = "<html><body><div data-scalafiddle=\"\"></div></body></html>";

    #[test]
    fn test_integrate_writes_pages() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("index.html"), PAGE).unwrap();
        let site = Site::default_for_dir(dir.path().to_path_buf());

        let options = IntegrateOptions {
            patterns: vec!["*.html".to_string()],
            dry_run: false,
        };
        integrate(&site, options).unwrap();

        let html = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(html.contains("integration.js'></script>\n</body>"));
    }

    #[test]
    fn test_integrate_twice_writes_once() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("_scalafiddle")).unwrap();
        fs::write(dir.path().join("_scalafiddle/Intro.scala"), "import x\n////\n").unwrap();
        fs::write(
            dir.path().join("index.html"),
            "<html><body><div data-scalafiddle=\"\" data-template=\"Intro\"></div></body></html>",
        )
        .unwrap();
        let site = Site::default_for_dir(dir.path().to_path_buf());
        let patterns = vec!["*.html".to_string()];

        integrate(&site, IntegrateOptions { patterns: patterns.clone(), dry_run: false }).unwrap();
        let first = fs::read_to_string(dir.path().join("index.html")).unwrap();

        let results = integrate_pages(&site, &patterns).unwrap();
        assert!(results.iter().all(|r| !r.changed));

        integrate(&site, IntegrateOptions { patterns, dry_run: false }).unwrap();
        let second = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert_eq!(second, first);
        assert_eq!(second.matches("integration.js").count(), 1);
        assert_eq!(second.matches("window.scalaFiddleTemplates").count(), 1);
    }

    #[test]
    fn test_integrate_dry_run() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("index.html"), PAGE).unwrap();
        let site = Site::default_for_dir(dir.path().to_path_buf());

        let options = IntegrateOptions {
            patterns: vec!["*.html".to_string()],
            dry_run: true,
        };
        integrate(&site, options).unwrap();

        let html = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert_eq!(html, PAGE);
    }
}
