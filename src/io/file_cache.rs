//! Page and template access behind a trait, so tests can run in memory.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Source of page and template contents.
pub trait FileCache: Send + Sync + std::fmt::Debug {
    /// Reads a whole file as text.
    fn read(&self, path: &Path) -> io::Result<String>;

    /// Lists the files matching `pattern`, relative to the site source.
    fn glob(&self, pattern: &str) -> io::Result<Vec<PathBuf>>;
}

/// Files on disk under a site source directory.
#[derive(Debug, Clone, Default)]
pub struct RealFileCache {
    /// Directory relative paths are taken from.
    pub base_dir: PathBuf,
}

impl RealFileCache {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Joins a relative path onto the base directory; absolute paths pass through.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

impl FileCache for RealFileCache {
    fn read(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(self.resolve(path))
    }

    fn glob(&self, pattern: &str) -> io::Result<Vec<PathBuf>> {
        let full_pattern = self.base_dir.join(pattern);
        let entries = glob::glob(&full_pattern.to_string_lossy())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        let mut pages = Vec::new();
        for path in entries.filter_map(|r| r.ok()).filter(|p| p.is_file()) {
            match path.strip_prefix(&self.base_dir) {
                Ok(relative) => pages.push(relative.to_path_buf()),
                Err(_) => pages.push(path),
            }
        }
        Ok(pages)
    }
}

/// In-memory site for tests and benchmarks.
#[derive(Debug, Clone, Default)]
pub struct VirtualFS {
    files: HashMap<PathBuf, String>,
}

impl VirtualFS {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a file.
    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }
}

impl FileCache for VirtualFS {
    fn read(&self, path: &Path) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )
        })
    }

    /// Matches are sorted, unlike on disk.
    fn glob(&self, pattern: &str) -> io::Result<Vec<PathBuf>> {
        let pattern = glob::Pattern::new(pattern)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        let mut matches: Vec<PathBuf> = self
            .files
            .keys()
            .filter(|p| pattern.matches_path(p))
            .cloned()
            .collect();
        matches.sort();
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_virtual_fs_read() {
        let mut vfs = VirtualFS::new();
        vfs.add_file("_scalafiddle/Intro.scala", "////\n");

        let content = vfs.read(Path::new("_scalafiddle/Intro.scala")).unwrap();
        assert_eq!(content, "////\n");

        vfs.add_file("_scalafiddle/Intro.scala", "a\n////\n");
        let content = vfs.read(Path::new("_scalafiddle/Intro.scala")).unwrap();
        assert_eq!(content, "a\n////\n");

        let err = vfs.read(Path::new("_scalafiddle/Other.scala")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("Other.scala"));
    }

    #[test]
    fn test_virtual_fs_glob() {
        let mut vfs = VirtualFS::new();
        vfs.add_file("_site/index.html", "<html></html>");
        vfs.add_file("_site/docs.html", "<html></html>");
        vfs.add_file("index.md", "# Index");

        let html = vfs.glob("_site/*.html").unwrap();
        assert_eq!(
            html,
            vec![PathBuf::from("_site/docs.html"), PathBuf::from("_site/index.html")]
        );
    }

    #[test]
    fn test_virtual_fs_bad_pattern() {
        let err = VirtualFS::new().glob("_site/[.html").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_real_file_cache_read() {
        let dir = tempdir().unwrap();
        let cache = RealFileCache::new(dir.path().to_path_buf());
        fs::write(dir.path().join("page.html"), "content").unwrap();

        assert_eq!(cache.read(Path::new("page.html")).unwrap(), "content");
        assert_eq!(cache.read(&dir.path().join("page.html")).unwrap(), "content");
        assert!(cache.read(Path::new("missing.html")).is_err());
    }

    #[test]
    fn test_real_file_cache_glob() {
        let dir = tempdir().unwrap();
        let cache = RealFileCache::new(dir.path().to_path_buf());

        fs::create_dir_all(dir.path().join("_site/nested.html")).unwrap();
        fs::write(dir.path().join("_site/a.html"), "a").unwrap();
        fs::write(dir.path().join("_site/b.html"), "b").unwrap();
        fs::write(dir.path().join("c.md"), "c").unwrap();

        let mut html = cache.glob("_site/*.html").unwrap();
        html.sort();
        assert_eq!(
            html,
            vec![PathBuf::from("_site/a.html"), PathBuf::from("_site/b.html")]
        );
    }
}
