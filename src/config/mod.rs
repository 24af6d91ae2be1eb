//! Configuration loading and management.

mod config_data;
mod markers;

use std::fs;
use std::path::{Path, PathBuf};

pub use config_data::{FiddleConfig, SiteConfig};
pub use markers::{
    data_attr, AUTORUN_ATTR, BODY_END_TAG, DATA_PREFIX, FIDDLE_ATTR, FIDDLE_MARKER,
    TEMPLATE_ATTR, TEMPLATE_EXTENSION, TEMPLATE_PATTERN, TEMPLATE_SPLIT,
};

use crate::errors::Result;

/// Standard site configuration file names to search for.
const CONFIG_FILES: &[&str] = &["_config.yml", "_config.yaml", "_config.toml"];

/// Finds the configuration file in the given directory or its parents.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for name in CONFIG_FILES {
            let candidate = current.join(name);
            if candidate.exists() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Reads configuration from a YAML or TOML file, chosen by extension.
pub fn read_config_file(path: &Path) -> Result<SiteConfig> {
    let content = fs::read_to_string(path)?;
    let config = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => toml::from_str(&content)?,
        _ => {
            // An empty YAML document deserializes to null
            if content.trim().is_empty() {
                SiteConfig::default()
            } else {
                serde_yaml::from_str(&content)?
            }
        }
    };
    tracing::debug!("Loaded site configuration from {}", path.display());
    Ok(config)
}

/// Reads configuration, searching from the given directory.
///
/// If no config file is found, returns the default configuration.
pub fn read_config(start_dir: &Path) -> Result<SiteConfig> {
    match find_config_file(start_dir) {
        Some(path) => read_config_file(&path),
        None => Ok(SiteConfig::default()),
    }
}

/// Reads configuration from a specific file, or returns default if file doesn't exist.
pub fn read_config_or_default(path: &Path) -> Result<SiteConfig> {
    if path.exists() {
        read_config_file(path)
    } else {
        Ok(SiteConfig::default())
    }
}
