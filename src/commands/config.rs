//! Config command implementation.

use crate::errors::{FiddleError, Result};
use crate::interface::Site;

/// Executes the config command -- prints the effective `scalafiddle` section.
pub fn config(site: &Site) -> Result<()> {
    let toml_str = toml::to_string_pretty(site.config.fiddle())
        .map_err(|e| FiddleError::Other(format!("Failed to serialize config: {}", e)))?;
    print!("{}", toml_str);
    Ok(())
}
