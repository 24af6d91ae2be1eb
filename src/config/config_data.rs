//! Configuration data structures.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

/// Site-wide configuration as supplied by the site generator.
///
/// Only the `scalafiddle` section is interpreted; every other key is kept
/// verbatim in `extra` and never modified.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Fiddle defaults and integration settings.
    #[serde(default)]
    pub scalafiddle: FiddleConfig,

    /// Remaining site settings.
    #[serde(default, flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl SiteConfig {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the fiddle section.
    pub fn fiddle(&self) -> &FiddleConfig {
        &self.scalafiddle
    }
}

/// The `scalafiddle` section of the site configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiddleConfig {
    /// Default library dependency for every fiddle.
    #[serde(
        default,
        deserialize_with = "scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub dependency: Option<String>,

    /// Default Scala version.
    #[serde(
        default,
        deserialize_with = "scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub scalaversion: Option<String>,

    /// Default CSS selector of the element fiddles render into.
    #[serde(
        default,
        deserialize_with = "scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub selector: Option<String>,

    /// Default editor theme.
    #[serde(
        default,
        deserialize_with = "scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub theme: Option<String>,

    /// Directory holding `.scala` templates, relative to the site source.
    #[serde(rename = "templateDir", default = "default_template_dir")]
    pub template_dir: String,

    /// Base URL the `integration.js` script is loaded from.
    #[serde(rename = "scalaFiddleUrl", default = "default_scala_fiddle_url")]
    pub scala_fiddle_url: String,
}

fn default_template_dir() -> String {
    "_scalafiddle".to_string()
}

fn default_scala_fiddle_url() -> String {
    "https://embed.scalafiddle.io/".to_string()
}

impl Default for FiddleConfig {
    fn default() -> Self {
        Self {
            dependency: None,
            scalaversion: None,
            selector: None,
            theme: None,
            template_dir: default_template_dir(),
            scala_fiddle_url: default_scala_fiddle_url(),
        }
    }
}

impl FiddleConfig {
    /// Looks up a fiddle default by its configuration key.
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "dependency" => self.dependency.as_deref(),
            "scalaversion" => self.scalaversion.as_deref(),
            "selector" => self.selector.as_deref(),
            "theme" => self.theme.as_deref(),
            "templateDir" => Some(&self.template_dir),
            "scalaFiddleUrl" => Some(&self.scala_fiddle_url),
            _ => None,
        }
    }

    /// Returns the template directory resolved against the site source.
    pub fn template_path(&self, site_source: &Path) -> std::path::PathBuf {
        site_source.join(&self.template_dir)
    }

    /// Returns the URL of the activation script.
    pub fn integration_script_url(&self) -> String {
        format!("{}integration.js", self.scala_fiddle_url)
    }
}

/// Config values written without quotes (`scalaversion: 2.12`) arrive as numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        Scalar::Str(s) => s,
        Scalar::Int(i) => i.to_string(),
        Scalar::Float(f) => f.to_string(),
        Scalar::Bool(b) => b.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FiddleConfig::default();
        assert_eq!(config.template_dir, "_scalafiddle");
        assert_eq!(config.scala_fiddle_url, "https://embed.scalafiddle.io/");
        assert!(config.dependency.is_none());
        assert_eq!(
            config.integration_script_url(),
            "https://embed.scalafiddle.io/integration.js"
        );
    }

    #[test]
    fn test_yaml_section() {
        let yaml = "
title: My Docs
scalafiddle:
  dependency: io.circe %%% circe-core % 0.9.0
  scalaversion: 2.12
  templateDir: docs/_fiddles
";
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        let fiddle = config.fiddle();
        assert_eq!(fiddle.dependency.as_deref(), Some("io.circe %%% circe-core % 0.9.0"));
        assert_eq!(fiddle.scalaversion.as_deref(), Some("2.12"));
        assert_eq!(fiddle.template_dir, "docs/_fiddles");
        assert_eq!(fiddle.scala_fiddle_url, "https://embed.scalafiddle.io/");
        assert_eq!(config.extra["title"], serde_json::json!("My Docs"));
    }

    #[test]
    fn test_toml_section() {
        let toml_str = r#"
[scalafiddle]
theme = "dark"
scalaFiddleUrl = "https://fiddle.example.org/"
"#;
        let config: SiteConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.fiddle().theme.as_deref(), Some("dark"));
        assert_eq!(
            config.fiddle().integration_script_url(),
            "https://fiddle.example.org/integration.js"
        );
    }

    #[test]
    fn test_missing_section() {
        let config: SiteConfig = serde_yaml::from_str("title: x").unwrap();
        assert_eq!(config.fiddle(), &FiddleConfig::default());
    }

    #[test]
    fn test_get() {
        let config = FiddleConfig {
            selector: Some(".fiddle".to_string()),
            ..FiddleConfig::default()
        };
        assert_eq!(config.get("selector"), Some(".fiddle"));
        assert_eq!(config.get("theme"), None);
        assert_eq!(config.get("templateDir"), Some("_scalafiddle"));
        assert_eq!(config.get("unknown"), None);
    }
}
