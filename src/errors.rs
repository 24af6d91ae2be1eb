//! Error types for fiddle rendering and page integration.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for scalafiddle operations.
#[derive(Error, Debug)]
pub enum FiddleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A template file has no `////` line separating its pre and post regions.
    #[error("Template {path} is missing a //// marker")]
    MissingMarker { path: PathBuf },

    #[error("Cannot read template {path}: {source}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Other(String),
}

impl FiddleError {
    /// Returns true for errors caused by a broken template file.
    pub fn is_template_error(&self) -> bool {
        matches!(
            self,
            FiddleError::MissingMarker { .. } | FiddleError::TemplateRead { .. }
        )
    }
}

/// Result type alias for scalafiddle operations.
pub type Result<T> = std::result::Result<T, FiddleError>;
