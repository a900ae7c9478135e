//! Site content: profile plus project list, optionally loaded from a file.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{default_projects, Profile, Project};

/// Errors that can occur while loading a content file.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse TOML content: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse YAML content: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON content: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything the pages display. Read-only after startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub profile: Profile,
    pub projects: Vec<Project>,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            projects: default_projects(),
        }
    }
}

impl SiteContent {
    /// Load content from a TOML, YAML or JSON file, chosen by extension.
    ///
    /// A missing file yields the built-in content; a malformed file is an error.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No content file at {}, using built-in content", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ContentError::Io {
                    path: path.display().to_string(),
                    source: e,
                })
            }
        };

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");
        let content = match ext {
            "yaml" | "yml" => serde_yaml::from_str(&contents)?,
            "json" => serde_json::from_str(&contents)?,
            _ => toml::from_str(&contents)?,
        };

        tracing::info!("Loaded site content from {}", path.display());
        Ok(content)
    }
}
