//! Reconciler configuration
//!
//! Loaded from an optional TOML file. Every field has a default, so an
//! empty file and no file behave the same:
//!
//! ```toml
//! resource_extensions = ["cer", "pem"]
//! resource_groups = ["Resources"]
//! match_mode = "exact"
//! ```

use serde::{Deserialize, Serialize};
use xcproj_fs::{NormalizedPath, io};

use crate::error::{Error, Result};
use crate::reconcile::{FileRole, MatchMode};

fn default_resource_extensions() -> Vec<String> {
    vec!["cer".to_string(), "pem".to_string()]
}

fn default_resource_groups() -> Vec<String> {
    vec!["Resources".to_string()]
}

/// Settings that steer how files are matched and which phase they land in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileConfig {
    /// Extensions (with or without the leading dot) copied as resources
    #[serde(default = "default_resource_extensions")]
    pub resource_extensions: Vec<String>,

    /// Top-level group names whose files are copied as resources
    #[serde(default = "default_resource_groups")]
    pub resource_groups: Vec<String>,

    /// How existing file references are recognised
    #[serde(default)]
    pub match_mode: MatchMode,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            resource_extensions: default_resource_extensions(),
            resource_groups: default_resource_groups(),
            match_mode: MatchMode::default(),
        }
    }
}

impl ReconcileConfig {
    /// Parse configuration from TOML content
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let content = io::read_text(path)?;
        let config = Self::parse(&content).map_err(|e| Error::ConfigParse {
            path: path.to_native(),
            message: e.to_string(),
        })?;
        tracing::debug!(path = %path, ?config, "loaded reconcile config");
        Ok(config)
    }

    /// Load from `path` when given, otherwise use defaults.
    pub fn load_or_default(path: Option<&NormalizedPath>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Pick the build phase role for a file placed under `group_path`.
    ///
    /// Resource extensions win; otherwise files whose top-level group is a
    /// resource group are resources; everything else is compiled.
    pub fn role_for(&self, file: &NormalizedPath, group_path: &[&str]) -> FileRole {
        let by_extension = file.extension().is_some_and(|ext| {
            self.resource_extensions
                .iter()
                .any(|candidate| candidate.trim_start_matches('.').eq_ignore_ascii_case(ext))
        });
        let by_group = group_path
            .first()
            .is_some_and(|top| self.resource_groups.iter().any(|g| g == top));

        if by_extension || by_group {
            FileRole::Resource
        } else {
            FileRole::CompileSource
        }
    }
}
