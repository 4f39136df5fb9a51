use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::catalogue::{Category, Pattern};
use crate::error::{PatternError, Result};

/// Environment variable naming a catalogue config file.
pub const CONFIG_ENV: &str = "DESIGN_PATTERNS_CONFIG";

/// Settings for the `patterns` binary.
///
/// ```toml
/// color = false
/// headings = true
/// patterns = ["observer", "state"]
/// categories = ["structural"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogueConfig {
    pub color: bool,
    pub headings: bool,
    /// Patterns to run by name. Empty means every pattern.
    pub patterns: Vec<String>,
    /// Restrict runs to these categories. Empty means no restriction.
    pub categories: Vec<Category>,
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        Self {
            color: true,
            headings: true,
            patterns: Vec::new(),
            categories: Vec::new(),
        }
    }
}

impl CatalogueConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| PatternError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded catalogue config");
        Ok(config)
    }

    /// Load from `path` when given, otherwise fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Resolve the configured names and categories into patterns, in
    /// catalogue order when no names are given.
    pub fn selected_patterns(&self) -> Result<Vec<Pattern>> {
        let named = if self.patterns.is_empty() {
            Pattern::ALL.to_vec()
        } else {
            self.patterns
                .iter()
                .map(|name| name.parse::<Pattern>())
                .collect::<Result<Vec<_>>>()?
        };

        Ok(named
            .into_iter()
            .filter(|pattern| self.categories.is_empty() || self.categories.contains(&pattern.category()))
            .collect())
    }
}
