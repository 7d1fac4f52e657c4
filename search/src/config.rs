use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Case matching behavior for text predicates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMatching {
    #[default]
    Sensitive,
    Insensitive,
    /// Case-insensitive unless the needle contains uppercase.
    Smart,
}

impl CaseMatching {
    /// Resolves `Smart` against a concrete needle.
    pub(crate) fn respects_case(self, needle: &str) -> bool {
        match self {
            CaseMatching::Sensitive => true,
            CaseMatching::Insensitive => false,
            CaseMatching::Smart => needle.chars().any(char::is_uppercase),
        }
    }
}

/// Query configuration, persisted as TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub case_matching: CaseMatching,
    /// Only affects fuzzy predicates.
    pub unicode_normalization: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            case_matching: CaseMatching::default(),
            unicode_normalization: true,
        }
    }
}

impl SearchConfig {
    /// Loads config from a TOML file. Returns default config if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, SearchConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), SearchConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum SearchConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
