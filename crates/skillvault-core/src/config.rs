//! Gallery configuration
//!
//! Loaded from an optional TOML file. Every key is optional:
//!
//! ```toml
//! query_trim = "none"          # or "both"
//! tag_preview_limit = 3
//! featured_id = "mern-gen-ai"
//! log_profile = "development"  # or "production"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::errors::{Result, SkillVaultError};
use crate::logging_facility::Profile;
use crate::queries::{QueryEngine, QueryTrim};

/// Number of tags a summary card shows before "+N more"
pub const DEFAULT_TAG_PREVIEW_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    pub query_trim: QueryTrim,
    pub tag_preview_limit: usize,
    pub featured_id: Option<String>,
    pub log_profile: Profile,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            query_trim: QueryTrim::None,
            tag_preview_limit: DEFAULT_TAG_PREVIEW_LIMIT,
            featured_id: None,
            log_profile: Profile::Development,
        }
    }
}

impl GalleryConfig {
    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns `Config` on malformed TOML or unknown keys.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SkillVaultError::Config {
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns `Config` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| SkillVaultError::Config {
            message: format!("Failed to read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// Load the file if given, defaults otherwise
    ///
    /// # Errors
    ///
    /// See [`GalleryConfig::load`].
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn query_engine(&self) -> QueryEngine {
        QueryEngine::new(self.query_trim)
    }
}
