//! Catalog, configuration and logging for one CLI invocation

use skillvault_core::logging_facility;
use skillvault_core::{Catalog, GalleryConfig, QueryEngine, Result};
use std::path::Path;

pub struct Session {
    pub catalog: Catalog,
    pub config: GalleryConfig,
}

impl Session {
    /// Load configuration, start logging, then load the catalog
    pub fn open(catalog_path: &Path, config_path: Option<&Path>) -> Result<Self> {
        let config = GalleryConfig::load_or_default(config_path)?;
        logging_facility::init(config.log_profile);

        let catalog = Catalog::from_path(catalog_path)?;
        tracing::debug!(
            catalog = %catalog_path.display(),
            catalog_len = catalog.len() as u64,
            "catalog loaded"
        );

        Ok(Self { catalog, config })
    }

    pub fn engine(&self) -> QueryEngine {
        self.config.query_engine()
    }
}
