//! SkillVault Core - certificate gallery kernel
//!
//! This crate provides the in-memory model and operations behind the
//! certificate gallery:
//! - Certificate and project models matching the catalog data file
//! - Validating catalog loader and the immutable catalog store
//! - Facet option derivation (platforms, fields, tags)
//! - Query engine (case-insensitive text search, OR-combined facet filters)
//! - Selection controller for the detail view
//! - Command reducer (`apply`) over the gallery state
//! - Download filename derivation and the download trigger seam
//! - Markdown rendering of the gallery views

pub mod apply;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod download;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod queries;
pub mod render;
pub mod selection;
pub mod state;

pub use skillvault_core_types::schema;

// Re-export commonly used types
pub use apply::apply;
pub use catalog::{Catalog, FacetCategory, FacetOptions};
pub use commands::Command;
pub use config::GalleryConfig;
pub use download::{suggested_filename, DownloadRequest, DownloadTrigger};
pub use errors::{ExError, ExErrorKind, Result, SkillVaultError};
pub use model::{Certificate, ProjectReference};
pub use queries::{FilterState, QueryEngine, QueryOutcome, QueryTrim};
pub use selection::SelectionState;
pub use state::GalleryState;
