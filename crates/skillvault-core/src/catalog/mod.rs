//! Catalog Store
//!
//! The immutable, ordered list of certificates for one session, the
//! validating loader that builds it from the JSON data file, and the facet
//! options derived from it.

pub mod facets;
pub mod loader;
pub mod store;

pub use facets::{FacetCategory, FacetGroup, FacetOptions};
pub use loader::{parse_catalog_file, parse_catalog_str, parse_catalog_value};
pub use store::Catalog;
