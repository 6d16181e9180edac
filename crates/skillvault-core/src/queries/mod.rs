//! Query operations over the catalog
//!
//! Read-only: the filter state describes what the user asked for and the
//! engine derives the visible certificates from it, in catalog order.

pub mod engine;
pub mod filter_state;

pub use engine::{matches_facets, matches_text, QueryEngine, QueryOutcome, QueryTrim};
pub use filter_state::FilterState;
