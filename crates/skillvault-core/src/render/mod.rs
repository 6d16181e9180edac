//! Text rendering of gallery views
//!
//! Produces Markdown for the summary grid, the detail view and the filter
//! bar. Pure functions of the catalog and state.

pub mod card_render;
pub mod detail_render;
pub mod panel_render;

pub use card_render::{render_card, render_header, render_results, tag_preview};
pub use detail_render::{render_detail, render_selection};
pub use panel_render::render_filter_bar;
