//! Facets command
//!
//! Usage: skillvault facets [--filter <VALUE>]...

use clap::Args;
use skillvault_core::render::render_filter_bar;
use skillvault_core::Result;

use crate::session::Session;

#[derive(Debug, Args)]
pub struct FacetsArgs {
    /// Facet value to mark as active (repeatable)
    #[arg(short, long = "filter")]
    pub filters: Vec<String>,
}

/// Execute facets command
pub fn execute(session: &Session, args: FacetsArgs) -> Result<()> {
    let state = super::filtered_state(session, None, &args.filters)?;
    let options = session.catalog.facet_options();

    print!("{}", render_filter_bar(&options, &state.filters, true));

    Ok(())
}
