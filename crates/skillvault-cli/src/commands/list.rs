//! List command
//!
//! Usage: skillvault list [--query <TEXT>] [--filter <VALUE>]... [--expand <ID>]... [--panel]

use clap::Args;
use skillvault_core::render::{render_filter_bar, render_header, render_results};
use skillvault_core::{apply, Command, Result};

use crate::session::Session;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Search text matched against title, platform, field and tags
    #[arg(short, long)]
    pub query: Option<String>,

    /// Facet value to filter by (repeatable; values are OR-combined)
    #[arg(short, long = "filter")]
    pub filters: Vec<String>,

    /// Certificate ID whose "What I Learned" section is shown (repeatable)
    #[arg(short, long = "expand")]
    pub expand: Vec<String>,

    /// Also show the facet panel
    #[arg(long)]
    pub panel: bool,
}

/// Execute list command
pub fn execute(session: &Session, args: ListArgs) -> Result<()> {
    let mut state = super::filtered_state(session, args.query, &args.filters)?;
    if args.panel {
        state = apply(state, Command::ToggleFilterPanel, &session.catalog)?;
    }
    for id in super::distinct(&args.expand) {
        state = apply(
            state,
            Command::ToggleCardDetails {
                certificate_id: id.clone(),
            },
            &session.catalog,
        )?;
    }

    let options = session.catalog.facet_options();
    let outcome = state.visible(&session.catalog, &session.engine());

    print!("{}", render_header(session.catalog.len()));
    print!(
        "{}",
        render_filter_bar(&options, &state.filters, state.filter_panel_open)
    );
    print!(
        "{}",
        render_results(&outcome, session.config.tag_preview_limit, &state.expanded)
    );

    Ok(())
}
