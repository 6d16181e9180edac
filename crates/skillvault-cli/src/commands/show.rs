//! Show command
//!
//! Usage: skillvault show <ID>
//!        skillvault featured

use clap::Args;
use skillvault_core::render::render_selection;
use skillvault_core::{apply, Command, GalleryState, Result, SkillVaultError};

use crate::session::Session;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Certificate ID to show
    pub id: String,
}

/// Execute show command
pub fn execute(session: &Session, args: ShowArgs) -> Result<()> {
    print!("{}", detail(session, args.id)?);
    Ok(())
}

/// Show the certificate named by `featured_id` in the configuration
pub fn execute_featured(session: &Session) -> Result<()> {
    let id = session
        .config
        .featured_id
        .clone()
        .ok_or_else(|| SkillVaultError::Config {
            message: "featured_id is not set".to_string(),
        })?;

    let rendered = detail(session, id)?;
    print!("Featured Certificate\n\n{}", rendered);
    Ok(())
}

/// Rendered detail view, or the lookup error before anything is printed
fn detail(session: &Session, certificate_id: String) -> Result<String> {
    let state = apply(
        GalleryState::new(),
        Command::View { certificate_id },
        &session.catalog,
    )?;

    Ok(render_selection(&state.selection).unwrap_or_default())
}
