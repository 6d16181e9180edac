//! SkillVault CLI
//!
//! Command-line gallery of certificates

use clap::{Parser, Subcommand};
use skillvault_core::errors::ExError;
use skillvault_core_types::RequestContext;
use std::path::PathBuf;

mod commands;
mod session;

#[derive(Debug, Parser)]
#[command(name = "skillvault")]
#[command(about = "SkillVault - searchable certificate gallery", long_about = None)]
struct Cli {
    /// Catalog data file (JSON array of certificates)
    #[arg(long, global = true, default_value = "data/certificates.json")]
    catalog: PathBuf,

    /// Optional TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List certificates, optionally searched and filtered
    List(commands::list::ListArgs),
    /// Show the filter panel with every facet option
    Facets(commands::facets::FacetsArgs),
    /// Show one certificate in detail
    Show(commands::show::ShowArgs),
    /// Show the featured certificate
    Featured,
    /// Download a certificate file under its suggested name
    Download(commands::download::DownloadArgs),
    /// Print the suggested download filename for a title
    Filename(commands::filename::FilenameArgs),
}

fn main() {
    let cli = Cli::parse();
    let ctx = RequestContext::new();

    let result = match cli.command {
        Commands::Filename(args) => commands::filename::execute(args),
        command => session::Session::open(&cli.catalog, cli.config.as_deref()).and_then(
            |session| {
                let _span =
                    tracing::info_span!("skillvault", request_id = %ctx.request_id).entered();
                run(&session, command)
            },
        ),
    };

    if let Err(e) = result {
        let ex_err: ExError = e.into();
        eprintln!("Error: {}", ex_err.with_request_id(ctx.request_id));
        std::process::exit(1);
    }
}

fn run(session: &session::Session, command: Commands) -> skillvault_core::Result<()> {
    match command {
        Commands::List(args) => commands::list::execute(session, args),
        Commands::Facets(args) => commands::facets::execute(session, args),
        Commands::Show(args) => commands::show::execute(session, args),
        Commands::Featured => commands::show::execute_featured(session),
        Commands::Download(args) => commands::download::execute(session, args),
        Commands::Filename(args) => commands::filename::execute(args),
    }
}
