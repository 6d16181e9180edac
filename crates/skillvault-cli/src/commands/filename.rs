//! Filename command
//!
//! Usage: skillvault filename <TITLE>

use clap::Args;
use skillvault_core::{suggested_filename, Result};

#[derive(Debug, Args)]
pub struct FilenameArgs {
    /// Certificate title
    pub title: String,
}

/// Execute filename command
pub fn execute(args: FilenameArgs) -> Result<()> {
    println!("{}", suggested_filename(&args.title));
    Ok(())
}
