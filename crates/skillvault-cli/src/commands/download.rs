//! Download command
//!
//! Usage: skillvault download <ID> --site-root <DIR> [--dest <DIR>]
//!
//! Download URLs in the catalog are site-relative paths (for example
//! `/certificates/react.pdf`). They are resolved against the site root and
//! copied into the destination under the suggested filename.

use clap::Args;
use skillvault_core::{DownloadRequest, DownloadTrigger, Result, SkillVaultError};
use skillvault_core::{log_op_end, log_op_error, log_op_start};
use std::fs;
use std::path::PathBuf;

use crate::session::Session;

#[derive(Debug, Args)]
pub struct DownloadArgs {
    /// Certificate ID to download
    pub id: String,

    /// Directory that site-relative download URLs resolve against
    #[arg(long)]
    pub site_root: PathBuf,

    /// Destination directory (default: current directory)
    #[arg(long, default_value = ".")]
    pub dest: PathBuf,
}

/// Copies site files into a local directory
pub struct FsDownloadTrigger {
    pub site_root: PathBuf,
    pub dest_dir: PathBuf,
}

impl FsDownloadTrigger {
    fn source_path(&self, url: &str) -> Result<PathBuf> {
        if url.contains("://") {
            return Err(SkillVaultError::Download {
                url: url.to_string(),
                message: "only site-relative URLs can be resolved locally".to_string(),
            });
        }
        Ok(self.site_root.join(url.trim_start_matches('/')))
    }
}

impl DownloadTrigger for FsDownloadTrigger {
    fn trigger(&self, request: &DownloadRequest) -> Result<()> {
        let source = self.source_path(&request.url)?;
        let target = self.dest_dir.join(&request.filename);

        fs::copy(&source, &target).map_err(|e| SkillVaultError::Download {
            url: request.url.clone(),
            message: format!("{} -> {}: {}", source.display(), target.display(), e),
        })?;

        Ok(())
    }
}

/// Execute download command
pub fn execute(session: &Session, args: DownloadArgs) -> Result<()> {
    log_op_start!("download", certificate_id = args.id.as_str());
    let start = std::time::Instant::now();

    let cert = session.catalog.get(&args.id)?;
    let request = DownloadRequest::for_certificate(cert);
    let trigger = FsDownloadTrigger {
        site_root: args.site_root,
        dest_dir: args.dest,
    };

    trigger.trigger(&request).map_err(|e| {
        log_op_error!(
            "download",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "download",
        duration_ms = start.elapsed().as_millis() as u64,
        certificate_id = request.certificate_id.as_str()
    );

    println!("✓ Saved {}", trigger.dest_dir.join(&request.filename).display());
    Ok(())
}
