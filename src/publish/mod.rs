//! The publish sequence: ensure directories, drop stale files, upload.
//!
//! Directory creation and stale-file deletion are best-effort. After
//! classification the two benign conditions are absorbed and logged; any other
//! failure of a best-effort step is surfaced in the report instead of aborting
//! the run. A failed upload aborts: the remaining transfers depend on the
//! session being healthy.

mod ftps;
mod remote;

use std::fs::File;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::manifest::SitePlan;

pub use ftps::FtpsSite;
pub use remote::{RemoteError, RemoteSite};

/// What one publish run did.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishReport {
    /// Remote paths written, in upload order.
    pub uploaded: Vec<String>,
    /// Local paths that were missing and therefore skipped.
    pub skipped: Vec<String>,
    /// Non-benign failures of best-effort steps. The run continued past these.
    pub errors: Vec<String>,
    pub finished_at: DateTime<Utc>,
}

/// Run the full plan against an open session.
///
/// Returns `Err` only for failures that end the run: a local read error,
/// a failed upload, or a failed session close. Everything best-effort lands
/// in the report.
pub fn publish(site: &mut dyn RemoteSite, plan: &SitePlan) -> Result<PublishReport> {
    let mut uploaded = Vec::new();
    let mut skipped = Vec::new();
    let mut errors = Vec::new();

    for dir in &plan.directories {
        match site.make_dir(dir) {
            Ok(()) => info!("Created directory: {dir}"),
            Err(RemoteError::AlreadyExists(_)) => debug!("Directory {dir} already exists"),
            Err(err) => {
                warn!("Creating directory {dir} failed: {err}");
                errors.push(format!("mkdir {dir}: {err}"));
            }
        }
    }

    for stale in &plan.stale_paths {
        match site.remove_file(stale) {
            Ok(()) => info!("Removed old {stale}"),
            Err(RemoteError::NotFound(_)) => debug!("Stale path {stale} already gone"),
            Err(err) => {
                warn!("Removing {stale} failed: {err}");
                errors.push(format!("delete {stale}: {err}"));
            }
        }
    }

    for transfer in &plan.transfers {
        if !transfer.local.exists() {
            warn!("Skipping missing file: {}", transfer.local.display());
            skipped.push(transfer.local.display().to_string());
            continue;
        }

        info!("Uploading {} -> /{}", transfer.local.display(), transfer.remote);
        let mut file = File::open(&transfer.local)
            .with_context(|| format!("Failed to open {}", transfer.local.display()))?;
        let bytes = site
            .store(&transfer.remote, &mut file)
            .with_context(|| format!("Failed to upload /{}", transfer.remote))?;
        info!("  Uploaded successfully ({bytes} bytes)");
        uploaded.push(transfer.remote.clone());
    }

    site.quit().context("Failed to close the session cleanly")?;

    Ok(PublishReport {
        uploaded,
        skipped,
        errors,
        finished_at: Utc::now(),
    })
}
