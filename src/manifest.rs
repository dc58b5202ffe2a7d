//! The fixed deployment plan for the onboarding microsite.
//!
//! Everything here is known at invocation time: which remote directories must
//! exist, which stale files from an earlier deploy must be removed, and which
//! (local, remote) pairs get uploaded.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Hosting account the site is published to.
pub const FTP_HOST: &str = "ftp.litcannabisseo.com";

/// Login for the hosting account.
pub const FTP_USER: &str = "jesus@bayareaweb.design";

/// Where the pages end up once published.
pub const LIVE_URL: &str = "https://bayareaweb.design/brother-brooklyn/onboarding/";

/// One file to upload: local source and remote destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transfer {
    pub local: PathBuf,
    pub remote: String,
}

impl Transfer {
    pub fn new(local: impl Into<PathBuf>, remote: impl Into<String>) -> Self {
        Self {
            local: local.into(),
            remote: remote.into(),
        }
    }
}

/// The full plan for one publish run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SitePlan {
    /// Remote directories to ensure exist, in creation order.
    pub directories: Vec<String>,
    /// Remote files from an earlier deploy that landed in the wrong place.
    /// Deleting them is best-effort; they may already be gone.
    pub stale_paths: Vec<String>,
    /// Files to upload, in order.
    pub transfers: Vec<Transfer>,
}

impl SitePlan {
    /// The Brother Brooklyn onboarding pages.
    pub fn brother_brooklyn() -> Self {
        Self {
            directories: vec![
                "brother-brooklyn".to_string(),
                "brother-brooklyn/onboarding".to_string(),
            ],
            stale_paths: vec![
                "brother-brooklyn/onboarding.html".to_string(),
                "brother-brooklyn/submit.php".to_string(),
            ],
            transfers: vec![
                Transfer::new("onboarding.html", "brother-brooklyn/onboarding/index.html"),
                Transfer::new("submit.php", "brother-brooklyn/onboarding/submit.php"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_orders_parent_directory_first() {
        let plan = SitePlan::brother_brooklyn();
        let parent = plan
            .directories
            .iter()
            .position(|d| d == "brother-brooklyn")
            .unwrap();
        let child = plan
            .directories
            .iter()
            .position(|d| d == "brother-brooklyn/onboarding")
            .unwrap();
        assert!(parent < child);
    }

    #[test]
    fn test_transfers_target_the_onboarding_directory() {
        let plan = SitePlan::brother_brooklyn();
        assert_eq!(plan.transfers.len(), 2);
        for transfer in &plan.transfers {
            assert!(transfer.remote.starts_with("brother-brooklyn/onboarding/"));
        }
    }
}
