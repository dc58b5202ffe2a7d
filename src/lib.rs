//! Tooling for the Brother Brooklyn client onboarding:
//! - `publish`: push the onboarding microsite to the hosting account over FTPS
//! - `brief`: generate the multi-page client onboarding brief as a PDF
//! - `manifest`: the fixed deployment plan (directories, stale paths, transfers)

pub mod brief;
pub mod manifest;
pub mod publish;

pub use brief::{build_brief, BriefSummary};
pub use manifest::{SitePlan, Transfer};
pub use publish::{publish, PublishReport, RemoteError, RemoteSite};
