use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::Read;
use std::path::Path;

use onboarding_kit::manifest::{SitePlan, Transfer};
use onboarding_kit::publish::{publish, RemoteError, RemoteSite};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::TempDir;

/// In-memory stand-in for the FTPS session.
#[derive(Default)]
struct FakeRemote {
    dirs: BTreeSet<String>,
    files: BTreeMap<String, Vec<u8>>,
    quit_count: usize,
    /// Directory whose creation fails with a non-benign error.
    fail_mkdir: Option<String>,
    /// Remote path whose upload fails.
    fail_store: Option<String>,
}

impl RemoteSite for FakeRemote {
    fn make_dir(&mut self, path: &str) -> Result<(), RemoteError> {
        if self.fail_mkdir.as_deref() == Some(path) {
            return Err(RemoteError::Session(format!("451 transient failure: {path}")));
        }
        if !self.dirs.insert(path.to_string()) {
            return Err(RemoteError::AlreadyExists(path.to_string()));
        }
        Ok(())
    }

    fn remove_file(&mut self, path: &str) -> Result<(), RemoteError> {
        match self.files.remove(path) {
            Some(_) => Ok(()),
            None => Err(RemoteError::NotFound(path.to_string())),
        }
    }

    fn store(&mut self, remote_path: &str, reader: &mut dyn Read) -> Result<u64, RemoteError> {
        if self.fail_store.as_deref() == Some(remote_path) {
            return Err(RemoteError::Session(format!("426 transfer aborted: {remote_path}")));
        }
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        let len = buf.len() as u64;
        self.files.insert(remote_path.to_string(), buf);
        Ok(len)
    }

    fn quit(&mut self) -> Result<(), RemoteError> {
        self.quit_count += 1;
        Ok(())
    }
}

/// The real plan, with the local sources redirected into a temp directory.
fn plan_in(dir: &Path) -> SitePlan {
    let mut plan = SitePlan::brother_brooklyn();
    plan.transfers = plan
        .transfers
        .into_iter()
        .map(|t| Transfer::new(dir.join(t.local), t.remote))
        .collect();
    plan
}

fn write_all_sources(dir: &Path) {
    fs::write(dir.join("onboarding.html"), b"<html>onboarding</html>").unwrap();
    fs::write(dir.join("submit.php"), b"<?php // submit ?>").unwrap();
}

#[test]
fn test_fresh_target_gets_directories_and_files() {
    let tmp = TempDir::new().unwrap();
    write_all_sources(tmp.path());
    let plan = plan_in(tmp.path());
    let mut remote = FakeRemote::default();

    let report = publish(&mut remote, &plan).unwrap();

    for dir in &plan.directories {
        assert!(remote.dirs.contains(dir), "missing directory {dir}");
    }
    assert_eq!(
        report.uploaded,
        vec![
            "brother-brooklyn/onboarding/index.html".to_string(),
            "brother-brooklyn/onboarding/submit.php".to_string(),
        ]
    );
    assert!(report.skipped.is_empty());
    assert!(report.errors.is_empty());
    assert_eq!(remote.quit_count, 1);
}

#[test]
fn test_uploaded_bytes_match_local_bytes() {
    let tmp = TempDir::new().unwrap();
    write_all_sources(tmp.path());
    let plan = plan_in(tmp.path());
    let mut remote = FakeRemote::default();

    publish(&mut remote, &plan).unwrap();

    for transfer in &plan.transfers {
        let local = fs::read(&transfer.local).unwrap();
        assert_eq!(remote.files.get(&transfer.remote), Some(&local));
    }
}

#[test]
fn test_second_run_reaches_the_same_state_without_errors() {
    let tmp = TempDir::new().unwrap();
    write_all_sources(tmp.path());
    let plan = plan_in(tmp.path());
    let mut remote = FakeRemote::default();

    publish(&mut remote, &plan).unwrap();
    let dirs_after_first = remote.dirs.clone();
    let files_after_first = remote.files.clone();

    // Directory creation now hits AlreadyExists everywhere; still no errors.
    let report = publish(&mut remote, &plan).unwrap();

    assert!(report.errors.is_empty());
    assert_eq!(remote.dirs, dirs_after_first);
    assert_eq!(remote.files, files_after_first);
    assert_eq!(remote.quit_count, 2);
}

#[test]
fn test_missing_local_file_is_skipped_and_run_completes() {
    let tmp = TempDir::new().unwrap();
    // onboarding.html deliberately absent, submit.php present.
    fs::write(tmp.path().join("submit.php"), b"<?php // submit ?>").unwrap();
    let plan = plan_in(tmp.path());
    let mut remote = FakeRemote::default();

    let report = publish(&mut remote, &plan).unwrap();

    assert_eq!(report.skipped.len(), 1);
    assert!(report.skipped[0].ends_with("onboarding.html"));
    assert_eq!(report.uploaded, vec!["brother-brooklyn/onboarding/submit.php".to_string()]);
    assert!(!remote.files.contains_key("brother-brooklyn/onboarding/index.html"));
}

#[rstest]
#[case::absent(false)]
#[case::present(true)]
fn test_stale_paths_are_cleared_whether_or_not_they_exist(#[case] stale_present: bool) {
    let tmp = TempDir::new().unwrap();
    write_all_sources(tmp.path());
    let plan = plan_in(tmp.path());
    let mut remote = FakeRemote::default();
    if stale_present {
        for stale in &plan.stale_paths {
            remote.files.insert(stale.clone(), b"old".to_vec());
        }
    }

    let report = publish(&mut remote, &plan).unwrap();

    assert!(report.errors.is_empty());
    for stale in &plan.stale_paths {
        assert!(!remote.files.contains_key(stale));
    }
}

#[test]
fn test_non_benign_mkdir_failure_is_surfaced_but_not_fatal() {
    let tmp = TempDir::new().unwrap();
    write_all_sources(tmp.path());
    let plan = plan_in(tmp.path());
    let mut remote = FakeRemote {
        fail_mkdir: Some("brother-brooklyn".to_string()),
        ..Default::default()
    };

    let report = publish(&mut remote, &plan).unwrap();

    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].contains("mkdir brother-brooklyn"));
    // The rest of the run still happened.
    assert_eq!(report.uploaded.len(), 2);
    assert_eq!(remote.quit_count, 1);
}

#[test]
fn test_upload_failure_aborts_the_run() {
    let tmp = TempDir::new().unwrap();
    write_all_sources(tmp.path());
    let plan = plan_in(tmp.path());
    let mut remote = FakeRemote {
        fail_store: Some("brother-brooklyn/onboarding/index.html".to_string()),
        ..Default::default()
    };

    let result = publish(&mut remote, &plan);

    assert!(result.is_err());
    // The session was never closed cleanly.
    assert_eq!(remote.quit_count, 0);
    // The second transfer never ran.
    assert!(!remote.files.contains_key("brother-brooklyn/onboarding/submit.php"));
}
