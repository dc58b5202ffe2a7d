use std::fs;

use onboarding_kit::build_brief;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn test_brief_writes_a_single_pdf_file() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("Brother_Brooklyn_Onboarding.pdf");

    let summary = build_brief(&output).unwrap();

    let bytes = fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert_eq!(bytes.len() as u64, summary.bytes);

    // Five sections open with an explicit page start; long sections may
    // overflow onto extra pages but can never produce fewer.
    assert!(summary.pages >= 5, "got {} pages", summary.pages);

    // Nothing besides the finished document is left behind.
    let entries: Vec<_> = fs::read_dir(tmp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![output.file_name().unwrap().to_os_string()]);
}

#[test]
fn test_page_count_is_stable_across_builds() {
    let tmp = TempDir::new().unwrap();
    let first = build_brief(&tmp.path().join("a.pdf")).unwrap();
    let second = build_brief(&tmp.path().join("b.pdf")).unwrap();
    assert_eq!(first.pages, second.pages);
}

#[test]
fn test_missing_output_directory_fails_without_partial_file() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("does-not-exist").join("brief.pdf");

    let result = build_brief(&output);

    assert!(result.is_err());
    assert!(!output.exists());
    // No temp file either.
    let entries: Vec<_> = fs::read_dir(tmp.path()).unwrap().collect();
    assert!(entries.is_empty());
}
