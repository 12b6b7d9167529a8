//! CLI integration tests
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("anthology").unwrap()
}

fn write_archive(dir: &TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("articles.json");
    std::fs::write(&path, json).unwrap();
    path
}

const SMALL_ARCHIVE: &str = r#"[
  {
    "title": "Sunrise",
    "url": "https://example.com/a",
    "content": ["First paragraph of the article.", "Second paragraph of the article."]
  }
]"#;

#[test]
fn test_cli_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scrape"))
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("format"));
}

#[test]
fn test_export_missing_archive_fails() {
    let tmp = TempDir::new().unwrap();
    cmd()
        .current_dir(tmp.path())
        .args(["export", "missing.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.json"));
}

#[test]
fn test_export_empty_archive_is_a_reported_no_op() {
    let tmp = TempDir::new().unwrap();
    let archive = write_archive(&tmp, "[]");

    cmd()
        .current_dir(tmp.path())
        .args(["export", archive.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("empty"));

    let pdfs: Vec<_> = std::fs::read_dir(tmp.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "pdf"))
        .collect();
    assert!(pdfs.is_empty(), "no output document for an empty batch");
}

#[test]
fn test_export_both_with_output_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let archive = write_archive(&tmp, SMALL_ARCHIVE);

    cmd()
        .current_dir(tmp.path())
        .args(["export", archive.to_str().unwrap(), "--output", "out.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("single variant"));
}

#[test]
fn test_export_missing_fonts_reports_guidance_without_crashing() {
    let tmp = TempDir::new().unwrap();
    let archive = write_archive(&tmp, SMALL_ARCHIVE);

    cmd()
        .current_dir(tmp.path())
        .args(["export", archive.to_str().unwrap(), "--variant", "paginated"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Regular.ttf"));

    assert!(!tmp.path().join("经典英语美文集_高级版.pdf").exists());
}

#[test]
fn test_format_markdown_to_stdout() {
    let tmp = TempDir::new().unwrap();
    let archive = write_archive(&tmp, SMALL_ARCHIVE);

    cmd()
        .args(["format", archive.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Sunrise"))
        .stdout(predicate::str::contains("**Source:** https://example.com/a"));
}

#[test]
fn test_format_to_output_file() {
    let tmp = TempDir::new().unwrap();
    let archive = write_archive(&tmp, SMALL_ARCHIVE);
    let out = tmp.path().join("out.html");

    cmd()
        .args([
            "format",
            archive.to_str().unwrap(),
            "--format",
            "html",
            "--output",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.contains("<h1>Sunrise</h1>"));
}

#[test]
fn test_scrape_with_no_valid_entries_writes_no_archive() {
    let tmp = TempDir::new().unwrap();
    let manifest = tmp.path().join("manifest.txt");
    std::fs::write(&manifest, "no brackets here\nstill nothing\n").unwrap();
    let archive = tmp.path().join("articles.json");

    cmd()
        .current_dir(tmp.path())
        .args(["scrape", manifest.to_str().unwrap(), "--archive", archive.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("no articles scraped"));

    assert!(!archive.exists());
}

#[test]
fn test_scrape_missing_manifest_fails() {
    let tmp = TempDir::new().unwrap();
    cmd()
        .current_dir(tmp.path())
        .args(["scrape", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.txt"));
}
