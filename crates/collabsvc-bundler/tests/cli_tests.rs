//! End-to-end tests for the bundler binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_file(dir: &Path, rel: &str, contents: &str) {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

fn bundler(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("collabsvc-bundler").unwrap();
    cmd.current_dir(dir);
    cmd
}

/// Standard working layout: one fragment, one components file.
fn standard_layout(dir: &Path) {
    write_file(
        dir,
        "tags/sessions.yaml",
        "/sessions:\n  get:\n    summary: List sessions\n",
    );
    write_file(
        dir,
        "components/components.yaml",
        "components:\n  schemas:\n    Session:\n      type: object\n",
    );
}

#[test]
fn test_bundles_to_default_output() {
    let dir = TempDir::new().unwrap();
    standard_layout(dir.path());

    bundler(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Successfully bundled OpenAPI spec to",
        ));

    let output = dir.path().join("collabsvc_bundled.yaml");
    assert!(output.exists(), "default output file should be written");
    let rendered = fs::read_to_string(output).unwrap();
    assert!(rendered.contains("openapi: 3.0.2"));
    assert!(rendered.contains("/sessions"));
}

#[test]
fn test_output_flag_overrides_destination() {
    let dir = TempDir::new().unwrap();
    standard_layout(dir.path());

    bundler(dir.path())
        .args(["--output", "custom.yaml"])
        .assert()
        .success();

    assert!(dir.path().join("custom.yaml").exists());
    assert!(!dir.path().join("collabsvc_bundled.yaml").exists());
}

#[test]
fn test_missing_tags_dir_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "components/components.yaml", "components: {}\n");

    bundler(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("tags directory"));

    assert!(
        !dir.path().join("collabsvc_bundled.yaml").exists(),
        "no output file on fatal error"
    );
}

#[test]
fn test_malformed_fragment_warns_but_succeeds() {
    let dir = TempDir::new().unwrap();
    standard_layout(dir.path());
    write_file(dir.path(), "tags/broken.yaml", "/broken: [unclosed\n");

    bundler(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid YAML"));

    let rendered = fs::read_to_string(dir.path().join("collabsvc_bundled.yaml")).unwrap();
    assert!(rendered.contains("/sessions"), "valid sibling still merged");
    assert!(!rendered.contains("/broken"));
}

#[test]
fn test_empty_components_warns_but_succeeds() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "tags/sessions.yaml", "/sessions:\n  get: {}\n");
    write_file(dir.path(), "components/components.yaml", "components: {}\n");

    bundler(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("components"));

    let rendered = fs::read_to_string(dir.path().join("collabsvc_bundled.yaml")).unwrap();
    assert!(rendered.contains("components: {}"));
}

#[test]
fn test_missing_components_file_warns_but_succeeds() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "tags/sessions.yaml", "/sessions:\n  get: {}\n");

    bundler(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("no components will be included"));
}
