//! End-to-end tests for the `check` command

use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

/// Test that a valid manifest passes
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_check_valid_manifest() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("manifest.json")
        .write_str(
            r#"{ "features": [
                { "package": "base.features.homepage", "enabled": true,
                  "client": { "feature": "homepage", "bundle": "catalog" } }
            ] }"#,
        )
        .unwrap();

    let mut cmd = cargo_bin_cmd!("feature-manifest");

    cmd.current_dir(temp.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Manifest is valid"));
}

/// Test that duplicate logical names fail validation
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_check_duplicate_names_fail() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("manifest.json")
        .write_str(
            r#"{ "features": [
                { "package": "base.features.homepage", "enabled": true, "client": {} },
                { "package": "brand.features.homepage", "enabled": true, "client": {} }
            ] }"#,
        )
        .unwrap();

    let mut cmd = cargo_bin_cmd!("feature-manifest");

    cmd.current_dir(temp.path())
        .arg("check")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Duplicate feature name"))
        .stderr(predicate::str::contains("validation failed"));
}

/// Test that a bundle-less feature only warns
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_check_missing_bundle_warns_only() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("manifest.json")
        .write_str(
            r#"{ "features": [
                { "package": "base.features.search", "enabled": true, "client": {} }
            ] }"#,
        )
        .unwrap();

    let mut cmd = cargo_bin_cmd!("feature-manifest");

    cmd.current_dir(temp.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("has no bundle"));
}

/// Test that malformed JSON is a fatal parse error
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_check_malformed_json_fails() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("manifest.json").write_str("{broken").unwrap();

    let mut cmd = cargo_bin_cmd!("feature-manifest");

    cmd.current_dir(temp.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse manifest"));
}

/// Test that a missing manifest is a fatal read error
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_check_missing_manifest_fails() {
    let temp = assert_fs::TempDir::new().unwrap();

    let mut cmd = cargo_bin_cmd!("feature-manifest");

    cmd.current_dir(temp.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read manifest"));
}
