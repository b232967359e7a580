//! End-to-end tests for the `reconcile` command
//!
//! These tests invoke the actual CLI binary and validate its behavior
//! from a user's perspective.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

/// Test that --help flag shows help information
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_reconcile_help() {
    let mut cmd = cargo_bin_cmd!("feature-manifest");

    cmd.arg("reconcile")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Reconcile discovered features into the manifest",
        ));
}

/// Test that reconcile writes a manifest for discovered features
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_reconcile_writes_manifest() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("base/features/homepage").create_dir_all().unwrap();
    temp.child("brand/features/homepage").create_dir_all().unwrap();
    temp.child("brand/features/checkout").create_dir_all().unwrap();

    let mut cmd = cargo_bin_cmd!("feature-manifest");

    cmd.current_dir(temp.path())
        .arg("reconcile")
        .arg("--quiet")
        .assert()
        .success();

    temp.child("manifest.json")
        .assert(predicate::str::contains("brand.features.homepage"))
        .assert(predicate::str::contains("brand.features.checkout"));
}

/// Test that --dry-run flag shows dry run message and writes nothing
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_reconcile_dry_run() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("base/features/homepage").create_dir_all().unwrap();

    let mut cmd = cargo_bin_cmd!("feature-manifest");

    cmd.current_dir(temp.path())
        .arg("reconcile")
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("DRY RUN MODE"));

    temp.child("manifest.json").assert(predicate::path::missing());
}

/// Test that --verbose lists the resolved packages
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_reconcile_verbose() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("base/features/category").create_dir_all().unwrap();

    let mut cmd = cargo_bin_cmd!("feature-manifest");

    cmd.current_dir(temp.path())
        .arg("reconcile")
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::contains("base.features.category"));
}

/// Test that a malformed prior manifest aborts with a parse error
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_reconcile_malformed_manifest_fails() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("base/features/homepage").create_dir_all().unwrap();
    temp.child("manifest.json").write_str("{broken").unwrap();

    let mut cmd = cargo_bin_cmd!("feature-manifest");

    cmd.current_dir(temp.path())
        .arg("reconcile")
        .arg("--quiet")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse manifest"));
}

/// Test that missing feature trees reconcile to an empty registry
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_reconcile_missing_trees_succeed() {
    let temp = assert_fs::TempDir::new().unwrap();

    let mut cmd = cargo_bin_cmd!("feature-manifest");

    cmd.current_dir(temp.path())
        .arg("reconcile")
        .arg("--quiet")
        .assert()
        .success();

    temp.child("manifest.json")
        .assert(predicate::str::contains("\"features\": []"));
}
