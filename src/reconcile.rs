//! # Manifest Reconciliation and Writing
//!
//! This module recomputes the authoritative feature registry from the two
//! project trees and the prior manifest state, then persists it.
//!
//! ## Process
//!
//! 1. **Discovery**: list the base and brand feature directories
//!    independently (one level deep, reserved names excluded).
//! 2. **Override resolution**: merge the two name sets through the generic
//!    resolver keyed on the logical feature name, with a brand-wins
//!    conflict function. A name present in both trees resolves to the
//!    brand record as a whole; the base placeholder is dropped entirely
//!    rather than merged field by field.
//! 3. **Prior-state preservation**: a discovered feature that is already in
//!    the manifest with an unchanged `package` keeps its persisted record,
//!    so hand-maintained `enabled` flags and `client` blocks survive
//!    re-reconciliation. A feature whose owning project changed gets a
//!    fresh bare model; manifest entries whose directories are gone are
//!    dropped.
//! 4. **Persistence**: the resolved models are written as the manifest's
//!    `features` array. The synthesized core feature is never written. The
//!    writer stages the new content in a sibling temp file and renames it
//!    into place so a failed write can never truncate the manifest.
//!
//! Reconciliation is deterministic (models sorted by logical name) and
//! idempotent: with no filesystem changes, a second pass produces
//! byte-identical output.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::Layout;
use crate::discovery::discover_features;
use crate::error::{Error, Result};
use crate::manifest::{self, Client, Feature, ManifestFile, CORE_FEATURE_NAME};
use crate::resolver;

/// Result of a reconciliation pass.
#[derive(Debug, Clone)]
pub struct Reconciliation {
    /// The reconciled feature records, sorted by logical name.
    pub models: Vec<Feature>,
    /// Every discovered feature name, brand names first.
    pub names: Vec<String>,
}

/// Build a bare feature record for a freshly discovered feature.
pub fn feature_model(project: &str, name: &str) -> Feature {
    Feature {
        package: format!("{}.features.{}", project, name),
        enabled: true,
        client: Client::default(),
    }
}

/// Reconcile the discovered feature trees with the prior manifest state.
pub fn reconcile(layout: &Layout) -> Result<Reconciliation> {
    let base_names = discover_features(&layout.base_features());
    let brand_names = discover_features(&layout.brand_features());
    debug!(
        "Discovered {} base and {} brand feature(s)",
        base_names.len(),
        brand_names.len()
    );

    let base_models: Vec<Feature> = base_names
        .iter()
        .map(|name| feature_model(&layout.base_project, name))
        .collect();
    let brand_models: Vec<Feature> = brand_names
        .iter()
        .map(|name| feature_model(&layout.brand_project, name))
        .collect();

    // Brand wins whole-record on a shared logical name.
    let discovered = resolver::resolve(
        feature_key,
        |base, brand| brand.unwrap_or(base),
        base_models,
        brand_models,
    )?;

    let discovered_names: HashSet<String> =
        discovered.iter().map(|f| f.name().to_string()).collect();
    let prior: Vec<Feature> = prior_features(layout)?
        .into_iter()
        .filter(|f| discovered_names.contains(f.name()))
        .collect();

    // A discovered feature whose package is unchanged keeps its persisted
    // record; a changed owning project takes the fresh model.
    let models = resolver::resolve(
        feature_key,
        |fresh, prior| match prior {
            Some(existing) if existing.package == fresh.package => existing,
            _ => fresh,
        },
        discovered,
        prior,
    )?;

    let names = union(brand_names, base_names);

    Ok(Reconciliation { models, names })
}

/// Reconcile and persist in one step.
pub fn reconcile_and_write(layout: &Layout) -> Result<Reconciliation> {
    let reconciliation = reconcile(layout)?;
    write_manifest(layout, &reconciliation.models)?;
    info!(
        "Reconciled {} feature(s) into {}",
        reconciliation.models.len(),
        layout.manifest_path.display()
    );
    Ok(reconciliation)
}

/// Persist feature records as the manifest's `features` array.
///
/// Core records are stripped; the core feature is synthesized at read time
/// and must never reach the file on disk.
pub fn write_manifest(layout: &Layout, models: &[Feature]) -> Result<()> {
    let path = &layout.manifest_path;
    let features: Vec<Feature> = models
        .iter()
        .filter(|f| f.name() != CORE_FEATURE_NAME)
        .cloned()
        .collect();

    let mut json = serde_json::to_string_pretty(&ManifestFile { features })?;
    json.push('\n');

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|err| write_error(path, &err))?;
        }
    }

    // Stage in a sibling temp file so a failed write cannot truncate the
    // manifest, then rename into place.
    let staged = staging_path(path);
    fs::write(&staged, json).map_err(|err| write_error(path, &err))?;
    fs::rename(&staged, path).map_err(|err| write_error(path, &err))?;

    Ok(())
}

fn feature_key(feature: &Feature) -> String {
    feature.name().to_string()
}

/// Load the prior manifest state; an absent file is an empty registry.
fn prior_features(layout: &Layout) -> Result<Vec<Feature>> {
    let path = &layout.manifest_path;
    if !path.exists() {
        return Ok(Vec::new());
    }

    let raw = manifest::read_manifest(path)?;
    let features = manifest::parse_raw(&raw, path)?;
    Ok(features
        .into_iter()
        .filter(|f| f.name() != CORE_FEATURE_NAME)
        .collect())
}

/// Ordered union keeping the first list's order, appending unseen names.
fn union(first: Vec<String>, second: Vec<String>) -> Vec<String> {
    let mut merged = first;
    for name in second {
        if !merged.contains(&name) {
            merged.push(name);
        }
    }
    merged
}

/// Sibling staging file, kept in the same directory as the manifest so the
/// final rename stays on one filesystem.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "manifest".into());
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_error(path: &Path, err: &std::io::Error) -> Error {
    Error::ManifestWrite {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}
