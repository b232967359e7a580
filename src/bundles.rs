//! # Bundle Grouping and Path Resolution
//!
//! The last stage of the core: turning manifest views into the inputs the
//! external build-config assembler consumes. Two families of lookups live
//! here:
//!
//! - **Entry mappings**: each bundle's member features resolved to their
//!   bundler entry files under the merged temp tree
//!   (`<temp>/features/<name>/js/index.js`). A single-feature variant
//!   supports incremental watch rebuilds: look up the one bundle the
//!   feature belongs to and resolve just that feature's entry.
//!
//! - **Project glob paths**: the enabled features of each project mapped to
//!   directories under their project root and joined with a glob suffix,
//!   for asset pipelines that sweep the two trees. The "complete base" view
//!   adds brand feature directories rewritten to the base root, covering
//!   base files shadowed by a brand override.
//!
//! Everything here is a pure lookup over a parsed manifest; there is no
//! state and no I/O apart from `temp_glob_paths`, which lists the temp tree
//! as it currently exists on disk.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config::Layout;
use crate::defaults::FEATURE_ENTRY;
use crate::globs;
use crate::manifest::{Feature, Manifest};

/// Bundler entry file for a feature in the merged temp tree.
pub fn entry_path(layout: &Layout, feature: &str) -> PathBuf {
    layout.temp_features().join(feature).join(FEATURE_ENTRY)
}

/// Entry mappings for every bundle: bundle name to ordered entry paths.
pub fn entry_mappings(manifest: &Manifest, layout: &Layout) -> BTreeMap<String, Vec<PathBuf>> {
    manifest
        .bundle_groups()
        .into_iter()
        .map(|(bundle, members)| {
            let entries = members
                .iter()
                .map(|name| entry_path(layout, name))
                .collect();
            (bundle, entries)
        })
        .collect()
}

/// Ordered entry paths for a single bundle; empty for an unknown bundle.
pub fn bundle_entries(manifest: &Manifest, layout: &Layout, bundle: &str) -> Vec<PathBuf> {
    manifest
        .bundle_groups()
        .remove(bundle)
        .map(|members| members.iter().map(|name| entry_path(layout, name)).collect())
        .unwrap_or_default()
}

/// Bundle membership and entry path for a single target feature.
///
/// Used by incremental watch rebuilds: the result restricts the mapping to
/// the one feature instead of its whole bundle. `None` when the feature is
/// in no bundle.
pub fn feature_entry(
    manifest: &Manifest,
    layout: &Layout,
    feature: &str,
) -> Option<(String, PathBuf)> {
    manifest
        .bundle_groups()
        .into_iter()
        .find(|(_, members)| members.iter().any(|name| name == feature))
        .map(|(bundle, _)| (bundle, entry_path(layout, feature)))
}

/// Enabled base-project feature directories joined with a glob suffix.
pub fn base_glob_paths<F>(manifest: &Manifest, layout: &Layout, suffix: F) -> Vec<String>
where
    F: Fn(&Path) -> String,
{
    manifest
        .base_features()
        .iter()
        .map(|f| suffix(&project_path(&layout.base_root, f)))
        .collect()
}

/// Enabled brand-project feature directories joined with a glob suffix.
pub fn brand_glob_paths<F>(manifest: &Manifest, layout: &Layout, suffix: F) -> Vec<String>
where
    F: Fn(&Path) -> String,
{
    manifest
        .brand_features()
        .iter()
        .map(|f| suffix(&project_path(&layout.brand_root, f)))
        .collect()
}

/// Base glob paths plus brand feature directories rewritten to the base
/// root, covering base files shadowed by a brand override.
pub fn complete_base_glob_paths<F>(manifest: &Manifest, layout: &Layout, suffix: F) -> Vec<String>
where
    F: Fn(&Path) -> String,
{
    let mut paths = base_glob_paths(manifest, layout, &suffix);
    for feature in manifest.brand_features() {
        let rewritten = suffix(&project_path(&layout.base_root, feature));
        if !paths.contains(&rewritten) {
            paths.push(rewritten);
        }
    }
    paths
}

/// Every feature directory currently in the temp tree joined with a suffix.
pub fn temp_glob_paths<F>(layout: &Layout, suffix: F) -> Vec<String>
where
    F: Fn(&Path) -> String,
{
    globs::sub_dirs(&layout.temp_features())
        .iter()
        .map(|dir| suffix(dir))
        .collect()
}

/// Complete-base and brand glob paths flattened over a list of suffixes.
pub fn project_glob_paths<F>(manifest: &Manifest, layout: &Layout, suffixes: &[F]) -> Vec<String>
where
    F: Fn(&Path) -> String,
{
    let mut paths = Vec::new();
    for suffix in suffixes {
        paths.extend(complete_base_glob_paths(manifest, layout, suffix));
        paths.extend(brand_glob_paths(manifest, layout, suffix));
    }
    paths
}

/// Feature directory under a project root: the package segments with the
/// project segment replaced by the root path.
fn project_path(root: &Path, feature: &Feature) -> PathBuf {
    let mut path = root.to_path_buf();
    for segment in feature.segments().iter().skip(1) {
        path.push(segment);
    }
    path
}
