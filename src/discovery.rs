//! # Feature Discovery
//!
//! Scans a project's features directory one level deep and turns each child
//! directory into a candidate feature name. Reserved names are excluded:
//! `__pycache__` is a build artifact, and `core` is the implicit feature
//! synthesized at manifest read time, so neither may ever enter the
//! reconciled registry from disk.
//!
//! Discovery is deliberately tolerant: a missing directory (a brand project
//! that has not defined any features yet) yields an empty list, never an
//! error. Results are sorted ascending by name, which keeps reconciliation
//! deterministic across invocations.

use std::path::Path;

use log::debug;

use crate::globs::{resource_name, sub_dirs};

/// Directory names that never become features.
pub const RESERVED_FEATURE_NAMES: &[&str] = &["__pycache__", "core"];

/// List the feature names present in a features directory.
///
/// Returns the bare name (final path segment) of every immediate child
/// directory, minus the reserved set. Missing directories yield an empty
/// list.
pub fn discover_features(features_dir: &Path) -> Vec<String> {
    sub_dirs(features_dir)
        .iter()
        .map(|path| resource_name(path))
        .filter(|name| {
            if RESERVED_FEATURE_NAMES.contains(&name.as_str()) {
                debug!(
                    "Skipping reserved directory '{}' in {}",
                    name,
                    features_dir.display()
                );
                return false;
            }
            true
        })
        .collect()
}
