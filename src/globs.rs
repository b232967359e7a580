//! Path classification and glob pattern utilities for feature-manifest

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;

/// Is the given path a directory? False for missing paths, never an error.
pub fn is_dir(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

/// Is the given path a file? False for missing paths, never an error.
pub fn is_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

/// Build a one-level-deep glob pattern for a directory.
pub fn leaf_glob(dir: &Path) -> String {
    dir.join("*").to_string_lossy().into_owned()
}

/// Build a glob pattern for all client-side files in a directory.
pub fn all_glob(dir: &Path) -> String {
    dir.join("**/*.{html,j2,js}").to_string_lossy().into_owned()
}

/// Build a glob pattern for all JavaScript in a directory.
pub fn js_glob(dir: &Path) -> String {
    dir.join("**/*.js").to_string_lossy().into_owned()
}

/// Build a glob pattern for all CSS in a directory.
pub fn css_glob(dir: &Path) -> String {
    dir.join("**/*.css").to_string_lossy().into_owned()
}

/// Build a glob pattern for all HTML and templates in a directory.
pub fn html_glob(dir: &Path) -> String {
    dir.join("**/*.{html,j2}").to_string_lossy().into_owned()
}

/// Build a glob pattern for all SCSS in a directory.
pub fn scss_glob(dir: &Path) -> String {
    dir.join("**/*.scss").to_string_lossy().into_owned()
}

/// List the immediate child directories of a directory, sorted ascending.
///
/// A missing directory yields an empty list; discovery must tolerate a
/// project that has no features directory yet.
pub fn sub_dirs(dir: &Path) -> Vec<PathBuf> {
    glob_leaf_entries(dir)
        .into_iter()
        .filter(|p| is_dir(p))
        .collect()
}

/// List the immediate child files of a directory, sorted ascending.
pub fn files(dir: &Path) -> Vec<PathBuf> {
    glob_leaf_entries(dir)
        .into_iter()
        .filter(|p| is_file(p))
        .collect()
}

/// Parse the resource (final component) name from a path.
pub fn resource_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Expand the one-level-deep glob for a directory.
fn glob_leaf_entries(dir: &Path) -> Vec<PathBuf> {
    let pattern = leaf_glob(dir);
    match glob::glob(&pattern) {
        Ok(paths) => paths.filter_map(std::result::Result::ok).collect(),
        Err(err) => {
            warn!("Skipping unreadable glob pattern '{}': {}", pattern, err);
            Vec::new()
        }
    }
}
