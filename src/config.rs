//! # Project Layout Configuration
//!
//! This module defines the `Layout` structure that names every filesystem
//! location the resolver touches: the base project root, the brand project
//! root that overlays it, the temp root holding the merged tree the bundler
//! consumes, and the manifest file itself.
//!
//! A `Layout` is constructed explicitly and passed into each component; no
//! path is ambient module state. The two project identifiers (the first
//! segment of every feature `package`) derive from the root directory names
//! and can be overridden for layouts whose directory names do not match the
//! package namespace.
//!
//! The layout also exposes the path-rewrite rules consumed by the external
//! build-config assembler: pure string substitutions that move a source
//! path between the base, brand, and temp trees.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::defaults::FEATURES_DIR;
use crate::error::{Error, Result};

/// Filesystem layout of the two project trees and the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Root directory of the base (fallback) project tree.
    pub base_root: PathBuf,
    /// Root directory of the brand (overriding) project tree.
    pub brand_root: PathBuf,
    /// Root directory of the merged temp tree.
    pub temp_root: PathBuf,
    /// Path to the persisted manifest file.
    pub manifest_path: PathBuf,
    /// Project identifier of the base tree; first segment of base packages.
    pub base_project: String,
    /// Project identifier of the brand tree; first segment of brand packages.
    pub brand_project: String,
}

impl Layout {
    /// Create a layout from the four root paths.
    ///
    /// Project identifiers are derived from the final component of the base
    /// and brand roots. Use [`Layout::with_projects`] when the package
    /// namespace differs from the directory names.
    pub fn new(
        base_root: impl Into<PathBuf>,
        brand_root: impl Into<PathBuf>,
        temp_root: impl Into<PathBuf>,
        manifest_path: impl Into<PathBuf>,
    ) -> Result<Self> {
        let base_root = base_root.into();
        let brand_root = brand_root.into();
        let base_project = project_name(&base_root)?;
        let brand_project = project_name(&brand_root)?;

        Ok(Self {
            base_root,
            brand_root,
            temp_root: temp_root.into(),
            manifest_path: manifest_path.into(),
            base_project,
            brand_project,
        })
    }

    /// Override the derived project identifiers.
    pub fn with_projects(
        mut self,
        base_project: impl Into<String>,
        brand_project: impl Into<String>,
    ) -> Self {
        self.base_project = base_project.into();
        self.brand_project = brand_project.into();
        self
    }

    /// Features directory of the base project.
    pub fn base_features(&self) -> PathBuf {
        self.base_root.join(FEATURES_DIR)
    }

    /// Features directory of the brand project.
    pub fn brand_features(&self) -> PathBuf {
        self.brand_root.join(FEATURES_DIR)
    }

    /// Features directory of the merged temp tree.
    pub fn temp_features(&self) -> PathBuf {
        self.temp_root.join(FEATURES_DIR)
    }

    /// Rewrite a base source path into the brand tree.
    pub fn base_to_brand(&self, src: &str) -> String {
        rewrite(src, &self.base_root, &self.brand_root)
    }

    /// Rewrite a brand source path into the base tree.
    pub fn brand_to_base(&self, src: &str) -> String {
        rewrite(src, &self.brand_root, &self.base_root)
    }

    /// Rewrite a base source path into the temp tree.
    pub fn base_to_temp(&self, src: &str) -> String {
        rewrite(src, &self.base_root, &self.temp_root)
    }

    /// Rewrite a brand source path into the temp tree.
    pub fn brand_to_temp(&self, src: &str) -> String {
        rewrite(src, &self.brand_root, &self.temp_root)
    }
}

/// Derive a project identifier from the final component of a root path.
fn project_name(root: &Path) -> Result<String> {
    root.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| Error::Path {
            message: format!(
                "Cannot derive a project name from root path '{}'",
                root.display()
            ),
        })
}

/// Substitute the first occurrence of one root prefix for another.
fn rewrite(src: &str, from: &Path, to: &Path) -> String {
    src.replacen(
        from.to_string_lossy().as_ref(),
        to.to_string_lossy().as_ref(),
        1,
    )
}
