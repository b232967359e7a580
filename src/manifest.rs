//! # Manifest Schema and Reading
//!
//! This module defines the data structures that represent the persisted
//! feature manifest, as well as the logic for reading and parsing it and
//! every derived view the build consumes.
//!
//! ## Key Components
//!
//! - **`Feature`**: One manifest record. The dotted `package` identifier
//!   carries the owning project as its first segment and the logical
//!   feature name as its last; the `client` block carries the bundling
//!   metadata (short name, target bundle, legacy flag).
//!
//! - **`Manifest`**: The parsed feature list plus the project identifiers
//!   needed to classify records. Every view (`enabled`, `disabled`,
//!   `legacy`, `active`, the name projections, and `bundle_groups`) is a
//!   pure function of the parsed content; nothing is cached or mutated in
//!   place.
//!
//! ## The core feature
//!
//! Every parse prepends one synthesized core feature (package
//! `<brand-project>.features.core`, enabled, bundle `common`). It is never
//! present in the file on disk and never written back; it exists so that
//! the common bundle always has its anchor feature regardless of what the
//! two project trees contain.
//!
//! ## Failure modes
//!
//! Reading a missing or unreadable manifest and parsing malformed JSON are
//! fatal, surfaced with the offending path. An absent `features` key is not
//! an error; it parses as an empty list.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::Layout;
use crate::error::{Error, Result};

/// Logical name of the synthesized core feature.
pub const CORE_FEATURE_NAME: &str = "core";

/// Bundle that aggregates shared chunks, anchored by the core feature.
pub const COMMON_BUNDLE: &str = "common";

/// Sentinel bucket for features without a bundle or client name.
const MISSING: &str = "missing";

/// On-disk shape of the manifest file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManifestFile {
    /// Declared feature records; an absent key is an empty registry.
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// One feature record in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    /// Dotted identifier, e.g. `brand.features.homepage`.
    pub package: String,
    /// Whether the feature participates in the build.
    #[serde(default = "enabled_default")]
    pub enabled: bool,
    /// Client-side bundling metadata.
    #[serde(default)]
    pub client: Client,
}

/// Client-side bundling metadata for a feature.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Client {
    /// Short feature name; the join key for UI bundling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature: Option<String>,
    /// Name of the output bundle this feature's assets belong to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle: Option<String>,
    /// Marks a feature as legacy, excluding it from the active view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legacy: Option<bool>,
}

fn enabled_default() -> bool {
    true
}

impl Feature {
    /// Split the package identifier into its dotted segments.
    pub fn segments(&self) -> Vec<&str> {
        self.package.split('.').collect()
    }

    /// Logical feature name: the last package segment.
    pub fn name(&self) -> &str {
        self.package.rsplit('.').next().unwrap_or_default()
    }

    /// Owning project: the first package segment.
    pub fn project(&self) -> &str {
        self.package.split('.').next().unwrap_or_default()
    }

    /// Whether the feature is flagged legacy.
    pub fn is_legacy(&self) -> bool {
        self.client.legacy == Some(true)
    }
}

/// Build the core feature record synthesized on every read.
pub fn core_feature(brand_project: &str) -> Feature {
    Feature {
        package: format!("{}.features.{}", brand_project, CORE_FEATURE_NAME),
        enabled: true,
        client: Client {
            feature: Some(CORE_FEATURE_NAME.to_string()),
            bundle: Some(COMMON_BUNDLE.to_string()),
            legacy: None,
        },
    }
}

/// Load the raw contents of the manifest file.
///
/// A read failure is fatal: the build cannot proceed without the manifest,
/// so the error names the path and propagates to the invoking step.
pub fn read_manifest(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|err| Error::ManifestRead {
        path: path.display().to_string(),
        message: err.to_string(),
    })
}

/// Parse manifest JSON into the raw feature list, without core synthesis.
///
/// Used by the reader (which prepends core) and by the writer (which loads
/// prior state that must stay core-free). `path` is only used for error
/// context.
pub(crate) fn parse_raw(raw: &str, path: &Path) -> Result<Vec<Feature>> {
    let file: ManifestFile = serde_json::from_str(raw).map_err(|err| Error::ManifestParse {
        path: path.display().to_string(),
        message: err.to_string(),
    })?;
    Ok(file.features)
}

/// The parsed manifest and its derived views.
#[derive(Debug, Clone)]
pub struct Manifest {
    features: Vec<Feature>,
    base_project: String,
    brand_project: String,
}

impl Manifest {
    /// Read and parse the manifest named by the layout.
    pub fn load(layout: &Layout) -> Result<Self> {
        let raw = read_manifest(&layout.manifest_path)?;
        Self::parse(&raw, layout)
    }

    /// Parse manifest JSON, prepending the synthesized core feature.
    pub fn parse(raw: &str, layout: &Layout) -> Result<Self> {
        let mut features = vec![core_feature(&layout.brand_project)];
        features.extend(parse_raw(raw, &layout.manifest_path)?);

        Ok(Self {
            features,
            base_project: layout.base_project.clone(),
            brand_project: layout.brand_project.clone(),
        })
    }

    /// All feature records, core first.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Features participating in the build.
    pub fn enabled(&self) -> Vec<&Feature> {
        self.features.iter().filter(|f| f.enabled).collect()
    }

    /// Features switched off in the manifest.
    pub fn disabled(&self) -> Vec<&Feature> {
        self.features.iter().filter(|f| !f.enabled).collect()
    }

    /// Features flagged legacy.
    pub fn legacy(&self) -> Vec<&Feature> {
        self.features.iter().filter(|f| f.is_legacy()).collect()
    }

    /// Features not flagged legacy.
    pub fn active(&self) -> Vec<&Feature> {
        self.features.iter().filter(|f| !f.is_legacy()).collect()
    }

    /// Logical names of the enabled features.
    pub fn enabled_names(&self) -> Vec<String> {
        names_of(&self.enabled())
    }

    /// Logical names of the disabled features.
    pub fn disabled_names(&self) -> Vec<String> {
        names_of(&self.disabled())
    }

    /// Logical names of the legacy features.
    pub fn legacy_names(&self) -> Vec<String> {
        names_of(&self.legacy())
    }

    /// Logical names of the active features.
    pub fn active_names(&self) -> Vec<String> {
        names_of(&self.active())
    }

    /// Enabled features owned by the base project.
    pub fn base_features(&self) -> Vec<&Feature> {
        self.project_features(&self.base_project)
    }

    /// Enabled features owned by the brand project.
    pub fn brand_features(&self) -> Vec<&Feature> {
        self.project_features(&self.brand_project)
    }

    /// Enabled features whose package is owned by the given project.
    fn project_features(&self, project: &str) -> Vec<&Feature> {
        self.features
            .iter()
            .filter(|f| f.enabled && f.project() == project)
            .collect()
    }

    /// Logical names of the enabled base-project features.
    pub fn base_feature_names(&self) -> Vec<String> {
        names_of(&self.base_features())
    }

    /// Logical names of the enabled brand-project features.
    pub fn brand_feature_names(&self) -> Vec<String> {
        names_of(&self.brand_features())
    }

    /// The authoritative set of feature names eligible for bundling.
    ///
    /// Union of the base and brand name views, minus any name matching the
    /// core/legacy strip (substring match, mirroring the bundler's chunk
    /// exclusion list).
    pub fn enabled_feature_names(&self) -> Vec<String> {
        let mut names = self.base_feature_names();
        for name in self.brand_feature_names() {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names.retain(|name| !name.contains("core") && !name.contains("legacy"));
        names
    }

    /// Member feature names of each bundle.
    ///
    /// Groups the enabled features by their target bundle and maps each
    /// group to its client feature names. Features without a bundle land in
    /// a sentinel bucket that is dropped from the result, and placeholder
    /// names introduced by a missing client block are dropped from each
    /// group; a feature is never silently folded into an unrelated bundle.
    pub fn bundle_groups(&self) -> BTreeMap<String, Vec<String>> {
        let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for feature in self.enabled() {
            let bundle = feature.client.bundle.as_deref().unwrap_or(MISSING);
            let name = feature.client.feature.as_deref().unwrap_or(MISSING);
            groups
                .entry(bundle.to_string())
                .or_default()
                .push(name.to_string());
        }

        groups.remove(MISSING);
        for members in groups.values_mut() {
            members.retain(|name| name != MISSING);
        }

        groups
    }
}

fn names_of(features: &[&Feature]) -> Vec<String> {
    features.iter().map(|f| f.name().to_string()).collect()
}
