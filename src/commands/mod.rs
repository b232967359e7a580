//! Command implementations for the feature-manifest CLI

pub mod bundles;
pub mod check;
pub mod ls;
pub mod paths;
pub mod reconcile;

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use feature_manifest::config::Layout;
use feature_manifest::defaults::{
    DEFAULT_BASE_ROOT, DEFAULT_BRAND_ROOT, DEFAULT_MANIFEST_FILENAME, DEFAULT_TEMP_ROOT,
};

/// Filesystem layout flags shared by every subcommand.
#[derive(Args, Debug)]
pub struct LayoutArgs {
    /// Base project root directory.
    ///
    /// Can also be set with the `FEATURE_MANIFEST_BASE` environment variable.
    #[arg(long, value_name = "DIR", env = "FEATURE_MANIFEST_BASE", default_value = DEFAULT_BASE_ROOT)]
    pub base_root: PathBuf,

    /// Brand project root directory (overrides the base tree).
    ///
    /// Can also be set with the `FEATURE_MANIFEST_BRAND` environment variable.
    #[arg(long, value_name = "DIR", env = "FEATURE_MANIFEST_BRAND", default_value = DEFAULT_BRAND_ROOT)]
    pub brand_root: PathBuf,

    /// Root of the merged temp tree the bundler consumes.
    #[arg(long, value_name = "DIR", env = "FEATURE_MANIFEST_TEMP", default_value = DEFAULT_TEMP_ROOT)]
    pub temp_root: PathBuf,

    /// Path to the manifest file.
    ///
    /// Can also be set with the `FEATURE_MANIFEST_PATH` environment variable.
    #[arg(short, long, value_name = "FILE", env = "FEATURE_MANIFEST_PATH", default_value = DEFAULT_MANIFEST_FILENAME)]
    pub manifest: PathBuf,

    /// Override the base project identifier (defaults to the base root name).
    #[arg(long, value_name = "NAME")]
    pub base_project: Option<String>,

    /// Override the brand project identifier (defaults to the brand root name).
    #[arg(long, value_name = "NAME")]
    pub brand_project: Option<String>,
}

impl LayoutArgs {
    /// Build the layout these flags describe.
    pub fn layout(&self) -> Result<Layout> {
        let mut layout = Layout::new(
            &self.base_root,
            &self.brand_root,
            &self.temp_root,
            &self.manifest,
        )?;

        if let Some(project) = &self.base_project {
            layout.base_project = project.clone();
        }
        if let Some(project) = &self.brand_project {
            layout.brand_project = project.clone();
        }

        Ok(layout)
    }
}
