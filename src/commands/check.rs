//! Check command implementation
//!
//! Validates the manifest without modifying anything:
//! - duplicate logical feature names (the same rule the resolver enforces
//!   during reconciliation)
//! - malformed package identifiers
//! - enabled, non-legacy features that are wired to no bundle (a warning,
//!   never a failure: such features are excluded from every bundle by
//!   design)
//!
//! Read and parse failures propagate as fatal errors; validation findings
//! exit non-zero only for the two hard rules above.

use std::collections::BTreeMap;

use anyhow::Result;
use clap::Args;
use log::warn;
use regex::Regex;

use feature_manifest::manifest::Manifest;
use feature_manifest::output::{emoji, OutputConfig};

use super::LayoutArgs;

/// Package identifiers must be `<project>.features.<name>`.
const PACKAGE_PATTERN: &str = r"^[A-Za-z][A-Za-z0-9_-]*\.features\.[A-Za-z0-9_-]+$";

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub layout: LayoutArgs,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the check command
pub fn execute(args: CheckArgs, output: &OutputConfig) -> Result<()> {
    let layout = args.layout.layout()?;
    let manifest = Manifest::load(&layout)?;
    let package_re = Regex::new(PACKAGE_PATTERN)?;

    let mut errors = Vec::new();

    // Duplicate logical names would make override resolution ambiguous.
    let mut name_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for feature in manifest.features() {
        *name_counts.entry(feature.name()).or_default() += 1;
    }
    for (name, count) in name_counts {
        if count > 1 {
            errors.push(format!("Duplicate feature name '{}' ({} records)", name, count));
        }
    }

    for feature in manifest.features() {
        if !package_re.is_match(&feature.package) {
            errors.push(format!("Malformed package identifier '{}'", feature.package));
        }
    }

    let mut warnings = Vec::new();
    for feature in manifest.enabled() {
        if !feature.is_legacy() && feature.client.bundle.is_none() {
            warn!("Feature '{}' is wired to no bundle", feature.name());
            warnings.push(format!(
                "Feature '{}' has no bundle and is excluded from every bundle",
                feature.name()
            ));
        }
    }

    if !args.quiet {
        println!(
            "{} Checked {} feature record(s) in {}",
            emoji(output, "🔍", "[CHECK]"),
            manifest.features().len(),
            layout.manifest_path.display()
        );

        for warning in &warnings {
            println!("{} {}", emoji(output, "⚠️ ", "[WARN]"), warning);
        }
        for error in &errors {
            println!("{} {}", emoji(output, "❌", "[ERROR]"), error);
        }

        if errors.is_empty() {
            println!("{} Manifest is valid", emoji(output, "✅", "[OK]"));
        }
    }

    if !errors.is_empty() {
        anyhow::bail!("Manifest validation failed with {} error(s)", errors.len());
    }

    Ok(())
}
