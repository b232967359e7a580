//! Bundles command implementation
//!
//! Prints the bundle-to-entry-path mappings the build-config assembler
//! consumes. With `--bundle` the output is restricted to one bundle; with
//! `--feature` it is restricted to a single target feature's bundle
//! membership and entry, the lookup an incremental watch rebuild performs.

use anyhow::Result;
use clap::Args;

use feature_manifest::bundles;
use feature_manifest::manifest::Manifest;

use super::LayoutArgs;

/// Arguments for the bundles command
#[derive(Args, Debug)]
pub struct BundlesArgs {
    #[command(flatten)]
    pub layout: LayoutArgs,

    /// Restrict output to one bundle.
    #[arg(short, long, value_name = "NAME")]
    pub bundle: Option<String>,

    /// Restrict output to a single target feature.
    #[arg(short, long, value_name = "NAME", conflicts_with = "bundle")]
    pub feature: Option<String>,
}

/// Execute the bundles command
pub fn execute(args: BundlesArgs) -> Result<()> {
    let layout = args.layout.layout()?;
    let manifest = Manifest::load(&layout)?;

    if let Some(feature) = &args.feature {
        let (bundle, entry) = bundles::feature_entry(&manifest, &layout, feature)
            .ok_or_else(|| anyhow::anyhow!("Feature '{}' is not in any bundle", feature))?;
        println!("{}: {}", bundle, entry.display());
        return Ok(());
    }

    let mappings = bundles::entry_mappings(&manifest, &layout);

    if let Some(bundle) = &args.bundle {
        let entries = mappings
            .get(bundle)
            .ok_or_else(|| anyhow::anyhow!("Unknown bundle '{}'", bundle))?;
        for entry in entries {
            println!("{}", entry.display());
        }
        return Ok(());
    }

    for (bundle, entries) in &mappings {
        println!("{}:", bundle);
        for entry in entries {
            println!("  {}", entry.display());
        }
    }

    Ok(())
}
