//! # Ls Command Implementation
//!
//! This module implements the `ls` subcommand, which lists the feature
//! records in the manifest through one of the derived views.
//!
//! ## Functionality
//!
//! - **View Selection**: all, enabled, disabled, legacy, or active records
//! - **Name Output**: optional names-only format for scripting
//!
//! This command is a safe, read-only operation: it parses the manifest
//! (with the synthesized core feature prepended) and never touches the
//! filesystem beyond the manifest read.

use anyhow::Result;
use clap::{Args, ValueEnum};

use feature_manifest::manifest::{Feature, Manifest};

use super::LayoutArgs;

/// List manifest features through a derived view
#[derive(Args, Debug)]
pub struct LsArgs {
    #[command(flatten)]
    pub layout: LayoutArgs,

    /// Which view of the manifest to list.
    #[arg(short, long, value_enum, default_value = "all")]
    pub view: View,

    /// Print logical feature names only.
    #[arg(long)]
    pub names: bool,
}

/// Derived manifest views selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum View {
    /// Every record, core first
    #[default]
    All,
    /// Features participating in the build
    Enabled,
    /// Features switched off
    Disabled,
    /// Features flagged legacy
    Legacy,
    /// Features not flagged legacy
    Active,
}

/// Execute the `ls` command.
pub fn execute(args: LsArgs) -> Result<()> {
    let layout = args.layout.layout()?;
    let manifest = Manifest::load(&layout)?;

    let features: Vec<&Feature> = match args.view {
        View::All => manifest.features().iter().collect(),
        View::Enabled => manifest.enabled(),
        View::Disabled => manifest.disabled(),
        View::Legacy => manifest.legacy(),
        View::Active => manifest.active(),
    };

    for feature in features {
        if args.names {
            println!("{}", feature.name());
        } else {
            let status = if feature.enabled { "enabled" } else { "disabled" };
            let bundle = feature.client.bundle.as_deref().unwrap_or("-");
            let legacy = if feature.is_legacy() { " (legacy)" } else { "" };
            println!("{:<44} {:<9} {}{}", feature.package, status, bundle, legacy);
        }
    }

    Ok(())
}
