//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use feature_manifest::output::OutputConfig;

use crate::commands;

/// Feature Manifest - Resolve base/brand feature trees into a bundling manifest
#[derive(Parser, Debug)]
#[command(name = "feature-manifest")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Reconcile discovered features into the manifest
    Reconcile(commands::reconcile::ReconcileArgs),

    /// List manifest features through a derived view
    Ls(commands::ls::LsArgs),

    /// Print bundle-to-entry-path mappings
    Bundles(commands::bundles::BundlesArgs),

    /// Print project glob paths for asset tooling
    Paths(commands::paths::PathsArgs),

    /// Validate the manifest
    Check(commands::check::CheckArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);
        let output = OutputConfig::from_env_and_flag(&self.color);

        match self.command {
            Commands::Reconcile(args) => commands::reconcile::execute(args, &output),
            Commands::Ls(args) => commands::ls::execute(args),
            Commands::Bundles(args) => commands::bundles::execute(args),
            Commands::Paths(args) => commands::paths::execute(args),
            Commands::Check(args) => commands::check::execute(args, &output),
        }
    }
}

/// Initialize the logger from the global --log-level flag.
fn init_logging(level: &str) {
    let level = level.parse().unwrap_or(log::LevelFilter::Warn);
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .try_init()
        .ok();
}
