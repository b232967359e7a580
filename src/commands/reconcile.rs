//! Reconcile command implementation
//!
//! The reconcile command executes the full manifest write pass:
//! 1. Discover features in the base and brand trees
//! 2. Resolve overrides (brand wins on a shared name)
//! 3. Preserve prior manifest records whose package is unchanged
//! 4. Persist the reconciled registry atomically

use std::time::Instant;

use anyhow::Result;
use clap::Args;

use feature_manifest::output::{emoji, OutputConfig};
use feature_manifest::reconcile;

use super::LayoutArgs;

/// Arguments for the reconcile command
#[derive(Args, Debug)]
pub struct ReconcileArgs {
    #[command(flatten)]
    pub layout: LayoutArgs,

    /// Show what would be written without touching the manifest
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Show detailed progress information
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the reconcile command
pub fn execute(args: ReconcileArgs, output: &OutputConfig) -> Result<()> {
    let start_time = Instant::now();
    let layout = args.layout.layout()?;

    if !args.quiet {
        println!(
            "{} Feature Manifest Reconcile",
            emoji(output, "🔍", "[SCAN]")
        );
        println!();

        if args.dry_run {
            println!(
                "{} DRY RUN MODE - No changes will be made",
                emoji(output, "🔎", "[DRY-RUN]")
            );
            println!();
        }
    }

    if !args.quiet && args.verbose {
        println!(
            "{} Base features:  {}",
            emoji(output, "📋", "[BASE]"),
            layout.base_features().display()
        );
        println!(
            "{} Brand features: {}",
            emoji(output, "📋", "[BRAND]"),
            layout.brand_features().display()
        );
        println!();
    }

    let result = if args.dry_run {
        reconcile::reconcile(&layout)
    } else {
        reconcile::reconcile_and_write(&layout)
    };

    match result {
        Ok(reconciliation) => {
            let duration = start_time.elapsed();

            if !args.quiet {
                println!(
                    "{} Reconciled successfully in {:.2}s",
                    emoji(output, "✅", "[OK]"),
                    duration.as_secs_f64()
                );
                println!("   {} feature(s) resolved", reconciliation.models.len());

                if args.verbose {
                    for model in &reconciliation.models {
                        println!("   {}", model.package);
                    }
                }

                if !args.dry_run {
                    println!("   Manifest written to: {}", layout.manifest_path.display());
                }
            }

            Ok(())
        }
        Err(e) => {
            if !args.quiet {
                println!("{} Reconcile failed", emoji(output, "❌", "[FAIL]"));
                println!();
            }
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn args_in(temp: &TempDir, dry_run: bool) -> ReconcileArgs {
        ReconcileArgs {
            layout: LayoutArgs {
                base_root: temp.path().join("base"),
                brand_root: temp.path().join("brand"),
                temp_root: temp.path().join(".tmp"),
                manifest: temp.path().join("manifest.json"),
                base_project: None,
                brand_project: None,
            },
            dry_run,
            verbose: false,
            quiet: true,
        }
    }

    fn add_feature(root: &Path, name: &str) {
        fs::create_dir_all(root.join("features").join(name)).unwrap();
    }

    #[test]
    fn test_execute_writes_manifest() {
        let temp = TempDir::new().unwrap();
        let args = args_in(&temp, false);
        add_feature(&args.layout.base_root, "homepage");

        execute(args, &OutputConfig::from_env_and_flag("never")).unwrap();

        let written = fs::read_to_string(temp.path().join("manifest.json")).unwrap();
        assert!(written.contains("base.features.homepage"));
    }

    #[test]
    fn test_execute_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let args = args_in(&temp, true);
        add_feature(&args.layout.base_root, "homepage");

        execute(args, &OutputConfig::from_env_and_flag("never")).unwrap();

        assert!(!temp.path().join("manifest.json").exists());
    }

    #[test]
    fn test_execute_empty_trees_succeed() {
        let temp = TempDir::new().unwrap();
        let args = args_in(&temp, false);

        execute(args, &OutputConfig::from_env_and_flag("never")).unwrap();

        let written = fs::read_to_string(temp.path().join("manifest.json")).unwrap();
        assert!(written.contains("\"features\": []"));
    }

    #[test]
    fn test_execute_malformed_prior_manifest_fails() {
        let temp = TempDir::new().unwrap();
        let args = args_in(&temp, false);
        add_feature(&args.layout.base_root, "homepage");
        fs::write(temp.path().join("manifest.json"), "{broken").unwrap();

        let result = execute(args, &OutputConfig::from_env_and_flag("never"));
        assert!(result.is_err());
    }
}
