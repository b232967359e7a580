//! Development automation tasks for feature-manifest.
//!
//! This crate provides `cargo xtask` commands for common development tasks
//! that are too complex for shell scripts or require cross-platform support.
//!
//! # Usage
//!
//! ```bash
//! cargo xtask coverage   # Run test coverage with cargo-tarpaulin
//! cargo xtask fixture    # Scaffold a demo base/brand feature tree
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development automation tasks for feature-manifest")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run test coverage with cargo-tarpaulin
    Coverage {
        /// Output format (html, json, xml, or lcov)
        #[arg(long, short, default_value = "html")]
        format: String,
        /// Minimum coverage threshold (0-100)
        #[arg(long)]
        fail_under: Option<u8>,
    },
    /// Scaffold a demo base/brand feature tree for manual runs
    Fixture {
        /// Directory to create the fixture in
        #[arg(long, short, default_value = "target/fixture")]
        dir: PathBuf,
        /// Feature names created in both trees
        #[arg(long, value_delimiter = ',', default_value = "homepage,category")]
        shared: Vec<String>,
        /// Feature names created only in the brand tree
        #[arg(long, value_delimiter = ',', default_value = "checkout")]
        brand_only: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Find workspace root
    let workspace_root = workspace_root()?;
    env::set_current_dir(&workspace_root).with_context(|| {
        format!(
            "Failed to change to workspace root: {}",
            workspace_root.display()
        )
    })?;

    match cli.command {
        Commands::Coverage { format, fail_under } => run_coverage(&format, fail_under),
        Commands::Fixture {
            dir,
            shared,
            brand_only,
        } => run_fixture(&dir, &shared, &brand_only),
    }
}

/// Find the workspace root directory.
fn workspace_root() -> Result<PathBuf> {
    let output = Command::new("cargo")
        .args(["locate-project", "--workspace", "--message-format=plain"])
        .output()
        .context("Failed to run 'cargo locate-project'")?;

    if !output.status.success() {
        bail!("Failed to locate workspace root");
    }

    let path = String::from_utf8(output.stdout).context("Invalid UTF-8 in cargo output")?;
    let path = PathBuf::from(path.trim());

    // The output is Cargo.toml path, we need the directory
    path.parent()
        .map(|p| p.to_path_buf())
        .context("Failed to get parent directory of Cargo.toml")
}

/// Run test coverage with cargo-tarpaulin.
fn run_coverage(format: &str, fail_under: Option<u8>) -> Result<()> {
    if !is_command_available("cargo-tarpaulin") {
        println!("cargo-tarpaulin is not installed.");
        println!("Install with: cargo install cargo-tarpaulin");
        bail!("cargo-tarpaulin not found");
    }

    let mut args = vec!["tarpaulin".to_string()];

    let report_path = match format.to_lowercase().as_str() {
        "html" => {
            args.push("--out".to_string());
            args.push("Html".to_string());
            "target/tarpaulin/tarpaulin-report.html"
        }
        "json" => {
            args.push("--out".to_string());
            args.push("Json".to_string());
            "target/tarpaulin/tarpaulin-report.json"
        }
        "xml" => {
            args.push("--out".to_string());
            args.push("Xml".to_string());
            "target/tarpaulin/cobertura.xml"
        }
        "lcov" => {
            args.push("--out".to_string());
            args.push("Lcov".to_string());
            "target/tarpaulin/lcov.info"
        }
        _ => {
            bail!("Unknown format '{}'. Use: html, json, xml, or lcov", format);
        }
    };

    if let Some(threshold) = fail_under {
        args.push("--fail-under".to_string());
        args.push(threshold.to_string());
    }

    println!("Running coverage...");
    let status = run_cargo(&args)?;

    if !status.success() {
        if fail_under.is_some() {
            bail!("Coverage is below the required threshold");
        }
        bail!("Coverage failed");
    }

    println!();
    println!("Coverage report: {}", report_path);

    Ok(())
}

/// Scaffold a base/brand feature tree the CLI can reconcile immediately.
fn run_fixture(dir: &PathBuf, shared: &[String], brand_only: &[String]) -> Result<()> {
    for name in shared {
        scaffold_feature(&dir.join("base"), name)?;
        scaffold_feature(&dir.join("brand"), name)?;
    }
    for name in brand_only {
        scaffold_feature(&dir.join("brand"), name)?;
    }

    println!("Fixture created in {}", dir.display());
    println!();
    println!("Try it:");
    println!(
        "  cargo run -- reconcile --base-root {base} --brand-root {brand} --manifest {manifest}",
        base = dir.join("base").display(),
        brand = dir.join("brand").display(),
        manifest = dir.join("manifest.json").display(),
    );

    Ok(())
}

/// Create one feature directory with a stub entry file.
fn scaffold_feature(root: &PathBuf, name: &str) -> Result<()> {
    let js_dir = root.join("features").join(name).join("js");
    fs::create_dir_all(&js_dir)
        .with_context(|| format!("Failed to create {}", js_dir.display()))?;
    fs::write(
        js_dir.join("index.js"),
        format!("export default '{}';\n", name),
    )
    .with_context(|| format!("Failed to write entry for {}", name))?;
    Ok(())
}

/// Check if a command is available in PATH.
fn is_command_available(cmd: &str) -> bool {
    Command::new(cmd)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Run a cargo command.
fn run_cargo(args: &[String]) -> Result<ExitStatus> {
    Command::new("cargo")
        .args(args)
        .status()
        .with_context(|| format!("Failed to run cargo {}", args.join(" ")))
}
