//! Paths command implementation
//!
//! Prints the project glob paths asset pipelines sweep: every enabled
//! feature directory joined with a glob suffix, across the complete base
//! view (base features plus brand overrides rewritten to the base root)
//! and the brand view. With `--temp` the paths come from the merged temp
//! tree on disk instead of the manifest.

use std::path::Path;

use anyhow::Result;
use clap::{Args, ValueEnum};

use feature_manifest::bundles;
use feature_manifest::globs;
use feature_manifest::manifest::Manifest;

use super::LayoutArgs;

/// Arguments for the paths command
#[derive(Args, Debug)]
pub struct PathsArgs {
    #[command(flatten)]
    pub layout: LayoutArgs,

    /// Glob suffix kind appended to each feature directory.
    #[arg(short, long, value_enum, default_value = "all")]
    pub kind: SuffixKind,

    /// Custom glob suffix appended to each feature directory.
    #[arg(long, value_name = "GLOB", conflicts_with = "kind")]
    pub suffix: Option<String>,

    /// List the merged temp tree instead of the project trees.
    #[arg(long)]
    pub temp: bool,
}

/// Built-in glob suffix kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum SuffixKind {
    /// All client-side files (html, j2, js)
    #[default]
    All,
    /// JavaScript files
    Js,
    /// CSS files
    Css,
    /// HTML and template files
    Html,
    /// SCSS files
    Scss,
}

/// Execute the paths command
pub fn execute(args: PathsArgs) -> Result<()> {
    let layout = args.layout.layout()?;

    let suffix: Box<dyn Fn(&Path) -> String> = match &args.suffix {
        Some(custom) => {
            let custom = custom.clone();
            Box::new(move |dir: &Path| dir.join(&custom).to_string_lossy().into_owned())
        }
        None => match args.kind {
            SuffixKind::All => Box::new(globs::all_glob),
            SuffixKind::Js => Box::new(globs::js_glob),
            SuffixKind::Css => Box::new(globs::css_glob),
            SuffixKind::Html => Box::new(globs::html_glob),
            SuffixKind::Scss => Box::new(globs::scss_glob),
        },
    };

    let paths = if args.temp {
        bundles::temp_glob_paths(&layout, suffix)
    } else {
        let manifest = Manifest::load(&layout)?;
        bundles::project_glob_paths(&manifest, &layout, &[suffix])
    };

    for path in paths {
        println!("{}", path);
    }

    Ok(())
}
