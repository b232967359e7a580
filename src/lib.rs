//! # Feature Manifest Library
//!
//! This library provides the core functionality for resolving a build-time
//! feature manifest across two parallel project trees. It is designed to be
//! used by the `feature-manifest` command-line tool but can also be
//! integrated into build tooling that consumes the bundle mappings
//! directly.
//!
//! ## Quick Example
//!
//! ```no_run
//! use feature_manifest::config::Layout;
//! use feature_manifest::manifest::Manifest;
//! use feature_manifest::{bundles, reconcile};
//!
//! # fn main() -> feature_manifest::error::Result<()> {
//! // Describe where the two project trees and the manifest live
//! let layout = Layout::new("base", "brand", ".tmp", "manifest.json")?;
//!
//! // Reconcile discovered features with the manifest and persist it
//! reconcile::reconcile_and_write(&layout)?;
//!
//! // Read it back and derive the bundle entry mappings
//! let manifest = Manifest::load(&layout)?;
//! let mappings = bundles::entry_mappings(&manifest, &layout);
//! # let _ = mappings;
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Concepts
//!
//! The library is built around a few key concepts:
//!
//! - **Layout (`config`)**: The explicit description of the base project
//!   root, the brand project root that overrides it, the merged temp tree,
//!   and the manifest file.
//! - **Discovery (`discovery`, `globs`)**: One-level-deep scanning of the
//!   two feature trees into candidate feature names, tolerant of missing
//!   directories.
//! - **Resolution (`resolver`)**: A generic keyed two-list merge with a
//!   caller-supplied conflict function; brand-overrides-base is one
//!   instance of it.
//! - **Manifest (`manifest`, `reconcile`)**: The persisted JSON registry of
//!   feature records, re-parsed fresh on every read with the implicit core
//!   feature prepended, and rewritten atomically by reconciliation.
//! - **Bundles (`bundles`)**: Derived groupings of enabled features and
//!   their entry paths, handed to the external build-config assembler.
//!
//! ## Execution Flow
//!
//! A build invocation runs discovery over both trees, reconciles the
//! result against the prior manifest state (brand entries winning on name
//! collisions), persists the registry, then re-reads it to derive the
//! enabled-feature set and the bundle-to-entry-path mappings. Every
//! derived view is a pure function of the persisted manifest content.

pub mod bundles;
pub mod config;
pub mod defaults;
pub mod discovery;
pub mod error;
pub mod globs;
pub mod manifest;
pub mod output;
pub mod reconcile;
pub mod resolver;
