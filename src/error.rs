//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for the
//! `feature-manifest` application. It uses the `thiserror` library to create
//! an `Error` enum that covers all anticipated failure modes, providing clear
//! and descriptive error messages.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum that represents all possible errors that can
//!   occur within the application. Each variant corresponds to a specific
//!   type of error and includes contextual information to aid in debugging.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the application to simplify function signatures.
//!
//! Only the manifest read and manifest write paths can actually fail at
//! runtime; discovery, parsed views, and bundle grouping treat absent
//! inputs as empty results. The variants here therefore concentrate on the
//! manifest file itself plus the validation errors surfaced by the resolver
//! and the `check` command.

use thiserror::Error;

/// Main error type for feature-manifest operations
#[derive(Error, Debug)]
pub enum Error {
    /// The persisted manifest file could not be read.
    ///
    /// This is fatal: the build cannot proceed without the manifest, so the
    /// error names the offending path and is never retried.
    #[error("Failed to read manifest {path}: {message}")]
    ManifestRead { path: String, message: String },

    /// The manifest file content is not valid JSON.
    ///
    /// No partial manifest is ever accepted; a manifest that fails to parse
    /// aborts the invoking build step.
    #[error("Failed to parse manifest {path}: {message}")]
    ManifestParse { path: String, message: String },

    /// The reconciled manifest could not be persisted.
    #[error("Failed to write manifest {path}: {message}")]
    ManifestWrite { path: String, message: String },

    /// Two records on the same side of a resolver merge share a join key.
    #[error("Duplicate join key in resolver input: {key}")]
    DuplicateKey { key: String },

    /// An error occurred with a path-related operation.
    #[error("Path operation error: {message}")]
    Path { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON serialization error, wrapped from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A glob pattern error, wrapped from `glob::PatternError`.
    #[error("Glob pattern error: {0}")]
    Glob(#[from] glob::PatternError),

    /// A regular expression error, wrapped from `regex::Error`.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_manifest_read() {
        let error = Error::ManifestRead {
            path: "manifest.json".to_string(),
            message: "No such file or directory".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to read manifest"));
        assert!(display.contains("manifest.json"));
        assert!(display.contains("No such file or directory"));
    }

    #[test]
    fn test_error_display_manifest_parse() {
        let error = Error::ManifestParse {
            path: "manifest.json".to_string(),
            message: "expected value at line 1".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse manifest"));
        assert!(display.contains("expected value at line 1"));
    }

    #[test]
    fn test_error_display_manifest_write() {
        let error = Error::ManifestWrite {
            path: "manifest.json".to_string(),
            message: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write manifest"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_error_display_duplicate_key() {
        let error = Error::DuplicateKey {
            key: "homepage".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Duplicate join key"));
        assert!(display.contains("homepage"));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let error: Error = io_error.into();
        let display = format!("{}", error);
        assert!(display.contains("I/O error"));
        assert!(display.contains("File not found"));
    }

    #[test]
    fn test_error_from_json_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{unclosed").unwrap_err();
        let error: Error = json_error.into();
        let display = format!("{}", error);
        assert!(display.contains("JSON error"));
    }

    #[test]
    fn test_error_from_regex_error() {
        let regex_error = regex::Error::Syntax("Invalid regex".to_string());
        let error: Error = regex_error.into();
        let display = format!("{}", error);
        assert!(display.contains("Regex error"));
    }
}
