//! Error types emitted by the Wayfinder CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use wayfinder_core::{ParseThemePreferenceError, RecommendationError};

/// Errors emitted by the Wayfinder CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The requested panel size was zero.
    #[error("--{field} must be at least 1")]
    InvalidTop { field: &'static str },
    /// The output format is not recognised.
    #[error("unknown output format {value:?} (expected \"text\" or \"json\")")]
    InvalidFormat { value: String },
    /// The theme action is not recognised.
    #[error("unknown theme action {value:?} (expected show, toggle, light or dark)")]
    InvalidThemeAction { value: String },
    /// Reading the point set failed.
    #[error("failed to read points from {path:?}: {source}")]
    ReadPoints {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The point set JSON could not be decoded.
    #[error("failed to parse points JSON at {path:?}: {source}")]
    ParsePoints {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The recommendation was refused.
    #[error(transparent)]
    Recommend(#[from] RecommendationError),
    /// Serialising the recommendation failed.
    #[error("failed to serialise recommendation: {0}")]
    SerialiseRecommendation(#[source] serde_json::Error),
    /// Writing to standard output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
    /// Reading the stored theme failed.
    #[error("failed to read theme preference from {path:?}: {source}")]
    ReadTheme {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The stored theme is not a known preference.
    #[error("theme file {path:?} is invalid: {source}")]
    ParseTheme {
        path: Utf8PathBuf,
        #[source]
        source: ParseThemePreferenceError,
    },
    /// Persisting the theme failed.
    #[error("failed to write theme preference to {path:?}: {source}")]
    WriteTheme {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}
