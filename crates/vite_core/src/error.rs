//! Asset error types (pure - no I/O variants).

use thiserror::Error;

/// Setup-time configuration errors. Always fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing configuration for \"input\"")]
    MissingInput,

    #[error("publicDirectory must be a subdirectory, e.g. 'public'")]
    InvalidPublicDirectory,

    #[error("buildDirectory must be a subdirectory, e.g. 'build'")]
    InvalidBuildDirectory,

    #[error("Script handle must not be empty")]
    InvalidHandle,
}

/// Render-time asset errors. Fatal in debug mode, skipped otherwise.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    #[error("No manifest found in {dir}")]
    ManifestMissing { dir: String },

    #[error("Failed to read manifest {path}: {reason}")]
    ManifestUnreadable { path: String, reason: String },

    #[error("Manifest {path} contains invalid data: {reason}")]
    ManifestInvalid { path: String, reason: String },

    #[error("Input {input} not found in manifest")]
    AssetNotFound { input: String },
}

pub type Result<T> = std::result::Result<T, AssetError>;
