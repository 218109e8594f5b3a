//! Asset registration errors including I/O operations.

use pressbridge_vite_core::AssetError;
use thiserror::Error;

/// Asset registration errors including I/O operations.
#[derive(Error, Debug)]
pub enum ViteError {
    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error("Failed to write hot file {path}: {reason}")]
    HotFileWrite { path: String, reason: String },
}

pub type Result<T> = std::result::Result<T, ViteError>;
