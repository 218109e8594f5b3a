//! Hot file lifecycle for a running dev server.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ViteError};

/// Publishes a dev server URL to the hot file and removes it on drop.
///
/// Keep the guard alive for as long as the dev server runs.
#[derive(Debug)]
pub struct HotFileGuard {
    path: PathBuf,
}

impl HotFileGuard {
    pub fn publish(path: impl Into<PathBuf>, url: &str) -> Result<Self> {
        let path = path.into();

        fs::write(&path, url).map_err(|e| ViteError::HotFileWrite {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        tracing::info!(path = %path.display(), url, "Hot file published");

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for HotFileGuard {
    fn drop(&mut self) {
        if !self.path.exists() {
            return;
        }

        match fs::remove_file(&self.path) {
            Ok(()) => tracing::info!(path = %self.path.display(), "Hot file removed"),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to remove hot file")
            }
        }
    }
}
