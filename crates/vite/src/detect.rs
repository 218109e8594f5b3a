//! Mode detection: hot file first, build manifest otherwise.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use pressbridge_vite_core::{AssetError, AssetMode, AssetOptions, Manifest};

use crate::env::AssetEnvironment;

/// Pick the asset mode for one registration.
///
/// A readable, non-empty hot file selects `Live`. Anything else falls
/// through to the build manifest, which must exist and parse.
pub fn detect_mode(env: &AssetEnvironment, options: &AssetOptions) -> Result<AssetMode, AssetError> {
    match read_hot_file(&env.hot_file_path(options)) {
        Some(url) => Ok(AssetMode::Live { url }),
        None => detect_built(env, options),
    }
}

/// Load the build manifest and pair it with the build base URL.
pub fn detect_built(env: &AssetEnvironment, options: &AssetOptions) -> Result<AssetMode, AssetError> {
    let manifest = load_manifest(&env.manifest_path(options))?;

    Ok(AssetMode::Built {
        manifest,
        base_url: env.build_url(options),
    })
}

/// Dev server URL from the hot file, if there is a usable one.
///
/// Never fails: a missing file is the normal production signal.
pub fn read_hot_file(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(contents) => {
            let url = contents.trim();
            if url.is_empty() {
                tracing::warn!(path = %path.display(), "Ignoring empty hot file");
                None
            } else {
                Some(url.to_string())
            }
        }
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Hot file not readable");
            None
        }
    }
}

/// Read and parse `manifest.json`.
pub fn load_manifest(path: &Path) -> Result<Manifest, AssetError> {
    let display = path.display().to_string();

    match fs::read_to_string(path) {
        Ok(contents) => Manifest::parse(&contents, &display),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(AssetError::ManifestMissing {
            dir: path
                .parent()
                .map(|dir| dir.display().to_string())
                .unwrap_or(display),
        }),
        Err(e) => Err(AssetError::ManifestUnreadable {
            path: display,
            reason: e.to_string(),
        }),
    }
}
