//! Where the project lives on disk and on the web.

use std::path::PathBuf;

use pressbridge_vite_core::AssetOptions;

/// Filesystem and URL layout shared by every registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEnvironment {
    /// Project root; hot file and public directory paths are relative to it.
    pub root: PathBuf,
    /// URL the public directory is served from. Empty means site-relative.
    pub public_url: String,
    /// Fail loudly on asset errors instead of skipping registration.
    pub debug: bool,
}

impl AssetEnvironment {
    pub fn new(root: impl Into<PathBuf>, public_url: impl Into<String>, debug: bool) -> Self {
        Self {
            root: root.into(),
            public_url: public_url.into(),
            debug,
        }
    }

    pub fn hot_file_path(&self, options: &AssetOptions) -> PathBuf {
        self.root.join(&options.hot_file)
    }

    pub fn build_dir(&self, options: &AssetOptions) -> PathBuf {
        self.root.join(options.build_path())
    }

    pub fn manifest_path(&self, options: &AssetOptions) -> PathBuf {
        self.root.join(options.manifest_path())
    }

    /// Base URL of compiled assets, e.g. `https://site.test/build`.
    pub fn build_url(&self, options: &AssetOptions) -> String {
        format!(
            "{}/{}",
            self.public_url.trim_end_matches('/'),
            options.build_directory
        )
    }
}
