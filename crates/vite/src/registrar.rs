//! Asset registration with the debug failure policy.

use std::sync::Arc;
use std::time::Duration;

use pressbridge_vite_core::{resolve_assets, AssetError, AssetMode, AssetOptions, AssetSet};

use crate::detect::{detect_built, detect_mode};
use crate::env::AssetEnvironment;
use crate::error::Result;
use crate::filter::{AssetFilter, NoopFilter};
use crate::probe::probe_dev_server;

/// Resolves the assets of an entry point for one page render.
///
/// The hot file and manifest are read on every call; nothing is cached
/// between renders.
#[derive(Clone)]
pub struct AssetRegistrar {
    env: AssetEnvironment,
    filter: Arc<dyn AssetFilter>,
    probe_timeout: Option<Duration>,
}

impl AssetRegistrar {
    pub fn new(env: AssetEnvironment) -> Self {
        Self {
            env,
            filter: Arc::new(NoopFilter),
            probe_timeout: None,
        }
    }

    pub fn with_filter(mut self, filter: impl AssetFilter + 'static) -> Self {
        self.filter = Arc::new(filter);
        self
    }

    /// Confirm the dev server is reachable before trusting the hot file.
    pub fn with_probe(mut self, timeout: Duration) -> Self {
        self.probe_timeout = Some(timeout);
        self
    }

    pub fn environment(&self) -> &AssetEnvironment {
        &self.env
    }

    /// Current mode, without resolving any entry.
    pub fn mode(&self, options: &AssetOptions) -> std::result::Result<AssetMode, AssetError> {
        detect_mode(&self.env, options)
    }

    /// Register the assets of `options`.
    ///
    /// Returns `Ok(None)` when registration was skipped because of an asset
    /// error outside debug mode. In debug mode the error is returned.
    pub fn register(&self, options: &AssetOptions) -> Result<Option<AssetSet>> {
        self.finish(detect_mode(&self.env, options), options)
    }

    /// Like [`register`](Self::register), but a hot file whose dev server
    /// does not answer the probe is treated as stale.
    pub async fn register_checked(&self, options: &AssetOptions) -> Result<Option<AssetSet>> {
        let mode = match (detect_mode(&self.env, options), self.probe_timeout) {
            (Ok(AssetMode::Live { url }), Some(timeout)) => {
                if probe_dev_server(&url, timeout).await {
                    Ok(AssetMode::Live { url })
                } else {
                    tracing::warn!(url = %url, "Dev server unreachable, falling back to build manifest");
                    detect_built(&self.env, options)
                }
            }
            (mode, _) => mode,
        };

        self.finish(mode, options)
    }

    fn finish(
        &self,
        mode: std::result::Result<AssetMode, AssetError>,
        options: &AssetOptions,
    ) -> Result<Option<AssetSet>> {
        match mode.and_then(|mode| self.resolve(mode, options)) {
            Ok(assets) => {
                tracing::debug!(
                    handle = %options.handle,
                    scripts = assets.scripts.len(),
                    styles = assets.styles.len(),
                    "Assets registered"
                );
                Ok(Some(assets))
            }
            Err(e) if self.env.debug => {
                tracing::error!(error = %e, "Asset registration failed");
                Err(e.into())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Skipping asset registration");
                Ok(None)
            }
        }
    }

    fn resolve(
        &self,
        mode: AssetMode,
        options: &AssetOptions,
    ) -> std::result::Result<AssetSet, AssetError> {
        match mode {
            AssetMode::Built { manifest, base_url } => {
                let mode = AssetMode::Built {
                    manifest: self.filter.manifest(manifest),
                    base_url,
                };
                let assets = resolve_assets(options, &mode)?;
                Ok(self.filter.build_assets(assets, options))
            }
            live @ AssetMode::Live { .. } => {
                let assets = resolve_assets(options, &live)?;
                Ok(self.filter.development_assets(assets, options))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pressbridge_vite_core::{Manifest, ManifestChunk, StyleHandle};
    use tempfile::TempDir;

    use super::*;
    use crate::error::ViteError;

    const MANIFEST: &str = r#"{"src/app.js": {"file":"assets/app-abc123.js","css":["assets/app-abc123.css"]}}"#;

    fn project(debug: bool) -> (TempDir, AssetRegistrar) {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("public/build")).unwrap();
        let env = AssetEnvironment::new(dir.path(), "https://site.test", debug);
        (dir, AssetRegistrar::new(env))
    }

    fn options() -> AssetOptions {
        AssetOptions::new("src/app.js").unwrap()
    }

    #[test]
    fn test_register_built() {
        let (dir, registrar) = project(false);
        fs::write(dir.path().join("public/build/manifest.json"), MANIFEST).unwrap();

        let assets = registrar.register(&options()).unwrap().unwrap();

        assert_eq!(assets.scripts[0].src, "https://site.test/build/assets/app-abc123.js");
        assert_eq!(assets.styles[0].href, "https://site.test/build/assets/app-abc123.css");
    }

    #[test]
    fn test_register_live_ignores_manifest_state() {
        let (dir, registrar) = project(true);
        fs::write(dir.path().join("public/hot"), "http://localhost:5173").unwrap();

        let assets = registrar.register(&options()).unwrap().unwrap();

        assert!(assets
            .scripts
            .iter()
            .all(|script| script.src.starts_with("http://localhost:5173/")));
    }

    #[test]
    fn test_missing_manifest_skipped_outside_debug() {
        let (_dir, registrar) = project(false);

        assert!(registrar.register(&options()).unwrap().is_none());
    }

    #[test]
    fn test_missing_manifest_fatal_in_debug() {
        let (_dir, registrar) = project(true);

        let result = registrar.register(&options());

        assert!(matches!(
            result,
            Err(ViteError::Asset(AssetError::ManifestMissing { .. }))
        ));
    }

    #[test]
    fn test_missing_entry_policy() {
        let (dir, registrar) = project(false);
        fs::write(dir.path().join("public/build/manifest.json"), MANIFEST).unwrap();
        let missing = AssetOptions::new("src/other.js").unwrap();

        assert!(registrar.register(&missing).unwrap().is_none());

        let debug = AssetRegistrar::new(AssetEnvironment::new(dir.path(), "", true));
        assert!(matches!(
            debug.register(&missing),
            Err(ViteError::Asset(AssetError::AssetNotFound { .. }))
        ));
    }

    #[test]
    fn test_register_twice_is_identical() {
        let (dir, registrar) = project(false);
        fs::write(dir.path().join("public/build/manifest.json"), MANIFEST).unwrap();

        assert_eq!(
            registrar.register(&options()).unwrap(),
            registrar.register(&options()).unwrap()
        );
    }

    struct ExtraStyle;

    impl AssetFilter for ExtraStyle {
        fn manifest(&self, mut manifest: Manifest) -> Manifest {
            manifest.insert(
                "src/app.js",
                ManifestChunk {
                    file: "assets/patched.js".to_string(),
                    css: Vec::new(),
                },
            );
            manifest
        }

        fn build_assets(&self, mut assets: AssetSet, _options: &AssetOptions) -> AssetSet {
            assets
                .styles
                .push(StyleHandle::new("fonts", "https://fonts.test/inter.css"));
            assets
        }
    }

    #[test]
    fn test_filter_hooks_applied() {
        let (dir, registrar) = project(false);
        fs::write(dir.path().join("public/build/manifest.json"), MANIFEST).unwrap();
        let registrar = registrar.with_filter(ExtraStyle);

        let assets = registrar.register(&options()).unwrap().unwrap();

        assert_eq!(assets.scripts[0].src, "https://site.test/build/assets/patched.js");
        assert_eq!(assets.styles.len(), 1);
        assert_eq!(assets.styles[0].handle, "fonts");
    }

    #[tokio::test]
    async fn test_stale_hot_file_falls_back_when_probing() {
        let (dir, registrar) = project(false);
        fs::write(dir.path().join("public/hot"), "http://127.0.0.1:9").unwrap();
        fs::write(dir.path().join("public/build/manifest.json"), MANIFEST).unwrap();
        let registrar = registrar.with_probe(Duration::from_millis(200));

        let assets = registrar.register_checked(&options()).await.unwrap().unwrap();

        assert_eq!(assets.scripts.len(), 1);
        assert!(assets.scripts[0].src.starts_with("https://site.test/build/"));
    }
}
