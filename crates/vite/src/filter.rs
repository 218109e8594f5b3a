//! Hooks that let the host adjust what gets registered.

use pressbridge_vite_core::{AssetOptions, AssetSet, Manifest};

/// Adjust the manifest or the resolved assets before they are returned.
///
/// Every hook defaults to returning its input unchanged.
pub trait AssetFilter: Send + Sync {
    fn manifest(&self, manifest: Manifest) -> Manifest {
        manifest
    }

    fn development_assets(&self, assets: AssetSet, _options: &AssetOptions) -> AssetSet {
        assets
    }

    fn build_assets(&self, assets: AssetSet, _options: &AssetOptions) -> AssetSet {
        assets
    }
}

/// Leaves everything as resolved.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFilter;

impl AssetFilter for NoopFilter {}
