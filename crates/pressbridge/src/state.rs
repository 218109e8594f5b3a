//! Application state shared by all request handlers.
//!
//! Only immutable, deployment-wide settings live here. Anything that
//! belongs to a single request (shared props in particular) lives in the
//! request context created by [`crate::inertia::inertia_context`].

use std::sync::Arc;

use pressbridge_vite::{AssetOptions, AssetRegistrar, ConfigError};

use crate::config::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Validated entry point options of the page shell.
    pub asset_options: Arc<AssetOptions>,
    pub assets: AssetRegistrar,
}

impl AppState {
    /// Build state from configuration, validating the asset options.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let asset_options = config.asset_options()?;

        let mut assets = AssetRegistrar::new(config.asset_environment());
        if let Some(timeout) = config.probe_timeout() {
            assets = assets.with_probe(timeout);
        }

        tracing::debug!(
            root = %config.root.display(),
            hot_file = %asset_options.hot_file,
            debug = config.debug,
            "Asset registrar configured"
        );

        Ok(Self {
            config: Arc::new(config),
            asset_options: Arc::new(asset_options),
            assets,
        })
    }
}
