//! Pure asset resolution - no I/O, no async, no side effects.
//!
//! This crate provides:
//! - Asset options with defaults and validation
//! - The build manifest model
//! - Resolution of script/style handles for a live dev server or a build
//! - Structured tag rendering and a narrow rewrite for foreign script tags
//! - Build-side plugin configuration (base URL, output dir, dev server URL)
//!
//! # Example
//!
//! ```
//! use pressbridge_vite_core::{resolve_assets, AssetMode, AssetOptions};
//!
//! let options = AssetOptions::new("src/app.js").unwrap();
//! let mode = AssetMode::Live { url: "http://localhost:5173".to_string() };
//!
//! let assets = resolve_assets(&options, &mode).unwrap();
//! assert_eq!(assets.scripts[1].src, "http://localhost:5173/src/app.js");
//! ```

mod error;
mod handle;
mod manifest;
mod mode;
mod options;
mod plugin;
mod queue;
mod resolve;
mod tag;

pub use error::{AssetError, ConfigError, Result};
pub use handle::{AssetSet, ScriptHandle, StyleHandle};
pub use manifest::{Manifest, ManifestChunk};
pub use mode::AssetMode;
pub use options::{
    css_handle, AssetOptions, EntryInput, RawAssetOptions, DEFAULT_BUILD_DIRECTORY, DEFAULT_HANDLE,
    DEFAULT_PUBLIC_DIRECTORY,
};
pub use plugin::{
    resolve_dev_server_url, DevServerAddress, DevServerOverrides, PluginConfig, RawPluginConfig,
    DEFAULT_SSR_OUTPUT_DIRECTORY,
};
pub use queue::AssetQueue;
pub use resolve::{hot_asset, react_refresh_preamble, resolve_assets, VITE_CLIENT_HANDLE};
pub use tag::set_script_type_attribute;
