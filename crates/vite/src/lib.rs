//! Vite asset registration - Imperative Shell.
//!
//! This crate performs the I/O around the pure resolution in
//! `pressbridge_vite_core`: probing the hot file, reading the build
//! manifest, applying the debug policy to failures, and publishing the hot
//! file while a dev server runs.
//!
//! # Architecture
//!
//! - **Functional Core** (`pressbridge_vite_core`): options, manifest model, resolution, tags
//! - **Imperative Shell** (this crate): filesystem reads, network probe, hot file lifecycle
//!
//! # Example
//!
//! ```ignore
//! use pressbridge_vite::{AssetEnvironment, AssetOptions, AssetRegistrar};
//!
//! let env = AssetEnvironment::new("/srv/site", "https://site.test", false);
//! let registrar = AssetRegistrar::new(env);
//!
//! // I/O: reads public/hot or public/build/manifest.json
//! let options = AssetOptions::new("resources/js/app.js").unwrap();
//! if let Some(assets) = registrar.register(&options).unwrap() {
//!     println!("{} scripts", assets.scripts.len());
//! }
//! ```

mod detect;
mod env;
mod error;
mod filter;
mod hot;
mod probe;
mod registrar;

// Re-export core types for convenience
pub use pressbridge_vite_core::{
    AssetError, AssetMode, AssetOptions, AssetQueue, AssetSet, ConfigError, EntryInput, Manifest,
    RawAssetOptions, ScriptHandle, StyleHandle,
};

// Export shell types
pub use detect::{detect_built, detect_mode, load_manifest, read_hot_file};
pub use env::AssetEnvironment;
pub use error::{Result, ViteError};
pub use filter::{AssetFilter, NoopFilter};
pub use hot::HotFileGuard;
pub use probe::probe_dev_server;
pub use registrar::AssetRegistrar;
