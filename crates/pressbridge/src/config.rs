use std::{env, path::PathBuf, time::Duration};

use pressbridge_vite::{AssetEnvironment, AssetOptions, ConfigError, EntryInput, RawAssetOptions};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Project root containing the public directory (default: ".")
    pub root: PathBuf,
    /// URL the public directory is served from (default: "", site-relative)
    pub public_url: String,
    /// Asset version sent with every page (default: "")
    pub asset_version: String,
    /// Fail loudly on asset errors (default: false)
    pub debug: bool,
    /// Title of the root view (default: "pressbridge")
    pub app_name: String,
    /// Dev server probe timeout; probing is off when unset
    pub probe_timeout_ms: Option<u64>,
    /// Vite options as read from the environment, validated by [`Config::asset_options`]
    pub vite: RawAssetOptions,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PRESSBRIDGE_ROOT` - Project root (default: ".")
    /// - `PRESSBRIDGE_PUBLIC_URL` - Public directory URL (default: "")
    /// - `PRESSBRIDGE_ASSET_VERSION` - Asset version (default: "")
    /// - `PRESSBRIDGE_DEBUG` - "1" or "true" enables debug mode (default: off)
    /// - `PRESSBRIDGE_APP_NAME` - Root view title (default: "pressbridge")
    /// - `VITE_PROBE_TIMEOUT_MS` - Dev server probe timeout (default: unset)
    /// - `VITE_INPUT` - Comma-separated entry points (default: "resources/js/app.js")
    /// - `VITE_PUBLIC_DIRECTORY`, `VITE_BUILD_DIRECTORY`, `VITE_HOT_FILE`,
    ///   `VITE_REACT_REFRESH`, `VITE_HANDLE` - Vite options (defaults from the plugin)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup` instead of the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            root: lookup("PRESSBRIDGE_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            public_url: lookup("PRESSBRIDGE_PUBLIC_URL").unwrap_or_default(),
            asset_version: lookup("PRESSBRIDGE_ASSET_VERSION").unwrap_or_default(),
            debug: lookup("PRESSBRIDGE_DEBUG")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            app_name: lookup("PRESSBRIDGE_APP_NAME").unwrap_or_else(|| "pressbridge".to_string()),
            probe_timeout_ms: lookup("VITE_PROBE_TIMEOUT_MS").and_then(|v| v.parse().ok()),
            vite: RawAssetOptions {
                input: Some(parse_input(
                    &lookup("VITE_INPUT").unwrap_or_else(|| "resources/js/app.js".to_string()),
                )),
                public_directory: lookup("VITE_PUBLIC_DIRECTORY"),
                build_directory: lookup("VITE_BUILD_DIRECTORY"),
                hot_file: lookup("VITE_HOT_FILE"),
                react_refresh: lookup("VITE_REACT_REFRESH").map(|v| parse_flag(&v)),
                handle: lookup("VITE_HANDLE"),
            },
        }
    }

    /// Validated Vite options. Errors here are fatal at startup.
    pub fn asset_options(&self) -> Result<AssetOptions, ConfigError> {
        AssetOptions::from_raw(self.vite.clone())
    }

    pub fn asset_environment(&self) -> AssetEnvironment {
        AssetEnvironment::new(self.root.clone(), self.public_url.clone(), self.debug)
    }

    pub fn probe_timeout(&self) -> Option<Duration> {
        self.probe_timeout_ms.map(Duration::from_millis)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn parse_input(value: &str) -> EntryInput {
    let entries: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect();

    match entries.as_slice() {
        [single] => EntryInput::One(single.clone()),
        _ => EntryInput::Many(entries),
    }
}
