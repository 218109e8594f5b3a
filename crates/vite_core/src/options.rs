//! Asset registration options with validation.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default public directory, relative to the project root.
pub const DEFAULT_PUBLIC_DIRECTORY: &str = "public";
/// Default build directory, relative to the public directory.
pub const DEFAULT_BUILD_DIRECTORY: &str = "build";
/// Default script handle of the first entry point.
pub const DEFAULT_HANDLE: &str = "vite-entry";

/// One entry point or several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryInput {
    One(String),
    Many(Vec<String>),
}

impl EntryInput {
    pub fn entries(&self) -> Vec<&str> {
        match self {
            Self::One(entry) => vec![entry.as_str()],
            Self::Many(entries) => entries.iter().map(String::as_str).collect(),
        }
    }

    pub(crate) fn is_blank(&self) -> bool {
        let entries = self.entries();
        entries.is_empty() || entries.iter().any(|entry| entry.trim().is_empty())
    }
}

impl From<&str> for EntryInput {
    fn from(entry: &str) -> Self {
        Self::One(entry.to_string())
    }
}

impl From<String> for EntryInput {
    fn from(entry: String) -> Self {
        Self::One(entry)
    }
}

impl From<Vec<String>> for EntryInput {
    fn from(entries: Vec<String>) -> Self {
        Self::Many(entries)
    }
}

/// Options as supplied by the caller; everything optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAssetOptions {
    pub input: Option<EntryInput>,
    pub public_directory: Option<String>,
    pub build_directory: Option<String>,
    pub hot_file: Option<String>,
    pub react_refresh: Option<bool>,
    pub handle: Option<String>,
}

/// Validated asset options with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetOptions {
    pub input: EntryInput,
    pub public_directory: String,
    pub build_directory: String,
    /// Hot file path relative to the project root.
    pub hot_file: String,
    pub react_refresh: bool,
    pub handle: String,
}

impl AssetOptions {
    /// Options for `input` with every other setting at its default.
    pub fn new(input: impl Into<EntryInput>) -> Result<Self, ConfigError> {
        Self::from_raw(RawAssetOptions {
            input: Some(input.into()),
            ..RawAssetOptions::default()
        })
    }

    /// Validate raw options and fill in defaults.
    pub fn from_raw(raw: RawAssetOptions) -> Result<Self, ConfigError> {
        let input = match raw.input {
            Some(input) if !input.is_blank() => input,
            _ => return Err(ConfigError::MissingInput),
        };

        let public_directory = normalize_public_directory(raw.public_directory.as_deref())?;
        let build_directory = normalize_build_directory(raw.build_directory.as_deref())?;

        let handle = raw.handle.unwrap_or_else(|| DEFAULT_HANDLE.to_string());
        if handle.trim().is_empty() {
            return Err(ConfigError::InvalidHandle);
        }

        let hot_file = raw
            .hot_file
            .unwrap_or_else(|| default_hot_file(&public_directory));

        Ok(Self {
            input,
            public_directory,
            build_directory,
            hot_file,
            react_refresh: raw.react_refresh.unwrap_or(true),
            handle,
        })
    }

    /// Script handle of the entry at `index`.
    pub fn entry_handle(&self, index: usize) -> String {
        if index == 0 {
            self.handle.clone()
        } else {
            format!("{}-entry-{index}", self.handle)
        }
    }

    /// Manifest location relative to the project root.
    pub fn manifest_path(&self) -> String {
        format!("{}/manifest.json", self.build_path())
    }

    /// Build output directory relative to the project root.
    pub fn build_path(&self) -> String {
        format!("{}/{}", self.public_directory, self.build_directory)
    }
}

/// Stylesheet handle for the `index`-th CSS file of a script handle.
pub fn css_handle(script_handle: &str, index: usize) -> String {
    format!("{script_handle}-{index}")
}

pub(crate) fn default_hot_file(public_directory: &str) -> String {
    format!("{public_directory}/hot")
}

/// Trim and strip leading slashes; must stay non-empty.
pub(crate) fn normalize_public_directory(value: Option<&str>) -> Result<String, ConfigError> {
    match value {
        None => Ok(DEFAULT_PUBLIC_DIRECTORY.to_string()),
        Some(value) => {
            let normalized = value.trim().trim_start_matches('/');
            if normalized.is_empty() {
                Err(ConfigError::InvalidPublicDirectory)
            } else {
                Ok(normalized.to_string())
            }
        }
    }
}

/// Trim and strip slashes on both ends; must stay non-empty.
pub(crate) fn normalize_build_directory(value: Option<&str>) -> Result<String, ConfigError> {
    match value {
        None => Ok(DEFAULT_BUILD_DIRECTORY.to_string()),
        Some(value) => {
            let normalized = value.trim().trim_matches('/');
            if normalized.is_empty() {
                Err(ConfigError::InvalidBuildDirectory)
            } else {
                Ok(normalized.to_string())
            }
        }
    }
}
