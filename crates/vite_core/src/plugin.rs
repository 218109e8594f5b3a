//! Build-side configuration of the companion bundler plugin.
//!
//! The dev server and the production build agree with the runtime
//! resolver through three things: where the build lands, what base URL the
//! compiled assets are requested from, and the dev server URL written to
//! the hot file. This module computes all three.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::options::{default_hot_file, normalize_build_directory, normalize_public_directory, EntryInput};

/// Default directory of the SSR bundle.
pub const DEFAULT_SSR_OUTPUT_DIRECTORY: &str = "bootstrap/ssr";

/// Plugin configuration as supplied by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPluginConfig {
    pub input: Option<EntryInput>,
    pub public_directory: Option<String>,
    pub build_directory: Option<String>,
    pub hot_file: Option<String>,
    pub ssr: Option<EntryInput>,
    pub ssr_output_directory: Option<String>,
}

impl From<EntryInput> for RawPluginConfig {
    /// Shorthand form: the same entries for the client and SSR builds.
    fn from(input: EntryInput) -> Self {
        Self {
            input: Some(input.clone()),
            ssr: Some(input),
            ..Self::default()
        }
    }
}

/// Resolved plugin configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginConfig {
    pub input: EntryInput,
    pub public_directory: String,
    pub build_directory: String,
    pub hot_file: String,
    pub ssr: EntryInput,
    pub ssr_output_directory: String,
}

impl PluginConfig {
    pub fn resolve(raw: RawPluginConfig) -> Result<Self, ConfigError> {
        let input = match raw.input {
            Some(input) if !input.is_blank() => input,
            _ => return Err(ConfigError::MissingInput),
        };

        let public_directory = normalize_public_directory(raw.public_directory.as_deref())?;
        let build_directory = normalize_build_directory(raw.build_directory.as_deref())?;

        let ssr_output_directory = raw
            .ssr_output_directory
            .map(|dir| dir.trim().trim_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_SSR_OUTPUT_DIRECTORY.to_string());

        Ok(Self {
            ssr: raw.ssr.unwrap_or_else(|| input.clone()),
            hot_file: raw
                .hot_file
                .unwrap_or_else(|| default_hot_file(&public_directory)),
            input,
            public_directory,
            build_directory,
            ssr_output_directory,
        })
    }

    /// Public base the compiled assets are requested from.
    pub fn base(&self, asset_url: &str) -> String {
        let separator = if asset_url.ends_with('/') { "" } else { "/" };
        format!("{asset_url}{separator}{}/", self.build_directory)
    }

    /// Output directory of the client or SSR build.
    pub fn out_dir(&self, ssr: bool) -> String {
        if ssr {
            self.ssr_output_directory.clone()
        } else {
            format!("{}/{}", self.public_directory, self.build_directory)
        }
    }

    /// Entries compiled by the client or SSR build.
    pub fn build_input(&self, ssr: bool) -> &EntryInput {
        if ssr {
            &self.ssr
        } else {
            &self.input
        }
    }
}

/// Address the dev server ended up listening on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevServerAddress {
    pub address: String,
    pub port: u16,
    pub ipv6: bool,
}

/// Dev server settings that take precedence over the bound address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DevServerOverrides {
    pub https: bool,
    pub host: Option<String>,
    pub hmr_protocol: Option<String>,
    pub hmr_host: Option<String>,
    pub hmr_client_port: Option<u16>,
}

/// The URL browsers use to reach the dev server, as written to the hot file.
pub fn resolve_dev_server_url(address: &DevServerAddress, overrides: &DevServerOverrides) -> String {
    let protocol = match overrides.hmr_protocol.as_deref() {
        Some("wss") => "https",
        Some(_) => "http",
        None if overrides.https => "https",
        None => "http",
    };

    let host = overrides
        .hmr_host
        .clone()
        .or_else(|| overrides.host.clone())
        .unwrap_or_else(|| {
            if address.ipv6 {
                format!("[{}]", address.address)
            } else {
                address.address.clone()
            }
        });

    let port = overrides.hmr_client_port.unwrap_or(address.port);

    format!("{protocol}://{host}:{port}")
}
