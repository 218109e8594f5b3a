//! The two asset modes.

use crate::manifest::Manifest;

/// Where assets come from for one resolution.
///
/// Chosen once per resolution from the hot file and never re-evaluated
/// within it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetMode {
    /// A dev server is running at `url`.
    Live { url: String },
    /// A production build, served under `base_url`.
    Built { manifest: Manifest, base_url: String },
}

impl AssetMode {
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Live { .. } => "live",
            Self::Built { .. } => "built",
        }
    }
}
