//! Build manifest model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{AssetError, Result};

/// Compiled output of one manifest entry.
///
/// Fields the resolver does not use (`src`, `isEntry`, `imports`, ...) are
/// ignored on parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestChunk {
    pub file: String,
    #[serde(default)]
    pub css: Vec<String>,
}

/// Entry path to compiled output, as written by the bundler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    chunks: BTreeMap<String, ManifestChunk>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse manifest JSON read from `path`.
    pub fn parse(content: &str, path: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| AssetError::ManifestInvalid {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }

    pub fn get(&self, entry: &str) -> Option<&ManifestChunk> {
        self.chunks.get(entry)
    }

    pub fn insert(&mut self, entry: impl Into<String>, chunk: ManifestChunk) {
        self.chunks.insert(entry.into(), chunk);
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}
