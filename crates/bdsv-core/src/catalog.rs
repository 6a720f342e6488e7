//! Static version catalog: OS → exact version key → artifact info.
//!
//! Loaded once at startup from a JSON document and never mutated or
//! reloaded; request handlers share it read-only.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

/// Operating systems the catalog distinguishes. Closed set; any other
/// path segment fails validation before a lookup is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    Linux,
    Win,
}

impl Os {
    /// Parses the URL path segment form ("linux" / "win").
    pub fn parse(s: &str) -> Option<Os> {
        match s {
            "linux" => Some(Os::Linux),
            "win" => Some(Os::Win),
            _ => None,
        }
    }
}

/// Artifact info for one exact version key.
///
/// `ipfs_cid` is parsed and carried but no response path reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub ipfs_cid: Option<String>,
}

/// The full catalog, one version table per OS.
///
/// `IndexMap` preserves JSON document order, so the resolver's scan
/// order is deterministic and equal to the catalog's insertion order.
/// Which key wins among tied prefix matches depends on that order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub linux: IndexMap<String, VersionInfo>,
    #[serde(default)]
    pub win: IndexMap<String, VersionInfo>,
}

impl Catalog {
    /// Reads and parses the catalog document. Any failure here is a
    /// startup error; the server never starts with a partial catalog.
    pub fn load(path: &Path) -> Result<Catalog> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read catalog: {}", path.display()))?;
        let catalog = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse catalog JSON: {}", path.display()))?;
        Ok(catalog)
    }

    /// Version table for one OS.
    pub fn for_os(&self, os: Os) -> &IndexMap<String, VersionInfo> {
        match os {
            Os::Linux => &self.linux,
            Os::Win => &self.win,
        }
    }
}
