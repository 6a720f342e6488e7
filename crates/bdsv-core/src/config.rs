//! Process configuration: listen port and catalog location.
//!
//! Read from the environment once at startup; CLI flags in the server
//! binary may override individual fields afterwards.

use anyhow::{Context, Result};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_CATALOG: &str = "bdsversion.json";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port the HTTP listener binds on.
    pub port: u16,
    /// Path to the version catalog JSON document.
    pub catalog_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            catalog_path: PathBuf::from(DEFAULT_CATALOG),
        }
    }
}

impl ServerConfig {
    /// Reads `PORT` and `BDSV_CATALOG` from the process environment.
    /// Unset variables fall back to defaults; a `PORT` that does not
    /// parse is a startup error rather than a silent fallback.
    pub fn from_env() -> Result<ServerConfig> {
        Self::from_vars(
            std::env::var("PORT").ok().as_deref(),
            std::env::var_os("BDSV_CATALOG").map(PathBuf::from),
        )
    }

    fn from_vars(port: Option<&str>, catalog: Option<PathBuf>) -> Result<ServerConfig> {
        let port = match port {
            Some(v) => v
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port number: {v:?}"))?,
            None => DEFAULT_PORT,
        };
        let catalog_path = catalog.unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG));
        Ok(ServerConfig { port, catalog_path })
    }
}
