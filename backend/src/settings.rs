//! Server configuration loaded via OrthoConfig.
//!
//! Values come from `JOBBOARD_*` environment variables, matching command-line
//! flags, or a configuration file. The port always has a value so an empty
//! environment still loads; the defaults bind `0.0.0.0:5000` and keep board
//! records in memory.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";

/// Configuration values for the job board server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "JOBBOARD")]
pub struct BoardSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    #[ortho_config(default = 5000)]
    pub port: u16,
    /// Directory holding the `user`, `jobs` and `applications` records.
    /// Records are kept in memory when unset.
    pub storage_dir: Option<PathBuf>,
}

impl BoardSettings {
    /// Return the configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Return the storage directory, if durable storage was requested.
    pub fn storage_dir(&self) -> Option<&PathBuf> {
        self.storage_dir.as_ref()
    }
}
