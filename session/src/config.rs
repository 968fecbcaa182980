//! Configuration management for the session runtime.

use std::env;
use std::path::PathBuf;

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Store identifier to bind to; a fun name is generated when unset
    pub store_name: Option<String>,
    /// Directory for on-device order storage
    pub data_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `STORE_NAME` is optional (empty counts as unset); `DATA_DIR`
    /// defaults to `./data`.
    pub fn from_env() -> Self {
        let store_name = env::var("STORE_NAME")
            .ok()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));

        Self {
            store_name,
            data_dir,
        }
    }
}
