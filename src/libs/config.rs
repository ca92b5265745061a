//! Service configuration.
//!
//! Two settings: where the SQLite file lives and which address to listen on.
//! Both default to fixed values (`./task.db`, `0.0.0.0:8080`). A JSON file
//! can override them, and command-line flags override the file. Environment
//! variables are not consulted.
//!
//! ```rust,no_run
//! use taskd::libs::config::Config;
//!
//! let config = Config::read("taskd.json")?;
//! println!("database: {}", config.database.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::db::db::DB_FILE_NAME;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_info};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Runtime settings for the service.
///
/// Missing keys in a configuration file fall back to the defaults, so a file
/// containing only `{"listen": "127.0.0.1:3000"}` is valid.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Path of the SQLite database file. Created on first start.
    pub database: PathBuf,

    /// Socket address for the HTTP listener.
    pub listen: SocketAddr,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database: PathBuf::from(DB_FILE_NAME),
            listen: default_listen_addr(),
        }
    }
}

/// `:8080` on every interface.
fn default_listen_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

impl Config {
    /// Reads configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// A missing file is not an error and yields [`Config::default`]. A file
    /// that exists but cannot be read or parsed is.
    pub fn read(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if !path.exists() {
            msg_debug!(Message::ConfigFileNotFound(path.display().to_string()));
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)
            .with_context(|| Message::ConfigParseError(path.display().to_string()))?;
        msg_info!(Message::ConfigLoaded(path.display().to_string()));

        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        msg_info!(Message::ConfigSaved(path.display().to_string()));

        Ok(())
    }

    /// Applies command-line overrides on top of the loaded values.
    pub fn with_overrides(mut self, database: Option<PathBuf>, listen: Option<SocketAddr>) -> Self {
        if let Some(database) = database {
            self.database = database;
        }
        if let Some(listen) = listen {
            self.listen = listen;
        }
        self
    }
}
