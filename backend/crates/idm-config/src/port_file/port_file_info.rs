//! Port discovery file.
//!
//! The server writes this file after binding to a port.
//! The CLI reads it to discover the server URL without a --server flag.
//!
//! File location: `<config_dir>/server.json`
//!
//! If the server crashes without cleanup the file remains. `read_live()`
//! checks whether the PID in the file is still running and removes the
//! stale file if not.

use crate::{Config, ConfigError, ConfigErrorResult, port_file::is_process_running};

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const PORT_FILENAME: &str = "server.json";

/// Information stored in the port discovery file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortFileInfo {
    /// Process ID of the server that wrote this file
    pub pid: u32,
    /// Port the server is listening on
    pub port: u16,
    /// Host the server is bound to
    pub host: String,
    /// RFC 3339 timestamp when the server started
    pub started_at: String,
    /// Server version for diagnostics
    pub version: String,
}

impl PortFileInfo {
    /// Base URL for HTTP clients.
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Write the port discovery file to the config directory.
    ///
    /// Refuses to overwrite the file of a live server, and replaces a
    /// stale one left by a dead process.
    pub fn write(port: u16, host: &str) -> ConfigErrorResult<PathBuf> {
        Self::write_in(&Config::config_dir()?, port, host)
    }

    /// Write to a specific config directory.
    pub fn write_in(config_dir: &Path, port: u16, host: &str) -> ConfigErrorResult<PathBuf> {
        if !config_dir.exists() {
            std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.to_path_buf(),
                source: e,
            })?;
        }

        if let Ok(Some(existing)) = Self::read_live_in(config_dir) {
            return Err(ConfigError::config(format!(
                "Another idm-server is already running on port {} (PID {}). \
                 Stop it first or use a different config directory.",
                existing.port, existing.pid
            )));
        }

        let info = PortFileInfo {
            pid: std::process::id(),
            port,
            host: host.to_string(),
            started_at: chrono::Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        };

        let content = serde_json::to_string_pretty(&info)
            .map_err(|e| ConfigError::config(format!("Failed to serialize port file: {e}")))?;

        let path = config_dir.join(PORT_FILENAME);
        std::fs::write(&path, content).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        Ok(path)
    }

    /// Read the port discovery file from the config directory.
    ///
    /// Returns `Ok(None)` if the file does not exist.
    pub fn read() -> ConfigErrorResult<Option<PortFileInfo>> {
        Self::read_in(&Config::config_dir()?)
    }

    /// Read from a specific config directory.
    pub fn read_in(config_dir: &Path) -> ConfigErrorResult<Option<PortFileInfo>> {
        let path = config_dir.join(PORT_FILENAME);

        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        let info: PortFileInfo = serde_json::from_str(&content).map_err(|e| {
            ConfigError::config(format!("Invalid port file {}: {e}", path.display()))
        })?;

        Ok(Some(info))
    }

    /// Read the port discovery file and verify the server process is still alive.
    ///
    /// Returns `Ok(None)` when the file is missing or its PID is gone
    /// (the stale file is removed).
    pub fn read_live() -> ConfigErrorResult<Option<PortFileInfo>> {
        Self::read_live_in(&Config::config_dir()?)
    }

    /// Read from a specific config directory and verify process liveness.
    pub fn read_live_in(config_dir: &Path) -> ConfigErrorResult<Option<PortFileInfo>> {
        let Some(info) = Self::read_in(config_dir)? else {
            return Ok(None);
        };

        if !is_process_running(info.pid) {
            log::debug!(
                "Removing stale port file (pid {} no longer running)",
                info.pid
            );
            let _ = Self::remove_in(config_dir);
            return Ok(None);
        }

        Ok(Some(info))
    }

    /// Delete the port discovery file. Succeeds if it does not exist.
    pub fn remove() -> ConfigErrorResult<()> {
        Self::remove_in(&Config::config_dir()?)
    }

    /// Remove from a specific config directory.
    pub fn remove_in(config_dir: &Path) -> ConfigErrorResult<()> {
        let path = config_dir.join(PORT_FILENAME);
        if path.exists() {
            std::fs::remove_file(&path).map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;
        }
        Ok(())
    }

    /// `<config_dir>/server.json`
    pub fn path() -> ConfigErrorResult<PathBuf> {
        Ok(Config::config_dir()?.join(PORT_FILENAME))
    }
}
