// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Application configuration management.
//!
//! Configuration lives in `config.toml` under the user config directory
//! (e.g. `~/.config/quill/config.toml`) and every field has a default, so
//! a missing file means "run with defaults". Precedence, lowest first:
//! file, `QUILL_SERVER` environment variable, `--server` flag.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

const CONFIG_DIR_NAME: &str = "quill";
const CONFIG_FILE_NAME: &str = "config.toml";
const LOG_FILE_NAME: &str = "quill.log";

/// Environment variable overriding the server URL.
pub const SERVER_ENV_VAR: &str = "QUILL_SERVER";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the blog store REST backend.
    #[serde(default = "default_server_url")]
    pub server_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Frame tick interval in milliseconds (drives animation sampling).
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// How long a notice stays on screen, in seconds.
    #[serde(default = "default_notice_ttl_secs")]
    pub notice_ttl_secs: u64,
}

fn default_server_url() -> String {
    "http://localhost:4000".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_tick_ms() -> u64 {
    33
}

fn default_notice_ttl_secs() -> u64 {
    5
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_url: default_server_url(),
            request_timeout_secs: default_request_timeout_secs(),
            tick_ms: default_tick_ms(),
            notice_ttl_secs: default_notice_ttl_secs(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// With an explicit `path` the file must exist and parse. Without one,
    /// the default location is used if present, otherwise defaults apply.
    /// The `QUILL_SERVER` environment variable overrides the file.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let mut config = match path {
            Some(p) => Config::read_file(p)?,
            None => match Config::default_path() {
                Some(p) if p.exists() => Config::read_file(&p)?,
                _ => Config::default(),
            },
        };
        if let Ok(url) = std::env::var(SERVER_ENV_VAR) {
            if !url.trim().is_empty() {
                config.server_url = url;
            }
        }
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<Config> {
        let raw = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        toml::from_str(&raw).map_err(|e| Error::ConfigParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Default config file location under the user config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Log file location under the user state directory, falling back to
    /// the system temp dir when no state directory exists.
    pub fn log_path() -> PathBuf {
        dirs::state_dir()
            .map(|d| d.join(CONFIG_DIR_NAME))
            .unwrap_or_else(std::env::temp_dir)
            .join(LOG_FILE_NAME)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn notice_ttl(&self) -> Duration {
        Duration::from_secs(self.notice_ttl_secs)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
