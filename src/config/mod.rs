//! Configuration loading and management

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::graph::DEFAULT_DAYS;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Graph request defaults
    #[serde(default)]
    pub graph: GraphSettings,

    /// Local HTTP server settings
    #[serde(default)]
    pub server: ServerSettings,

    /// Event store location
    #[serde(default)]
    pub database: DatabaseSettings,
}

/// Defaults applied to graph requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSettings {
    /// Trailing window length when a request omits `days`
    #[serde(default = "default_days")]
    pub default_days: u32,
}

impl Default for GraphSettings {
    fn default() -> Self {
        Self {
            default_days: default_days(),
        }
    }
}

/// Local HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_http_port")]
    pub http_port: u16,

    /// Optional shared secret for graph requests (sent as `X-TicketGraph-Token`).
    /// Empty disables auth.
    #[serde(default)]
    pub http_token: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            http_port: default_http_port(),
            http_token: String::new(),
        }
    }
}

/// Event store location
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseSettings {
    /// Path to the SQLite event store; empty means ~/.ticketgraph/tickets.db
    #[serde(default)]
    pub path: String,
}

fn default_days() -> u32 {
    DEFAULT_DAYS
}

fn default_http_port() -> u16 {
    9910
}

impl Config {
    /// Get the global data directory path (~/.ticketgraph/)
    pub fn global_data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".ticketgraph")
    }

    /// Get the global config file path (~/.ticketgraph/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_data_dir().join("config.toml")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration from a directory
    /// Looks for: .ticketgraph/config.toml, then the global config, then defaults
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let local_path = dir.join(".ticketgraph/config.toml");
        if local_path.exists() {
            return Self::from_file(&local_path);
        }

        let global_path = Self::global_config_path();
        if global_path.exists() {
            return Self::from_file(&global_path);
        }

        Ok(Self::default())
    }

    /// Resolve the event store path, falling back to the global default
    pub fn database_path(&self) -> PathBuf {
        if self.database.path.trim().is_empty() {
            Self::global_data_dir().join("tickets.db")
        } else {
            PathBuf::from(&self.database.path)
        }
    }

    /// The auth token, if one is configured and non-empty
    pub fn auth_token(&self) -> Option<String> {
        let token = self.server.http_token.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }
}
