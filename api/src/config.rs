//! Runtime configuration, read from the environment.
//!
//! Nested keys use `__`, e.g. `SERVER__PORT=9090` or `DATABASE__URI=...`.

use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// MongoDB connection string
    #[serde(default = "default_database_uri")]
    pub uri: String,

    #[serde(default = "default_database_name")]
    pub name: String,

    /// Keep documents in process memory instead of MongoDB
    #[serde(default)]
    pub in_memory: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            port: default_port(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: default_database_uri(),
            name: default_database_name(),
            in_memory: false,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_listen_addr() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    9090
}

fn default_database_uri() -> String {
    "mongodb://db:27017".into()
}

fn default_database_name() -> String {
    "glofox".into()
}

fn default_log_level() -> String {
    "info".into()
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .listen_addr
            .parse()
            .with_context(|| format!("invalid listen address {:?}", self.listen_addr))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Config {
    /// Load configuration from environment variables, after an optional `.env`.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_env(config::Environment::default())
    }

    fn from_env(env: config::Environment) -> Result<Self> {
        config::Config::builder()
            .add_source(env.separator("__").try_parsing(true))
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
