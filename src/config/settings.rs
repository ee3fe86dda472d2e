use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::config::env::{self, EnvKey};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

/// Backing store for taxonomy records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StorageDriver {
    #[default]
    Postgres,
    Memory,
}

impl FromStr for StorageDriver {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(StorageDriver::Postgres),
            "memory" | "in-memory" => Ok(StorageDriver::Memory),
            _ => Err(ConfigError::Invalid {
                key: EnvKey::StorageDriver.as_str(),
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for StorageDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageDriver::Postgres => f.write_str("postgres"),
            StorageDriver::Memory => f.write_str("memory"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_port: u16,
    pub storage_driver: StorageDriver,
    pub database_url: Option<String>,
    pub db_max_connections: u32,
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        let storage_driver = env::get_or(EnvKey::StorageDriver, "postgres").parse::<StorageDriver>()?;

        let database_url = env::get(EnvKey::DatabaseUrl).ok();
        if storage_driver == StorageDriver::Postgres && database_url.is_none() {
            return Err(ConfigError::Missing(EnvKey::DatabaseUrl.as_str()));
        }

        Ok(Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 3000)?,
            storage_driver,
            database_url,
            db_max_connections: env::get_parsed(EnvKey::DbMaxConnections, 20)?,
        })
    }
}
