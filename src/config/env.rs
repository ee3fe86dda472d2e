use std::env;
use std::str::FromStr;

use crate::config::settings::ConfigError;

pub enum EnvKey {
    ServerPort,
    DatabaseUrl,
    StorageDriver,
    DbMaxConnections,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::ServerPort => "APP_PORT",
            EnvKey::DatabaseUrl => "DATABASE_URL",
            EnvKey::StorageDriver => "STORAGE_DRIVER",
            EnvKey::DbMaxConnections => "DB_MAX_CONNECTIONS",
        }
    }
}

pub fn get(key: EnvKey) -> Result<String, env::VarError> {
    env::var(key.as_str())
}

pub fn get_or(key: EnvKey, default: &str) -> String {
    env::var(key.as_str()).unwrap_or_else(|_| default.to_string())
}

/// Unset falls back to `default`; a set but unparsable value is an error.
pub fn get_parsed<T: FromStr>(key: EnvKey, default: T) -> Result<T, ConfigError> {
    let name = key.as_str();
    parse_or(name, get(key).ok(), default)
}

fn parse_or<T: FromStr>(name: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(val) => val.trim().parse::<T>().map_err(|_| ConfigError::Invalid {
            key: name,
            value: val,
        }),
    }
}
