// src/config.rs
//
// Runtime configuration
//
// Resolved once at process start and passed down explicitly. Nothing below
// this module reads the environment.

use std::collections::HashMap;
use std::ffi::OsString;
use std::time::Duration;

use crate::error::{AppError, AppResult};

pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const POOL_SIZE_VAR: &str = "DATABASE_POOL_SIZE";
pub const TIMEOUT_MS_VAR: &str = "DATABASE_TIMEOUT_MS";
pub const LOG_SPEC_VAR: &str = "PUBHEALTH_LOG";

const DEFAULT_POOL_SIZE: u32 = 10;
const DEFAULT_TIMEOUT_MS: u64 = 5_000;
const DEFAULT_LOG_SPEC: &str = "info";
const MEMORY_URL: &str = ":memory:";
const SQLITE_SCHEME: &str = "sqlite://";

/// Where the store lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    /// SQLite database file
    File(String),
    /// Private in-memory database (single connection)
    Memory,
}

/// Store connection settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    location: DatabaseLocation,
    max_connections: u32,
    timeout: Duration,
}

impl DatabaseConfig {
    /// Parse a connection string: a file path, `sqlite://<path>`, or `:memory:`.
    pub fn new(url: &str) -> AppResult<Self> {
        Ok(Self {
            location: parse_location(url)?,
            max_connections: DEFAULT_POOL_SIZE,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        })
    }

    pub fn in_memory() -> Self {
        Self {
            location: DatabaseLocation::Memory,
            max_connections: 1,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn location(&self) -> &DatabaseLocation {
        &self.location
    }

    /// In-memory stores always report 1. Pooled `:memory:` connections share
    /// one database through SQLite's shared cache, whose table locks fail
    /// with SQLITE_LOCKED at once instead of waiting out the busy timeout.
    /// A single connection makes callers queue on checkout, under the
    /// deadline, instead.
    pub fn max_connections(&self) -> u32 {
        match self.location {
            DatabaseLocation::Memory => 1,
            DatabaseLocation::File(_) => self.max_connections,
        }
    }

    /// Default per-operation deadline.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Everything the bootstrap binary needs.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub log_spec: String,
}

impl AppConfig {
    /// Load from the process environment (after an optional `.env`).
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(&utf8_vars(std::env::vars_os()))
    }

    /// Load from an explicit variable map.
    pub fn from_vars(vars: &HashMap<String, String>) -> AppResult<Self> {
        let url = vars
            .get(DATABASE_URL_VAR)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| AppError::Config(format!("{} is not set", DATABASE_URL_VAR)))?;

        let mut database = DatabaseConfig::new(url)?;

        if let Some(raw) = non_blank(vars, POOL_SIZE_VAR) {
            let size = parse_positive(POOL_SIZE_VAR, raw)?;
            let size = u32::try_from(size).map_err(|_| {
                AppError::Config(format!("{} is too large: `{}`", POOL_SIZE_VAR, raw))
            })?;
            database = database.with_max_connections(size);
        }

        if let Some(raw) = non_blank(vars, TIMEOUT_MS_VAR) {
            let millis = parse_positive(TIMEOUT_MS_VAR, raw)?;
            database = database.with_timeout(Duration::from_millis(millis));
        }

        let log_spec = non_blank(vars, LOG_SPEC_VAR)
            .unwrap_or(DEFAULT_LOG_SPEC)
            .to_string();

        Ok(Self { database, log_spec })
    }
}

fn parse_location(url: &str) -> AppResult<DatabaseLocation> {
    let trimmed = url.trim();
    let path = trimmed.strip_prefix(SQLITE_SCHEME).unwrap_or(trimmed);

    if path.is_empty() {
        return Err(AppError::Config(format!(
            "{} does not name a database: `{}`",
            DATABASE_URL_VAR, url
        )));
    }

    if path == MEMORY_URL {
        return Ok(DatabaseLocation::Memory);
    }

    Ok(DatabaseLocation::File(path.to_string()))
}

/// Keep the entries whose name and value are both valid UTF-8.
fn utf8_vars<I>(vars: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    vars.into_iter()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}

fn non_blank<'a>(vars: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    vars.get(key)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}

fn parse_positive(key: &str, raw: &str) -> AppResult<u64> {
    match raw.parse::<u64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(AppError::Config(format!(
            "{} must be a positive integer, got `{}`",
            key, raw
        ))),
    }
}
