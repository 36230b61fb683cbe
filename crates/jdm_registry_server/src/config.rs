//! Process configuration read from the environment.
//!
//! # Responsibility
//! - Resolve the database location, listen address and logging settings.
//! - Reject a missing or unsupported connection string before startup.

use jdm_registry_core::db::{open_db, open_db_in_memory, DbResult};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const PORT_VAR: &str = "PORT";
pub const HOST_VAR: &str = "HOST";
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "LOG_DIR";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const MEMORY_LOCATION: &str = ":memory:";

/// Where the parts table lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    File(PathBuf),
    Memory,
}

impl DatabaseLocation {
    /// Parses a connection string.
    ///
    /// Accepts a bare path, `sqlite://<path>`, `sqlite:<path>` or `:memory:`.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        let location = trimmed
            .strip_prefix("sqlite://")
            .or_else(|| trimmed.strip_prefix("sqlite:"))
            .unwrap_or(trimmed);

        if location.is_empty() {
            return Err(ConfigError::MissingDatabaseUrl);
        }
        if let Some((scheme, _)) = location.split_once("://") {
            return Err(ConfigError::UnsupportedDatabaseUrl(scheme.to_string()));
        }
        if location == MEMORY_LOCATION {
            return Ok(Self::Memory);
        }
        Ok(Self::File(PathBuf::from(location)))
    }

    /// Opens the connection and ensures the parts schema.
    pub fn open(&self) -> DbResult<Connection> {
        match self {
            Self::File(path) => open_db(path),
            Self::Memory => open_db_in_memory(),
        }
    }
}

impl Display for DatabaseLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Memory => write!(f, "{MEMORY_LOCATION}"),
        }
    }
}

/// Server configuration resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database: DatabaseLocation,
    pub host: String,
    pub port: u16,
    /// `None` falls back to the build-mode default level.
    pub log_level: Option<String>,
    /// Absolute directory for rolling log files; stderr when `None`.
    pub log_dir: Option<String>,
}

impl ServerConfig {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, treating blank values as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let database_url = read(DATABASE_URL_VAR).ok_or(ConfigError::MissingDatabaseUrl)?;
        let database = DatabaseLocation::parse(&database_url)?;

        let port = match read(PORT_VAR) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database,
            host: read(HOST_VAR).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            log_level: read(LOG_LEVEL_VAR),
            log_dir: read(LOG_DIR_VAR),
        })
    }

    /// Returns the `host:port` listen address.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Fatal configuration problems detected before startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingDatabaseUrl,
    UnsupportedDatabaseUrl(String),
    InvalidPort(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDatabaseUrl => write!(f, "{DATABASE_URL_VAR} variable is not set"),
            Self::UnsupportedDatabaseUrl(scheme) => write!(
                f,
                "{DATABASE_URL_VAR} scheme `{scheme}` is not supported; expected a SQLite path"
            ),
            Self::InvalidPort(raw) => write!(f, "{PORT_VAR} `{raw}` is not a valid port"),
        }
    }
}

impl Error for ConfigError {}
