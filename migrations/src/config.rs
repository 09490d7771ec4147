//! Configuration lookup for simple-migrations-config.json
//!
//! The configuration file is a free-form document read once at start-up.
//! Values are looked up by dotted path (`database.engine`), and a missing
//! value always falls back to the caller's default.
//!
//! ```json
//! {
//!     "connection": {
//!         "host": "127.0.0.1",
//!         "username": "root",
//!         "password": "secret",
//!         "database": "app"
//!     },
//!     "logQueries": true,
//!     "database": {
//!         "engine": "InnoDB",
//!         "charset": "utf8mb4",
//!         "collation": "utf8mb4_unicode_ci"
//!     }
//! }
//! ```

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use simple_migrations_schema::TableOptions;
use simple_migrations_types::Engine;

/// Default configuration file name
pub const CONFIG_FILE: &str = "simple-migrations-config.json";

/// Default storage engine when `database.engine` is absent
pub const DEFAULT_ENGINE: &str = "InnoDB";
/// Default character set when `database.charset` is absent
pub const DEFAULT_CHARSET: &str = "utf8";
/// Default collation when `database.collation` is absent
pub const DEFAULT_COLLATION: &str = "utf8_croatian_ci";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Failed parsing configuration: {0}")]
    ParseError(String),
    #[error("No connection details found in {}.", CONFIG_FILE)]
    NoConnectionDetails,
    #[error("Invalid value at `{path}`: {message}")]
    InvalidValue { path: String, message: String },
}

// =============================================================================
// Connection Details
// =============================================================================

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3306
}

/// Database connection configuration (the `connection` object)
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ConnectionDetails {
    #[serde(default = "default_host")]
    pub host: String,
    pub username: String,
    #[serde(default)]
    pub password: String,
    pub database: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ConnectionDetails {
    /// Connection to `database` on the default host and port
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        Self {
            host: default_host(),
            username: username.into(),
            password: password.into(),
            database: database.into(),
            port: default_port(),
        }
    }

    /// `user@host:port/database`, safe to print
    #[must_use]
    pub fn target(&self) -> String {
        format!(
            "{}@{}:{}/{}",
            self.username, self.host, self.port, self.database
        )
    }
}

impl core::fmt::Debug for ConnectionDetails {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ConnectionDetails")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &"***")
            .field("database", &self.database)
            .field("port", &self.port)
            .finish()
    }
}

// =============================================================================
// Config
// =============================================================================

/// Parsed configuration document
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    data: JsonValue,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: JsonValue::Object(Default::default()),
        }
    }
}

impl Config {
    /// Wrap an already-parsed document
    #[must_use]
    pub fn from_value(data: JsonValue) -> Self {
        Self { data }
    }

    /// Load configuration from a file; `.toml` files are parsed as TOML,
    /// anything else as JSON
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("{}: {}", path.display(), e)))?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        if is_toml {
            Self::parse_toml(&contents)
        } else {
            Self::parse_json(&contents)
        }
    }

    /// Parse configuration from a JSON string
    pub fn parse_json(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s)
            .map(Self::from_value)
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Parse configuration from a TOML string
    pub fn parse_toml(s: &str) -> Result<Self, ConfigError> {
        toml::from_str::<JsonValue>(s)
            .map(Self::from_value)
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Returns a value from config, or `default` when the path is missing or
    /// holds a value of another shape
    pub fn get<T: DeserializeOwned>(&self, path: &str, default: T) -> T {
        self.get_opt(path).unwrap_or(default)
    }

    /// Returns a value from config if present and of the requested shape
    pub fn get_opt<T: DeserializeOwned>(&self, path: &str) -> Option<T> {
        let node = self.lookup(path)?;
        serde_json::from_value(node.clone()).ok()
    }

    /// Resolve a dotted path; numeric segments index into arrays
    fn lookup(&self, path: &str) -> Option<&JsonValue> {
        if path.is_empty() {
            return None;
        }

        path.split('.').try_fold(&self.data, |node, segment| match node {
            JsonValue::Object(map) => map.get(segment),
            JsonValue::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
    }

    /// The `connection` object
    pub fn connection(&self) -> Result<ConnectionDetails, ConfigError> {
        let node = self
            .lookup("connection")
            .ok_or(ConfigError::NoConnectionDetails)?;

        serde_json::from_value(node.clone()).map_err(|e| ConfigError::InvalidValue {
            path: "connection".to_string(),
            message: e.to_string(),
        })
    }

    /// Whether executed statements are written to the query log
    pub fn log_queries(&self) -> bool {
        self.get("logQueries", false)
    }

    /// Table options every new blueprint starts from.
    ///
    /// An empty engine string leaves the `ENGINE` clause out; an unknown
    /// engine name is rejected.
    pub fn table_defaults(&self) -> Result<TableOptions, ConfigError> {
        let engine: String = self.get("database.engine", DEFAULT_ENGINE.to_string());
        let engine = if engine.is_empty() {
            None
        } else {
            let engine = engine
                .parse::<Engine>()
                .map_err(|e| ConfigError::InvalidValue {
                    path: "database.engine".to_string(),
                    message: e.to_string(),
                })?;
            Some(engine)
        };

        Ok(TableOptions {
            engine,
            charset: Some(self.get("database.charset", DEFAULT_CHARSET.to_string())),
            collation: Some(self.get("database.collation", DEFAULT_COLLATION.to_string())),
        })
    }
}
