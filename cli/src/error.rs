//! Error types for the CLI

use thiserror::Error;

use simple_migrations_migrate::{ConfigError, DatabaseError};

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Database error
    #[error("{0}")]
    Database(#[from] DatabaseError),

    /// The async runtime could not be started
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl From<simple_migrations_migrate::Error> for CliError {
    fn from(err: simple_migrations_migrate::Error) -> Self {
        match err {
            simple_migrations_migrate::Error::Config(e) => CliError::Config(e),
            simple_migrations_migrate::Error::Database(e) => CliError::Database(e),
        }
    }
}
