//! Top-level error for the bootstrap path

use crate::config::ConfigError;
use crate::database::DatabaseError;

/// Anything that can go wrong between reading the configuration and
/// finishing a schema operation
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
