//! Simple Migrations runtime
//!
//! Everything needed to apply blueprints to a live MySQL server:
//! - [`Config`]: the `simple-migrations-config.json` document with dotted-path lookup
//! - [`Database`]: the execution contract, with [`MysqlDatabase`] behind the `mysql` feature
//! - [`Schema`]: the service that compiles blueprints and sends them in order
//!
//! ```ignore
//! use simple_migrations_migrate::{Config, Schema, connect};
//!
//! let config = Config::load("simple-migrations-config.json")?;
//! let db = connect(&config).await?;
//! let schema = Schema::from_config(&db, &config)?;
//!
//! schema
//!     .table("posts", |t| {
//!         t.int("id", None).auto_increment(true).primary(true);
//!         t.text("body", None).nullable(true);
//!     })
//!     .await?;
//!
//! db.disconnect().await?;
//! ```

pub mod config;
pub mod database;
pub mod error;
#[cfg(feature = "mysql")]
pub mod mysql;
pub mod schema;
pub mod value;

pub use config::{
    CONFIG_FILE, Config, ConfigError, ConnectionDetails, DEFAULT_CHARSET, DEFAULT_COLLATION,
    DEFAULT_ENGINE,
};
pub use database::{Database, DatabaseError, format_query};
pub use error::{Error, Result};
#[cfg(feature = "mysql")]
pub use mysql::{MysqlDatabase, QUERY_LOG_TARGET};
pub use schema::Schema;
pub use value::{QueryResult, Row, Value};

/// Open the MySQL connection described by `config`.
///
/// Reads the `connection` object and the `logQueries` flag; fails with
/// [`ConfigError::NoConnectionDetails`] when there is no `connection`.
#[cfg(feature = "mysql")]
pub async fn connect(config: &Config) -> Result<MysqlDatabase> {
    let details = config.connection()?;
    let db = MysqlDatabase::connect(&details, config.log_queries()).await?;
    Ok(db)
}
