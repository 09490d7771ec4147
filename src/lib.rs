//! # Simple Migrations
//!
//! A fluent table builder for MySQL/MariaDB that compiles into `CREATE TABLE`
//! and `CREATE UNIQUE INDEX` statements and runs them against a live server.
//!
//! ## Quick Start
//!
//! ```rust
//! use simple_migrations::prelude::*;
//!
//! let mut users = Blueprint::new("users", TableOptions::new().engine(Engine::InnoDB));
//! users.int("id", None).auto_increment(true).primary(true);
//! users.varchar("email", 255).unique(true);
//!
//! assert_eq!(
//!     users.create_table_sql(),
//!     "CREATE TABLE users ( `id` INT NOT NULL AUTO_INCREMENT PRIMARY KEY, \
//!      `email` VARCHAR(255) NOT NULL UNIQUE KEY ) ENGINE = InnoDB;"
//! );
//! ```
//!
//! Against a server, go through the [`Schema`](migrate::Schema) service:
//!
//! ```ignore
//! use simple_migrations::prelude::*;
//!
//! let config = Config::load(CONFIG_FILE)?;
//! let db = simple_migrations::connect(&config).await?;
//! let schema = Schema::from_config(&db, &config)?;
//!
//! schema
//!     .table("users", |t| {
//!         t.int("id", None).auto_increment(true).primary(true);
//!         t.varchar("email", 255).unique(true);
//!         t.add_unique_index("idx_email", ["email"]);
//!     })
//!     .await?;
//! ```
//!
//! ## Crates
//!
//! | Crate                        | Contents                                   |
//! |------------------------------|--------------------------------------------|
//! | `simple-migrations-types`    | `FieldType`, `FieldExtent`, `Engine`       |
//! | `simple-migrations-schema`   | `Field`, `Blueprint` and the DDL compiler  |
//! | `simple-migrations-migrate`  | `Config`, `Database`, `Schema`, MySQL      |

#![cfg_attr(docsrs, feature(doc_cfg))]

/// Shared type vocabulary
pub use simple_migrations_types as types;

/// Field and blueprint compilers
pub use simple_migrations_schema as schema;

/// Configuration, the database contract and the schema service
pub use simple_migrations_migrate as migrate;

pub use simple_migrations_migrate::{Error, Result};

#[cfg(feature = "mysql")]
#[cfg_attr(docsrs, doc(cfg(feature = "mysql")))]
pub use simple_migrations_migrate::{MysqlDatabase, connect};

/// Import this for table definitions and schema operations.
pub mod prelude {
    pub use simple_migrations_schema::{Blueprint, Field, TableOptions, UniqueIndex};
    pub use simple_migrations_types::{Engine, FieldCategory, FieldExtent, FieldType};

    pub use simple_migrations_migrate::{
        CONFIG_FILE, Config, ConfigError, ConnectionDetails, Database, DatabaseError,
        QueryResult, Row, Schema, Value,
    };

    #[cfg(feature = "mysql")]
    pub use simple_migrations_migrate::MysqlDatabase;
}
