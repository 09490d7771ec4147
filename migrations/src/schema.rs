//! The schema service: build a blueprint, compile it, run it
//!
//! ```ignore
//! let schema = Schema::from_config(db, &config)?;
//!
//! schema
//!     .table("users", |t| {
//!         t.int("id", None).auto_increment(true).primary(true);
//!         t.varchar("email", 255).unique(true);
//!         t.add_unique_index("idx_email", ["email"]);
//!     })
//!     .await?;
//!
//! schema.drop_table("users").await?;
//! ```

use simple_migrations_schema::{Blueprint, TableOptions, drop_table_sql};
use tracing::{debug, info};

use crate::config::{Config, ConfigError};
use crate::database::{Database, DatabaseError};

/// Creates and drops tables through a [`Database`].
///
/// Holds no state besides the database handle and the table options new
/// blueprints are seeded with, so one instance per process and one per call
/// behave the same.
#[derive(Debug, Clone)]
pub struct Schema<D> {
    database: D,
    defaults: TableOptions,
}

impl<D: Database> Schema<D> {
    /// Create a schema service seeding blueprints with `defaults`
    pub fn new(database: D, defaults: TableOptions) -> Self {
        Self { database, defaults }
    }

    /// Create a schema service seeded from `database.engine`,
    /// `database.charset` and `database.collation`
    pub fn from_config(database: D, config: &Config) -> Result<Self, ConfigError> {
        Ok(Self::new(database, config.table_defaults()?))
    }

    /// A fresh blueprint for `name`, seeded with the default table options
    #[must_use]
    pub fn blueprint(&self, name: &str) -> Blueprint {
        Blueprint::new(name, self.defaults.clone())
    }

    /// Build a table with `configure` and create it.
    ///
    /// The callback runs to completion before anything is sent. The compiled
    /// statements are then executed one at a time, in order; the first
    /// failure is returned as-is and the remaining statements are skipped.
    /// Nothing already applied is rolled back.
    pub async fn table<F>(&self, name: &str, configure: F) -> Result<(), DatabaseError>
    where
        F: FnOnce(&mut Blueprint),
    {
        let mut blueprint = self.blueprint(name);
        configure(&mut blueprint);
        let statements = blueprint.compile_sql();

        info!(
            table = name,
            statements = statements.len(),
            "simple_migrations.create_table"
        );

        for (step, sql) in statements.iter().enumerate() {
            debug!(table = name, step, sql = %sql, "simple_migrations.statement");
            self.database.query(sql).await?;
        }

        Ok(())
    }

    /// Drops the table
    pub async fn drop_table(&self, name: &str) -> Result<(), DatabaseError> {
        info!(table = name, "simple_migrations.drop_table");
        self.database.query(&drop_table_sql(name)).await?;
        Ok(())
    }

    #[inline]
    pub fn database(&self) -> &D {
        &self.database
    }

    #[inline]
    pub fn defaults(&self) -> &TableOptions {
        &self.defaults
    }

    /// Release the database handle
    pub fn into_inner(self) -> D {
        self.database
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{QueryResult, Value};
    use async_trait::async_trait;
    use simple_migrations_types::Engine;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        statements: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Database for Recorder {
        async fn execute(&self, sql: &str, params: &[Value]) -> Result<QueryResult, DatabaseError> {
            assert!(params.is_empty(), "DDL is never parameterised");
            self.statements.lock().unwrap().push(sql.to_string());
            Ok(QueryResult::default())
        }
    }

    #[tokio::test]
    async fn test_blueprint_is_seeded_with_defaults() {
        let defaults = TableOptions::new().engine(Engine::Aria).charset("utf8");
        let schema = Schema::new(Recorder::default(), defaults.clone());

        let blueprint = schema.blueprint("t");
        assert_eq!(blueprint.name(), "t");
        assert_eq!(blueprint.options(), &defaults);
        assert!(blueprint.fields().is_empty());
    }

    #[tokio::test]
    async fn test_table_sends_compiled_statements() {
        let schema = Schema::new(Recorder::default(), TableOptions::new());
        schema
            .table("tags", |t| {
                t.varchar("slug", 32).primary(true);
                t.add_unique_index("uq_slug", ["slug"]);
            })
            .await
            .unwrap();

        let sent = schema.database().statements.lock().unwrap().clone();
        assert_eq!(
            sent,
            [
                "CREATE TABLE tags ( `slug` VARCHAR(32) NOT NULL PRIMARY KEY );",
                "CREATE UNIQUE INDEX uq_slug ON tags ( slug );",
            ]
        );
    }

    #[tokio::test]
    async fn test_from_config_uses_configured_defaults() {
        let config = Config::parse_json(r#"{ "database": { "engine": "MyRocks" } }"#).unwrap();
        let schema = Schema::from_config(Recorder::default(), &config).unwrap();
        assert_eq!(schema.defaults().engine, Some(Engine::MyRocks));
        assert_eq!(schema.defaults().charset.as_deref(), Some("utf8"));
    }

    #[tokio::test]
    async fn test_drop_table_sends_one_statement() {
        let schema = Schema::new(Recorder::default(), TableOptions::new());
        schema.drop_table("users").await.unwrap();

        let recorder = schema.into_inner();
        assert_eq!(*recorder.statements.lock().unwrap(), ["DROP TABLE users"]);
    }
}
