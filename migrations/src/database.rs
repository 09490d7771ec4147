//! The database-execution contract
//!
//! The schema service only needs to send SQL text and get a result back.
//! Anything that can do that implements [`Database`]; the crate ships a
//! MySQL implementation behind the `mysql` feature, and tests substitute
//! in-memory recorders.

use std::sync::Arc;

use async_trait::async_trait;

use crate::value::{QueryResult, Row, Value};

/// Errors surfaced by a [`Database`] implementation
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// The connection could not be established
    #[error("Connection error: {0}")]
    Connection(String),

    /// The server rejected a statement
    #[error("Query failed: {message}\n  SQL: {sql}")]
    Query { sql: String, message: String },

    /// The connection was closed with `disconnect`
    #[error("Database connection is closed")]
    Disconnected,
}

impl DatabaseError {
    /// Create a Query error for the statement that failed
    pub fn query(sql: impl Into<String>, message: impl ToString) -> Self {
        DatabaseError::Query {
            sql: sql.into(),
            message: message.to_string(),
        }
    }
}

/// Sends SQL to a live database.
///
/// Only [`execute`](Database::execute) is required; the other methods are
/// shorthands that pick the interesting part of the [`QueryResult`].
#[async_trait]
pub trait Database: Send + Sync {
    /// Execute one statement with positional `?` parameters
    async fn execute(&self, sql: &str, params: &[Value]) -> Result<QueryResult, DatabaseError>;

    /// Execute one statement without parameters
    async fn query(&self, sql: &str) -> Result<QueryResult, DatabaseError> {
        self.execute(sql, &[]).await
    }

    /// Returns the selected rows
    async fn select(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>, DatabaseError> {
        Ok(self.execute(sql, params).await?.rows)
    }

    /// Returns the last inserted ID
    async fn insert(&self, sql: &str, params: &[Value]) -> Result<Option<u64>, DatabaseError> {
        Ok(self.execute(sql, params).await?.last_insert_id)
    }

    /// Returns the number of updated rows
    async fn update(&self, sql: &str, params: &[Value]) -> Result<u64, DatabaseError> {
        Ok(self.execute(sql, params).await?.affected_rows)
    }

    /// Returns the number of deleted rows
    async fn delete(&self, sql: &str, params: &[Value]) -> Result<u64, DatabaseError> {
        Ok(self.execute(sql, params).await?.affected_rows)
    }
}

#[async_trait]
impl<T: Database + ?Sized> Database for &T {
    async fn execute(&self, sql: &str, params: &[Value]) -> Result<QueryResult, DatabaseError> {
        (**self).execute(sql, params).await
    }
}

#[async_trait]
impl<T: Database + ?Sized> Database for Arc<T> {
    async fn execute(&self, sql: &str, params: &[Value]) -> Result<QueryResult, DatabaseError> {
        (**self).execute(sql, params).await
    }
}

#[async_trait]
impl<T: Database + ?Sized> Database for Box<T> {
    async fn execute(&self, sql: &str, params: &[Value]) -> Result<QueryResult, DatabaseError> {
        (**self).execute(sql, params).await
    }
}

/// Render a statement for the query log.
///
/// Whitespace runs collapse to a single space and each `?` placeholder is
/// replaced, left to right, by the display text of the next parameter.
/// Placeholders without a matching parameter are left as `?`.
#[must_use]
pub fn format_query(sql: &str, params: &[Value]) -> String {
    let collapsed = sql.split_whitespace().collect::<Vec<_>>().join(" ");
    if params.is_empty() {
        return collapsed;
    }

    let mut out = String::with_capacity(collapsed.len());
    let mut params = params.iter();
    for ch in collapsed.chars() {
        match ch {
            '?' => match params.next() {
                Some(param) => out.push_str(&param.to_string()),
                None => out.push('?'),
            },
            _ => out.push(ch),
        }
    }
    out
}
