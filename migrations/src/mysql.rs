//! MySQL/MariaDB implementation of [`Database`] over `mysql_async`

use std::sync::Arc;

use async_trait::async_trait;
use mysql_async::prelude::{Protocol, Queryable};
use mysql_async::{Conn, OptsBuilder, Params};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::config::ConnectionDetails;
use crate::database::{Database, DatabaseError, format_query};
use crate::value::{QueryResult, Row, Value};

/// Tracing target for the query log
pub const QUERY_LOG_TARGET: &str = "query-debug";

/// A single MySQL connection.
///
/// Statements are serialized through the connection; callers never observe
/// interleaved results.
pub struct MysqlDatabase {
    conn: Mutex<Option<Conn>>,
    target: String,
    log_queries: bool,
}

impl MysqlDatabase {
    /// Open a connection described by `details`.
    ///
    /// With `log_queries` set every executed statement is emitted at debug
    /// level under the `query-debug` target.
    pub async fn connect(
        details: &ConnectionDetails,
        log_queries: bool,
    ) -> Result<Self, DatabaseError> {
        let opts = OptsBuilder::default()
            .ip_or_hostname(details.host.clone())
            .tcp_port(details.port)
            .user(Some(details.username.clone()))
            .pass(Some(details.password.clone()))
            .db_name(Some(details.database.clone()));

        let conn = Conn::new(opts)
            .await
            .map_err(|e| DatabaseError::Connection(format!("{}: {}", details.target(), e)))?;

        info!(target = %details.target(), "simple_migrations.connected");

        Ok(Self {
            conn: Mutex::new(Some(conn)),
            target: details.target(),
            log_queries,
        })
    }

    /// `user@host:port/database` of this connection
    #[inline]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[inline]
    pub fn log_queries(&self) -> bool {
        self.log_queries
    }

    /// Close the connection. Later statements fail with
    /// [`DatabaseError::Disconnected`]; closing twice is a no-op.
    pub async fn disconnect(&self) -> Result<(), DatabaseError> {
        let Some(conn) = self.conn.lock().await.take() else {
            return Ok(());
        };

        conn.disconnect()
            .await
            .map_err(|e| DatabaseError::Connection(e.to_string()))?;
        info!(target = %self.target, "simple_migrations.disconnected");
        Ok(())
    }
}

impl core::fmt::Debug for MysqlDatabase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MysqlDatabase")
            .field("target", &self.target)
            .field("log_queries", &self.log_queries)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Database for MysqlDatabase {
    async fn execute(&self, sql: &str, params: &[Value]) -> Result<QueryResult, DatabaseError> {
        if self.log_queries {
            debug!(target: QUERY_LOG_TARGET, "{}", format_query(sql, params));
        }

        let mut guard = self.conn.lock().await;
        let conn = guard.as_mut().ok_or(DatabaseError::Disconnected)?;

        let outcome = if params.is_empty() {
            match conn.query_iter(sql).await {
                Ok(result) => collect_result(result).await,
                Err(e) => Err(e),
            }
        } else {
            let params = Params::Positional(params.iter().map(value_to_mysql).collect());
            match conn.exec_iter(sql, params).await {
                Ok(result) => collect_result(result).await,
                Err(e) => Err(e),
            }
        };

        outcome.map_err(|e| DatabaseError::query(sql, e))
    }
}

/// Drain the first result set and read the statement counters
async fn collect_result<P: Protocol>(
    mut result: mysql_async::QueryResult<'_, '_, P>,
) -> Result<QueryResult, mysql_async::Error> {
    let rows: Vec<mysql_async::Row> = result.collect().await?;
    let affected_rows = result.affected_rows();
    let last_insert_id = result.last_insert_id();
    result.drop_result().await?;

    let columns: Arc<[String]> = match rows.first() {
        Some(row) => row
            .columns_ref()
            .iter()
            .map(|column| column.name_str().into_owned())
            .collect(),
        None => Arc::from(Vec::new()),
    };

    let rows = rows
        .iter()
        .map(|row| {
            let values = (0..row.len())
                .map(|idx| row.as_ref(idx).map_or(Value::Null, value_from_mysql))
                .collect();
            Row::new(Arc::clone(&columns), values)
        })
        .collect();

    Ok(QueryResult {
        affected_rows,
        last_insert_id,
        rows,
    })
}

/// Convert a parameter to mysql_async::Value
fn value_to_mysql(value: &Value) -> mysql_async::Value {
    match value {
        Value::Null => mysql_async::Value::NULL,
        Value::Int(i) => mysql_async::Value::Int(*i),
        Value::UInt(u) => mysql_async::Value::UInt(*u),
        Value::Float(f) => mysql_async::Value::Double(*f),
        Value::Text(s) => mysql_async::Value::Bytes(s.as_bytes().to_vec()),
        Value::Bytes(b) => mysql_async::Value::Bytes(b.clone()),
    }
}

/// Convert a cell read from the server; dates and times come back as text
fn value_from_mysql(value: &mysql_async::Value) -> Value {
    use mysql_async::Value as My;

    match value {
        My::NULL => Value::Null,
        My::Int(i) => Value::Int(*i),
        My::UInt(u) => Value::UInt(*u),
        My::Float(f) => Value::Float(f64::from(*f)),
        My::Double(f) => Value::Float(*f),
        My::Bytes(bytes) => match std::str::from_utf8(bytes) {
            Ok(text) => Value::Text(text.to_string()),
            Err(_) => Value::Bytes(bytes.clone()),
        },
        My::Date(year, month, day, hour, minute, second, micros) => {
            let mut text = format!("{year:04}-{month:02}-{day:02}");
            if (*hour, *minute, *second, *micros) != (0, 0, 0, 0) {
                text.push_str(&format!(" {hour:02}:{minute:02}:{second:02}"));
            }
            if *micros != 0 {
                text.push_str(&format!(".{micros:06}"));
            }
            Value::Text(text)
        }
        My::Time(negative, days, hours, minutes, seconds, micros) => {
            let sign = if *negative { "-" } else { "" };
            let hours = u64::from(*days) * 24 + u64::from(*hours);
            let mut text = format!("{sign}{hours:02}:{minutes:02}:{seconds:02}");
            if *micros != 0 {
                text.push_str(&format!(".{micros:06}"));
            }
            Value::Text(text)
        }
    }
}
