use std::sync::Mutex;

use async_trait::async_trait;
use simple_migrations::prelude::*;

/// Remembers every statement and fails once it reaches `fail_at`
#[derive(Default)]
struct MockDb {
    sent: Mutex<Vec<String>>,
    fail_at: Option<usize>,
}

impl MockDb {
    fn failing_at(step: usize) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_at: Some(step),
        }
    }

    fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Database for MockDb {
    async fn execute(&self, sql: &str, _params: &[Value]) -> Result<QueryResult, DatabaseError> {
        let mut sent = self.sent.lock().unwrap();
        if self.fail_at == Some(sent.len()) {
            return Err(DatabaseError::query(sql, "Duplicate key name"));
        }
        sent.push(sql.to_string());
        Ok(QueryResult::default())
    }
}

fn croatian_defaults() -> TableOptions {
    TableOptions::new()
        .engine(Engine::InnoDB)
        .charset("utf8")
        .collation("utf8_croatian_ci")
}

#[tokio::test]
async fn create_users_table() {
    let schema = Schema::new(MockDb::default(), croatian_defaults());

    schema
        .table("users", |t| {
            t.int("id", None).auto_increment(true).primary(true);
            t.varchar("email", 255).unique(true);
            t.add_unique_index("idx_email", ["email"]);
        })
        .await
        .unwrap();

    assert_eq!(
        schema.database().sent(),
        [
            "CREATE TABLE users ( `id` INT NOT NULL AUTO_INCREMENT PRIMARY KEY, \
             `email` VARCHAR(255) NOT NULL UNIQUE KEY ) \
             ENGINE = InnoDB CHARACTER SET = utf8 COLLATE = utf8_croatian_ci;",
            "CREATE UNIQUE INDEX idx_email ON users ( email );",
        ]
    );
}

#[tokio::test]
async fn callback_overrides_defaults() {
    let schema = Schema::new(MockDb::default(), croatian_defaults());

    schema
        .table("logs", |t| {
            t.engine(Engine::Archive);
            t.charset("");
            t.text("line", None).nullable(true);
        })
        .await
        .unwrap();

    assert_eq!(
        schema.database().sent(),
        ["CREATE TABLE logs ( `line` TEXT NULL ) ENGINE = Archive COLLATE = utf8_croatian_ci;"]
    );
}

#[tokio::test]
async fn first_failure_aborts_remaining_statements() {
    let schema = Schema::new(MockDb::failing_at(1), TableOptions::new());

    let err = schema
        .table("t", |t| {
            t.int("a", None);
            t.int("b", None);
            t.add_unique_index("ix_a", ["a"]);
            t.add_unique_index("ix_b", ["b"]);
        })
        .await
        .unwrap_err();

    assert!(matches!(
        &err,
        DatabaseError::Query { sql, .. } if sql == "CREATE UNIQUE INDEX ix_a ON t ( a );"
    ));

    // the table statement stays applied, the second index is never sent
    assert_eq!(
        schema.database().sent(),
        ["CREATE TABLE t ( `a` INT NOT NULL, `b` INT NOT NULL );"]
    );
}

#[tokio::test]
async fn drop_table_sends_exact_statement() {
    let schema = Schema::new(MockDb::default(), croatian_defaults());
    schema.drop_table("users").await.unwrap();
    assert_eq!(schema.database().sent(), ["DROP TABLE users"]);
}

#[tokio::test]
async fn drop_table_propagates_failure() {
    let schema = Schema::new(MockDb::failing_at(0), TableOptions::new());
    let err = schema.drop_table("missing").await.unwrap_err();
    assert!(err.to_string().contains("DROP TABLE missing"));
}

#[tokio::test]
async fn config_seeds_every_blueprint() {
    let config = Config::parse_json(
        r#"{
            "database": { "engine": "MyISAM", "charset": "latin1", "collation": "latin1_swedish_ci" }
        }"#,
    )
    .unwrap();
    let schema = Schema::from_config(MockDb::default(), &config).unwrap();

    schema.table("a", |t| {
        t.int("id", None);
    })
    .await
    .unwrap();
    schema.table("b", |t| {
        t.int("id", None);
    })
    .await
    .unwrap();

    let sent = schema.database().sent();
    assert_eq!(sent.len(), 2);
    for sql in &sent {
        assert!(sql.ends_with(" ENGINE = MyISAM CHARACTER SET = latin1 COLLATE = latin1_swedish_ci;"));
    }
}

#[tokio::test]
async fn schema_works_through_shared_reference() {
    let db = MockDb::default();
    let schema = Schema::new(&db, TableOptions::new());

    schema.drop_table("x").await.unwrap();
    schema.drop_table("y").await.unwrap();

    assert_eq!(db.sent(), ["DROP TABLE x", "DROP TABLE y"]);
}
