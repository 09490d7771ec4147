//! MySQL DDL SQL Generation Tests
//!
//! Golden tests for the text produced by `Blueprint::compile_sql`. The output
//! is compared byte-for-byte against statements found in existing migration
//! scripts, so any change here is a compatibility break.

use simple_migrations_schema::{Blueprint, Engine, FieldType, TableOptions, drop_table_sql};

// =============================================================================
// Helper Functions
// =============================================================================

/// Options matching the stock configuration defaults
fn default_options() -> TableOptions {
    TableOptions::new()
        .engine(Engine::InnoDB)
        .charset("utf8")
        .collation("utf8_croatian_ci")
}

/// Render a single column through a throwaway blueprint
fn column_sql(build: impl FnOnce(&mut Blueprint)) -> String {
    let mut table = Blueprint::new("t", TableOptions::new());
    build(&mut table);
    table.fields()[0].to_sql()
}

// =============================================================================
// CREATE TABLE Tests
// =============================================================================

/// The canonical users table: auto-increment primary key, unique email and a
/// unique index over the email column.
#[test]
fn test_users_table_end_to_end() {
    let mut users = Blueprint::new("users", default_options());
    users.int("id", None).auto_increment(true).primary(true);
    users.varchar("email", 255).unique(true);
    users.add_unique_index("idx_email", ["email"]);

    let sql = users.compile_sql();

    assert_eq!(sql.len(), 2, "Expected 2 SQL statements, got: {:?}", sql);
    assert_eq!(
        sql[0],
        "CREATE TABLE users ( `id` INT NOT NULL AUTO_INCREMENT PRIMARY KEY, \
         `email` VARCHAR(255) NOT NULL UNIQUE KEY ) \
         ENGINE = InnoDB CHARACTER SET = utf8 COLLATE = utf8_croatian_ci;"
    );
    assert_eq!(sql[1], "CREATE UNIQUE INDEX idx_email ON users ( email );");
}

/// Every option left out produces no clause text at all
#[test]
fn test_create_table_without_options() {
    let mut table = Blueprint::new("plain", TableOptions::new());
    table.tinyint("flag", Some(1));

    assert_eq!(
        table.compile_sql(),
        vec!["CREATE TABLE plain ( `flag` TINYINT(1) NOT NULL );".to_string()]
    );
}

/// Options can be changed from inside the builder after construction
#[test]
fn test_override_seeded_options() {
    let mut table = Blueprint::new("cache", default_options());
    table.varchar("key", 64).primary(true);
    table.mediumblob("value", None).nullable(true);
    table
        .engine(Engine::MyISAM)
        .charset("utf8mb4")
        .collation("utf8mb4_unicode_ci");

    assert_eq!(
        table.create_table_sql(),
        "CREATE TABLE cache ( `key` VARCHAR(64) NOT NULL PRIMARY KEY, \
         `value` MEDIUMBLOB NULL ) \
         ENGINE = MyISAM CHARACTER SET = utf8mb4 COLLATE = utf8mb4_unicode_ci;"
    );
}

/// N unique indexes yield N+1 statements in declaration order
#[test]
fn test_unique_index_count_and_order() {
    let mut table = Blueprint::new("memberships", default_options());
    table.int("user_id", None);
    table.int("group_id", None);
    table.char("code", 8);
    table.add_unique_index("uq_member", ["user_id", "group_id"]);
    table.add_unique_index("uq_code", ["code"]);
    table.add_unique_index("uq_group_code", ["group_id", "code"]);

    let sql = table.compile_sql();
    assert_eq!(sql.len(), 4);
    assert_eq!(
        &sql[1..],
        [
            "CREATE UNIQUE INDEX uq_member ON memberships ( user_id, group_id );",
            "CREATE UNIQUE INDEX uq_code ON memberships ( code );",
            "CREATE UNIQUE INDEX uq_group_code ON memberships ( group_id, code );",
        ]
    );
}

/// Compiling twice without mutation yields identical output
#[test]
fn test_compile_twice_is_identical() {
    let mut table = Blueprint::new("events", default_options());
    table.bigint("id", None).auto_increment(true).primary(true);
    table.datetime("happened_at", Some(3)).default_value("CURRENT_TIMESTAMP(3)");
    table.json("payload", None).nullable(true);
    table.add_unique_index("uq_events_id", ["id"]);

    assert_eq!(table.compile_sql(), table.compile_sql());
}

// =============================================================================
// Column Type Tests
// =============================================================================

/// Every type renders its keyword upper-cased after the backticked name
#[test]
fn test_every_type_keyword() {
    for ty in FieldType::ALL {
        let sql = column_sql(|t| {
            t.field("col", ty, None);
        });
        assert_eq!(sql, format!("`col` {} NOT NULL", ty.as_sql()));
    }
}

#[test]
fn test_numeric_types() {
    assert_eq!(column_sql(|t| { t.smallint("a", Some(6)); }), "`a` SMALLINT(6) NOT NULL");
    assert_eq!(column_sql(|t| { t.mediumint("a", None); }), "`a` MEDIUMINT NOT NULL");
    assert_eq!(column_sql(|t| { t.decimal("a", Some(10)); }), "`a` DECIMAL(10) NOT NULL");
    assert_eq!(column_sql(|t| { t.float("a", None); }), "`a` FLOAT NOT NULL");
    assert_eq!(column_sql(|t| { t.double("a", None); }), "`a` DOUBLE NOT NULL");
    assert_eq!(column_sql(|t| { t.bit("a", Some(1)); }), "`a` BIT(1) NOT NULL");
}

#[test]
fn test_text_and_binary_types() {
    assert_eq!(column_sql(|t| { t.char("a", 2); }), "`a` CHAR(2) NOT NULL");
    assert_eq!(column_sql(|t| { t.binary("a", 16); }), "`a` BINARY(16) NOT NULL");
    assert_eq!(column_sql(|t| { t.varbinary("a", 32); }), "`a` VARBINARY(32) NOT NULL");
    assert_eq!(column_sql(|t| { t.tinytext("a", None); }), "`a` TINYTEXT NOT NULL");
    assert_eq!(column_sql(|t| { t.mediumtext("a", None); }), "`a` MEDIUMTEXT NOT NULL");
    assert_eq!(column_sql(|t| { t.longtext("a", None); }), "`a` LONGTEXT NOT NULL");
    assert_eq!(column_sql(|t| { t.tinyblob("a", None); }), "`a` TINYBLOB NOT NULL");
    assert_eq!(column_sql(|t| { t.blob("a", Some(1024)); }), "`a` BLOB(1024) NOT NULL");
    assert_eq!(column_sql(|t| { t.longblob("a", None); }), "`a` LONGBLOB NOT NULL");
}

#[test]
fn test_enumerated_types() {
    assert_eq!(
        column_sql(|t| {
            t.enumeration("mood", ["happy", "sad"]).default_value("happy");
        }),
        "`mood` ENUM( 'happy', 'sad' ) NOT NULL DEFAULT 'happy'"
    );
    assert_eq!(
        column_sql(|t| {
            t.set("perms", ["r", "w", "x"]).nullable(true);
        }),
        "`perms` SET( 'r', 'w', 'x' ) NULL"
    );
}

#[test]
fn test_date_time_types() {
    assert_eq!(column_sql(|t| { t.date("a", None); }), "`a` DATE NOT NULL");
    assert_eq!(column_sql(|t| { t.timestamp("a", Some(6)); }), "`a` TIMESTAMP(6) NOT NULL");
    assert_eq!(column_sql(|t| { t.time("a", None); }), "`a` TIME NOT NULL");
    assert_eq!(column_sql(|t| { t.year("a", Some(4)); }), "`a` YEAR(4) NOT NULL");
}

// =============================================================================
// Modifier Precedence Tests
// =============================================================================

/// A size-based type that was also given values renders the values
#[test]
fn test_values_take_precedence_over_size() {
    let sql = column_sql(|t| {
        t.varchar("odd", 20).values(["x", "y"]);
    });
    assert_eq!(sql, "`odd` VARCHAR( 'x', 'y' ) NOT NULL");
}

#[test]
fn test_primary_and_unique_renders_primary_only() {
    let sql = column_sql(|t| {
        t.int("id", None).primary(true).unique(true);
    });
    assert_eq!(sql, "`id` INT NOT NULL PRIMARY KEY");
    assert!(!sql.contains("UNIQUE"));
}

/// Unset default and falsy-but-set defaults are distinct
#[test]
fn test_default_presence() {
    assert!(!column_sql(|t| { t.int("a", None); }).contains("DEFAULT"));
    assert_eq!(
        column_sql(|t| { t.int("a", None).default_value(0); }),
        "`a` INT NOT NULL DEFAULT '0'"
    );
    assert_eq!(
        column_sql(|t| { t.varchar("a", 5).default_value(""); }),
        "`a` VARCHAR(5) NOT NULL DEFAULT ''"
    );
}

#[test]
fn test_comment_clause_is_last() {
    let sql = column_sql(|t| {
        t.int("id", Some(11))
            .comment("row id")
            .primary(true)
            .auto_increment(true)
            .default_value(1)
            .nullable(true);
    });
    assert_eq!(
        sql,
        "`id` INT(11) NULL DEFAULT '1' AUTO_INCREMENT PRIMARY KEY COMMENT 'row id'"
    );
}

// =============================================================================
// DROP TABLE Tests
// =============================================================================

#[test]
fn test_drop_table_has_no_semicolon() {
    assert_eq!(drop_table_sql("users"), "DROP TABLE users");
}
