//! Table blueprints and their DDL compiler
//!
//! A [`Blueprint`] accumulates [`Field`] descriptions, unique indexes and
//! table options for a single table and compiles them into the ordered list of
//! statements needed to create it:
//!
//! ```
//! use simple_migrations_schema::{Blueprint, TableOptions};
//! use simple_migrations_types::Engine;
//!
//! let mut users = Blueprint::new("users", TableOptions::default().engine(Engine::InnoDB));
//! users.int("id", None).auto_increment(true).primary(true);
//! users.varchar("email", 255).unique(true);
//! users.add_unique_index("idx_email", ["email"]);
//!
//! let sql = users.compile_sql();
//! assert_eq!(sql.len(), 2);
//! assert_eq!(
//!     sql[0],
//!     "CREATE TABLE users ( `id` INT NOT NULL AUTO_INCREMENT PRIMARY KEY, \
//!      `email` VARCHAR(255) NOT NULL UNIQUE KEY ) ENGINE = InnoDB;"
//! );
//! assert_eq!(sql[1], "CREATE UNIQUE INDEX idx_email ON users ( email );");
//! ```
//!
//! Compilation never fails and never validates: any combination of builder
//! calls yields SQL text, and it is up to the database to reject it.

mod blueprint;
mod field;
pub mod sqlgen;

pub use blueprint::{Blueprint, TableOptions, UniqueIndex};
pub use field::Field;
pub use sqlgen::drop_table_sql;

pub use simple_migrations_types::{Engine, FieldCategory, FieldExtent, FieldType};
