//! Table blueprints: fields, unique indexes and table options

use simple_migrations_types::{Engine, FieldExtent, FieldType};

use crate::field::Field;

// =============================================================================
// Table Options
// =============================================================================

/// Table-level options rendered after the column list.
///
/// Unset options (and empty strings) are omitted from the generated SQL
/// entirely.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableOptions {
    /// Storage engine (`ENGINE = ...`)
    pub engine: Option<Engine>,
    /// Default character set (`CHARACTER SET = ...`)
    pub charset: Option<String>,
    /// Default collation (`COLLATE = ...`)
    pub collation: Option<String>,
}

impl TableOptions {
    /// Options with nothing set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the storage engine
    #[must_use]
    pub fn engine(mut self, engine: impl Into<Option<Engine>>) -> Self {
        self.engine = engine.into();
        self
    }

    /// Set the character set
    #[must_use]
    pub fn charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = Some(charset.into());
        self
    }

    /// Set the collation
    #[must_use]
    pub fn collation(mut self, collation: impl Into<String>) -> Self {
        self.collation = Some(collation.into());
        self
    }

    /// Render the trailing option clauses, each prefixed with a space
    fn to_sql(&self) -> String {
        let mut sql = String::new();

        if let Some(engine) = self.engine {
            sql.push_str(&format!(" ENGINE = {}", engine));
        }
        if let Some(charset) = non_empty(&self.charset) {
            sql.push_str(&format!(" CHARACTER SET = {}", charset));
        }
        if let Some(collation) = non_empty(&self.collation) {
            sql.push_str(&format!(" COLLATE = {}", collation));
        }

        sql
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

// =============================================================================
// Unique Index
// =============================================================================

/// A named unique index over an ordered list of columns.
///
/// The column names are not checked against the blueprint's fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UniqueIndex {
    pub name: String,
    pub fields: Vec<String>,
}

impl UniqueIndex {
    /// Generate CREATE UNIQUE INDEX SQL for the given table
    #[must_use]
    pub fn to_sql(&self, table: &str) -> String {
        format!(
            "CREATE UNIQUE INDEX {} ON {} ( {} );",
            self.name,
            table,
            self.fields.join(", ")
        )
    }
}

// =============================================================================
// Blueprint
// =============================================================================

/// In-memory description of one table, compiled to DDL by
/// [`compile_sql`](Blueprint::compile_sql).
///
/// Fields keep their insertion order, which is the column order of the
/// generated `CREATE TABLE`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Blueprint {
    name: String,
    options: TableOptions,
    fields: Vec<Field>,
    unique_indexes: Vec<UniqueIndex>,
}

/// Generates type methods whose size argument is optional
macro_rules! optional_size_fields {
    ($($(#[$meta:meta])* $method:ident => $ty:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $method(&mut self, name: impl Into<String>, size: Option<u32>) -> &mut Field {
                self.field(name, FieldType::$ty, size.map(FieldExtent::Size))
            }
        )*
    };
}

/// Generates type methods that require a size
macro_rules! sized_fields {
    ($($(#[$meta:meta])* $method:ident => $ty:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $method(&mut self, name: impl Into<String>, size: u32) -> &mut Field {
                self.field(name, FieldType::$ty, Some(FieldExtent::Size(size)))
            }
        )*
    };
}

impl Blueprint {
    /// Create an empty blueprint for `name` seeded with `options`
    #[must_use]
    pub fn new(name: impl Into<String>, options: TableOptions) -> Self {
        Self {
            name: name.into(),
            options,
            fields: Vec::new(),
            unique_indexes: Vec::new(),
        }
    }

    /// Append a field of any type and return it for further modification
    pub fn field(
        &mut self,
        name: impl Into<String>,
        field_type: FieldType,
        extent: Option<FieldExtent>,
    ) -> &mut Field {
        let mut field = Field::new(name, field_type);
        if let Some(extent) = extent {
            field.extent(extent);
        }

        self.fields.push(field);
        let last = self.fields.len() - 1;
        &mut self.fields[last]
    }

    // =========================================================================
    // Integer fields
    // =========================================================================

    optional_size_fields! {
        /// Add a `TINYINT` column
        tinyint => TinyInt,
        /// Add a `SMALLINT` column
        smallint => SmallInt,
        /// Add a `MEDIUMINT` column
        mediumint => MediumInt,
        /// Add an `INT` column
        int => Int,
        /// Add a `BIGINT` column
        bigint => BigInt,
        /// Add a `DECIMAL` column
        decimal => Decimal,
        /// Add a `FLOAT` column
        float => Float,
        /// Add a `DOUBLE` column
        double => Double,
        /// Add a `BIT` column
        bit => Bit,
    }

    // =========================================================================
    // Text fields
    // =========================================================================

    sized_fields! {
        /// Add a fixed-length `CHAR(size)` column
        char => Char,
        /// Add a `VARCHAR(size)` column
        varchar => VarChar,
        /// Add a fixed-length `BINARY(size)` column
        binary => Binary,
        /// Add a `VARBINARY(size)` column
        varbinary => VarBinary,
    }

    optional_size_fields! {
        tinytext => TinyText,
        text => Text,
        mediumtext => MediumText,
        longtext => LongText,
        tinyblob => TinyBlob,
        blob => Blob,
        mediumblob => MediumBlob,
        longblob => LongBlob,
    }

    /// Add an `ENUM` column with the given allowed values
    pub fn enumeration<I, S>(&mut self, name: impl Into<String>, values: I) -> &mut Field
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.field(name, FieldType::Enum, Some(FieldExtent::values(values)))
    }

    /// Add a `SET` column with the given allowed values
    pub fn set<I, S>(&mut self, name: impl Into<String>, values: I) -> &mut Field
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.field(name, FieldType::Set, Some(FieldExtent::values(values)))
    }

    // =========================================================================
    // Dates and time
    // =========================================================================

    optional_size_fields! {
        date => Date,
        /// Add a `DATETIME` column; the size is the fractional-seconds precision
        datetime => DateTime,
        /// Add a `TIMESTAMP` column; the size is the fractional-seconds precision
        timestamp => Timestamp,
        time => Time,
        year => Year,
    }

    // =========================================================================
    // Json values
    // =========================================================================

    optional_size_fields! {
        json => Json,
    }

    // =========================================================================
    // Table options and indexes
    // =========================================================================

    /// Set or clear the storage engine
    pub fn engine(&mut self, engine: impl Into<Option<Engine>>) -> &mut Self {
        self.options.engine = engine.into();
        self
    }

    /// Set the character set; an empty string leaves the clause out
    pub fn charset(&mut self, charset: impl Into<String>) -> &mut Self {
        self.options.charset = Some(charset.into());
        self
    }

    /// Set the collation; an empty string leaves the clause out
    pub fn collation(&mut self, collation: impl Into<String>) -> &mut Self {
        self.options.collation = Some(collation.into());
        self
    }

    /// Declare a unique index over `fields`, emitted after the table is created
    pub fn add_unique_index<I, S>(&mut self, name: impl Into<String>, fields: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unique_indexes.push(UniqueIndex {
            name: name.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        });
        self
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    #[inline]
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    #[inline]
    #[must_use]
    pub fn unique_indexes(&self) -> &[UniqueIndex] {
        &self.unique_indexes
    }

    // =========================================================================
    // SQL Generation
    // =========================================================================

    /// Compile the blueprint into its ordered statements: the `CREATE TABLE`
    /// followed by one `CREATE UNIQUE INDEX` per declared index.
    #[must_use]
    pub fn compile_sql(&self) -> Vec<String> {
        let mut sql = Vec::with_capacity(1 + self.unique_indexes.len());
        sql.push(self.create_table_sql());
        sql.extend(
            self.unique_indexes
                .iter()
                .map(|index| index.to_sql(&self.name)),
        );
        sql
    }

    /// Generate CREATE TABLE SQL
    #[must_use]
    pub fn create_table_sql(&self) -> String {
        format!(
            "CREATE TABLE {} ( {} ){};",
            self.name,
            self.compile_fields(),
            self.options.to_sql()
        )
    }

    fn compile_fields(&self) -> String {
        self.fields
            .iter()
            .map(Field::to_sql)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
